use crate::schema::{get_table, TableSchema, ALL_TABLES};
use anyhow::{bail, Result};

/// Resolves which output tables to write based on include/exclude filters.
/// Tables are always returned in canonical order (taxon core first).
pub fn resolve_tables(
    include: Option<Vec<String>>,
    exclude: Option<Vec<String>>,
) -> Result<Vec<&'static TableSchema>> {
    match (include, exclude) {
        (Some(_), Some(_)) => {
            bail!("Cannot use both --include and --exclude at the same time");
        }
        (Some(include_list), None) => {
            validate_names(&include_list)?;
            let tables: Vec<_> = ALL_TABLES
                .iter()
                .filter(|t| include_list.iter().any(|n| n == t.name))
                .copied()
                .collect();

            println!("Including {} tables:", tables.len());
            for t in &tables {
                println!("  - {}", t.name);
            }

            Ok(tables)
        }
        (None, Some(exclude_list)) => {
            validate_names(&exclude_list)?;
            println!("Excluding tables: {:?}", exclude_list);
            let tables: Vec<_> = ALL_TABLES
                .iter()
                .filter(|t| !exclude_list.iter().any(|n| n == t.name))
                .copied()
                .collect();

            println!("Including {} tables (after exclusions)", tables.len());

            Ok(tables)
        }
        (None, None) => Ok(ALL_TABLES.to_vec()),
    }
}

fn validate_names(names: &[String]) -> Result<()> {
    for name in names {
        if get_table(name).is_none() {
            bail!("Unknown table: {}", name);
        }
    }
    Ok(())
}
