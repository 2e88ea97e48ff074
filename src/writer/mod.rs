mod csv_writer;

pub use csv_writer::CsvWriter;

use anyhow::Result;
use std::path::Path;

use crate::config::DatasetMetadata;
use crate::mapping::map_checklist;
use crate::parser::{normalize, read_source};
use crate::schema::{TableKind, TableSchema};
use crate::ui::{Phase, Ui};

/// Settings for one conversion run
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Sheet to read from a workbook; first sheet when `None`
    pub sheet: Option<String>,
    /// Year used to close ongoing and post-extinction date ranges
    pub current_year: i32,
    pub metadata: DatasetMetadata,
}

/// Read the checklist, map it and write the selected tables to `output_dir`.
/// Returns the number of records written.
pub fn convert_to_csv(
    input: &Path,
    output_dir: &Path,
    tables: Vec<&TableSchema>,
    options: &ConvertOptions,
    ui: &mut impl Ui,
) -> Result<u64> {
    ui.set_phase(Phase::Reading);
    let raw = read_source(input, options.sheet.as_deref())?;
    let checklist = normalize(&raw, &options.metadata.slug)?;
    ui.set_info(format!(
        "{} taxa, {} columns",
        checklist.rows.len(),
        checklist.columns.len()
    ));

    ui.set_phase(Phase::Mapping);
    let mapped = map_checklist(&checklist, &options.metadata, options.current_year);
    ui.set_info(format!("{} records mapped", mapped.record_count()));

    ui.set_phase(Phase::Writing);
    let writer = CsvWriter::new(output_dir)?;
    let mut total_records: u64 = 0;

    for schema in &tables {
        let count = match schema.kind {
            TableKind::Taxon => writer.write_table(schema, &mapped.taxa, ui)?,
            TableKind::Distribution => writer.write_table(schema, &mapped.distributions, ui)?,
            TableKind::Description => writer.write_table(schema, &mapped.descriptions, ui)?,
        };
        total_records += count;
    }

    ui.clear_progress();
    ui.set_phase(Phase::Complete);

    Ok(total_records)
}
