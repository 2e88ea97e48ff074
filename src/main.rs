use alien_plants_dwc::{
    cli::{Cli, Commands},
    config::DatasetMetadata,
    filter::resolve_tables,
    mapping::vocab::{Location, INVASION_STAGE, NATIVE_RANGE, PATHWAY, PATHWAY_PREFIX},
    schema::ALL_TABLES,
    ui::ConsoleUi,
    writer::{convert_to_csv, ConvertOptions},
};
use anyhow::Result;
use chrono::Datelike;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Convert {
            input,
            output_dir,
            include,
            exclude,
            year,
            sheet,
            metadata,
        } => {
            let start = Instant::now();

            // Resolve table filters
            let tables = resolve_tables(include, exclude)?;

            let options = ConvertOptions {
                sheet,
                current_year: year.unwrap_or_else(|| chrono::Local::now().year()),
                metadata: DatasetMetadata::load(metadata.as_deref())?,
            };

            let mut ui = ConsoleUi::new();
            let record_count = convert_to_csv(&input, &output_dir, tables, &options, &mut ui)?;

            let elapsed = start.elapsed();
            println!(
                "\nWrote {} records to {:?} in {:.1}s",
                record_count,
                output_dir,
                elapsed.as_secs_f64()
            );
        }

        Commands::ListTables => {
            println!("Available tables:\n");
            for table in ALL_TABLES {
                println!("  {} ({}, {})", table.name, table.file_name, table.row_type);
                for col in table.columns {
                    println!("    {:20} {}", col.name, col.term());
                }
            }
        }

        Commands::Vocabulary => {
            print_vocabulary("Native range", NATIVE_RANGE, "");
            print_vocabulary("Pathway", PATHWAY, PATHWAY_PREFIX);
            print_vocabulary("Invasion stage", INVASION_STAGE, "");

            println!("Locations:");
            for location in Location::ALL {
                println!(
                    "  {:12} {:20} {}",
                    location.to_string(),
                    location.location_id(),
                    location.locality()
                );
            }
        }
    }

    Ok(())
}

fn print_vocabulary(title: &str, table: &[(&str, &str)], prefix: &str) {
    println!("{}:", title);
    for (raw, value) in table {
        if value.is_empty() {
            println!("  {:16} (dropped)", raw);
        } else {
            println!("  {:16} {}{}", raw, prefix, value);
        }
    }
    println!();
}

/// Diagnostics go to stderr; `RUST_LOG` wins unless `--verbose` is given
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
