use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "alien-plants-dwc")]
#[command(version, about = "Map the checklist of alien plants of Belgium to Darwin Core")]
pub struct Cli {
    /// Show debug diagnostics (dropped tokens, missing columns)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a checklist (CSV, TSV, XLS, XLSX or ODS) to Darwin Core CSV files
    Convert {
        /// Checklist file
        input: PathBuf,

        /// Directory for taxon.csv, distribution.csv and description.csv
        output_dir: PathBuf,

        /// Only write these tables (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        include: Option<Vec<String>>,

        /// Skip these tables (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        exclude: Option<Vec<String>>,

        /// Year used for ongoing and post-extinction date ranges (default: this year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Sheet to read from a workbook (default: first sheet)
        #[arg(short, long)]
        sheet: Option<String>,

        /// JSON file overriding dataset metadata (slug, license, rights_holder, ...)
        #[arg(short, long)]
        metadata: Option<PathBuf>,
    },

    /// List output tables and their columns
    ListTables,

    /// Print the controlled vocabularies used by the mapping
    Vocabulary,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
