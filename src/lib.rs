pub mod cli;
pub mod config;
pub mod filter;
pub mod mapping;
pub mod parser;
pub mod schema;
pub mod ui;
pub mod writer;

pub use cli::{Cli, Commands};
pub use config::DatasetMetadata;
pub use ui::{ConsoleUi, Phase, SilentUi, Ui};
