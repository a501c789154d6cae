//! CLI argument parsing for the AgroVault TUI.

mod args;

pub use args::{parse_args, CliConfig, DataSource, VERSION};
