//! CLI argument parsing and data-source resolution.

use std::io;
use std::path::PathBuf;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Embedded sample dataset as fallback
const EMBEDDED_FARM: &str = include_str!("../../data/farm.json");

/// Where the farm dataset comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// A farm.json on disk, watched for live reload.
    File(PathBuf),
    /// The built-in sample dataset.
    Embedded,
}

impl DataSource {
    pub fn embedded_content() -> &'static str {
        EMBEDDED_FARM
    }
}

/// Configuration from CLI arguments
pub struct CliConfig {
    pub source: DataSource,
}

/// Print usage information
pub fn print_usage() {
    eprintln!("AgroVault TUI - Terminal dashboard for confidential agricultural finance");
    eprintln!();
    eprintln!("Usage: agrovault-tui [farm-data-file] [OPTIONS]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [farm-data-file]  Path to a farm.json dataset");
    eprintln!("                    If omitted, looks for ./agrovault/farm.json, then");
    eprintln!("                    the user config directory, then built-in sample data");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -h, --help     Show this help message");
    eprintln!("  -V, --version  Show version");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  agrovault-tui                  # Built-in sample data");
    eprintln!("  agrovault-tui my-farm.json     # Custom dataset, live-reloaded on change");
}

/// Find the farm dataset in order of priority:
/// 1. ./agrovault/farm.json (local project data)
/// 2. <config dir>/agrovault/farm.json (global user data)
/// 3. Embedded sample data
fn find_data_source() -> DataSource {
    let local_path = PathBuf::from("agrovault/farm.json");
    if local_path.exists() {
        return DataSource::File(local_path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let global_path = config_dir.join("agrovault").join("farm.json");
        if global_path.exists() {
            return DataSource::File(global_path);
        }
    }

    eprintln!("No farm.json found in ./agrovault/ or the config directory, using sample data");
    DataSource::Embedded
}

/// Outcome of scanning the raw argument list, before path resolution.
#[derive(Debug, PartialEq, Eq)]
enum ParsedArgs {
    Help,
    Version,
    DataFile(Option<PathBuf>),
}

fn parse_arg_list(args: &[String]) -> io::Result<ParsedArgs> {
    let mut data_file: Option<PathBuf> = None;

    for arg in args {
        if arg == "-h" || arg == "--help" {
            return Ok(ParsedArgs::Help);
        } else if arg == "-V" || arg == "--version" {
            return Ok(ParsedArgs::Version);
        } else if !arg.starts_with('-') {
            if data_file.is_some() {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("Unexpected extra argument: {}", arg),
                ));
            }
            data_file = Some(PathBuf::from(arg));
        } else {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Unknown argument: {}", arg),
            ));
        }
    }

    Ok(ParsedArgs::DataFile(data_file))
}

/// Parse CLI arguments and return configuration
pub fn parse_args() -> io::Result<CliConfig> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let data_file = match parse_arg_list(&args) {
        Ok(ParsedArgs::Help) => {
            print_usage();
            std::process::exit(0);
        }
        Ok(ParsedArgs::Version) => {
            println!("agrovault-tui {}", VERSION);
            std::process::exit(0);
        }
        Ok(ParsedArgs::DataFile(data_file)) => data_file,
        Err(e) => {
            print_usage();
            return Err(e);
        }
    };

    let source = if let Some(path) = data_file {
        if !path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Farm data file not found: {}", path.display()),
            ));
        }
        DataSource::File(path)
    } else {
        find_data_source()
    };

    Ok(CliConfig { source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FarmData;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_arg_list_single_positional() {
        let parsed = parse_arg_list(&args(&["my-farm.json"])).unwrap();
        assert_eq!(
            parsed,
            ParsedArgs::DataFile(Some(PathBuf::from("my-farm.json")))
        );
    }

    #[test]
    fn test_parse_arg_list_no_args() {
        let parsed = parse_arg_list(&args(&[])).unwrap();
        assert_eq!(parsed, ParsedArgs::DataFile(None));
    }

    #[test]
    fn test_parse_arg_list_rejects_extra_positional() {
        let err = parse_arg_list(&args(&["a.json", "b.json"])).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert_eq!(err.to_string(), "Unexpected extra argument: b.json");
    }

    #[test]
    fn test_parse_arg_list_rejects_unknown_flag() {
        let err = parse_arg_list(&args(&["--frobnicate"])).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_parse_arg_list_help_and_version() {
        assert_eq!(parse_arg_list(&args(&["-h"])).unwrap(), ParsedArgs::Help);
        assert_eq!(
            parse_arg_list(&args(&["--version"])).unwrap(),
            ParsedArgs::Version
        );
    }

    #[test]
    fn test_embedded_content_is_valid_dataset() {
        let mut farm = FarmData::from_json(DataSource::embedded_content()).unwrap();
        let rejected = farm.sanitize();
        assert!(rejected.is_empty());
        assert!(!farm.predictions.is_empty());
    }
}
