use crate::config::toml_config::{TomlConfig, DEFAULT_CONFIG_FILE};
use crate::domain::model::ReportFormat;
use crate::utils::error::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Parser)]
#[command(name = "naming-lint")]
#[command(about = "Check Unreal Engine C++ sources against naming conventions")]
pub struct CliConfig {
    /// Directory (searched recursively) or single file to check
    pub path: PathBuf,

    /// Path to TOML configuration file [default: ./naming-lint.toml if present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Report format, overrides [report].format
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Comma-separated extensions to scan, overrides [scan].extensions
    #[arg(long, value_delimiter = ',')]
    pub extensions: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit log lines as JSON
    #[arg(long)]
    pub log_json: bool,

    /// List the files that would be checked without checking them
    #[arg(long)]
    pub dry_run: bool,
}

impl CliConfig {
    /// The explicit `--config` file, or `naming-lint.toml` in the working
    /// directory when it exists.
    pub fn load_file_config(&self) -> Result<Option<TomlConfig>> {
        match &self.config {
            Some(path) => TomlConfig::from_file(path).map(Some),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    tracing::debug!("Using {}", DEFAULT_CONFIG_FILE);
                    TomlConfig::from_file(default_path).map(Some)
                } else {
                    Ok(None)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_args() {
        let cli = CliConfig::parse_from(["naming-lint", "Source"]);
        assert_eq!(cli.path, PathBuf::from("Source"));
        assert!(cli.config.is_none());
        assert!(cli.format.is_none());
        assert!(cli.extensions.is_empty());
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_parse_overrides() {
        let cli = CliConfig::parse_from([
            "naming-lint",
            "Source",
            "-f",
            "json",
            "-o",
            "report.json",
            "--extensions",
            "cpp,h,hpp",
            "-v",
        ]);
        assert_eq!(cli.format, Some(ReportFormat::Json));
        assert_eq!(cli.output, Some(PathBuf::from("report.json")));
        assert_eq!(cli.extensions, vec!["cpp", "h", "hpp"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let cli = CliConfig::parse_from(["naming-lint", "Source", "-c", "/no/such/naming-lint.toml"]);
        assert!(cli.load_file_config().is_err());
    }
}
