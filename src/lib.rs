pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::{local::LocalSource, LintSettings, TomlConfig};
pub use core::{engine::LintEngine, pipeline::LintPipeline};
pub use domain::model::{LintReport, ReportFormat, RuleKind, Violation};
pub use utils::error::{LintError, Result};
