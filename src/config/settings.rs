use crate::config::toml_config::TomlConfig;
use crate::core::rules::{DEFAULT_BOOL_PREFIX, DEFAULT_CLASS_PREFIXES};
use crate::domain::model::ReportFormat;
use crate::domain::ports::{ConfigProvider, EnabledRules};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::path::{Path, PathBuf};

pub const DEFAULT_EXTENSIONS: &[&str] = &["cpp", "h"];
/// Engine-generated output that is never hand-written.
pub const DEFAULT_EXCLUDE_DIRS: &[&str] = &["Intermediate", "Binaries"];

/// Effective configuration: defaults, then the config file, then CLI flags.
#[derive(Debug, Clone)]
pub struct LintSettings {
    pub root: PathBuf,
    pub class_prefixes: Vec<String>,
    pub bool_prefix: String,
    pub extensions: Vec<String>,
    pub exclude_dirs: Vec<String>,
    pub ignore_names: Vec<String>,
    pub rules: EnabledRules,
    pub report_format: ReportFormat,
    pub output: Option<PathBuf>,
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl LintSettings {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            class_prefixes: owned(DEFAULT_CLASS_PREFIXES),
            bool_prefix: DEFAULT_BOOL_PREFIX.to_string(),
            extensions: owned(DEFAULT_EXTENSIONS),
            exclude_dirs: owned(DEFAULT_EXCLUDE_DIRS),
            ignore_names: Vec::new(),
            rules: EnabledRules::default(),
            report_format: ReportFormat::default(),
            output: None,
        }
    }

    pub fn with_file_config(mut self, file: &TomlConfig) -> Self {
        if let Some(conventions) = &file.conventions {
            if let Some(prefixes) = &conventions.class_prefixes {
                self.class_prefixes = prefixes.clone();
            }
            if let Some(bool_prefix) = &conventions.bool_prefix {
                self.bool_prefix = bool_prefix.clone();
            }
            if let Some(ignore) = &conventions.ignore_names {
                self.ignore_names = ignore.clone();
            }
        }

        if let Some(scan) = &file.scan {
            if let Some(extensions) = &scan.extensions {
                self.extensions = extensions.clone();
            }
            if let Some(exclude) = &scan.exclude_dirs {
                self.exclude_dirs = exclude.clone();
            }
        }

        if let Some(rules) = &file.rules {
            self.rules = EnabledRules {
                classes: rules.classes.unwrap_or(self.rules.classes),
                functions: rules.functions.unwrap_or(self.rules.functions),
                variables: rules.variables.unwrap_or(self.rules.variables),
            };
        }

        if let Some(report) = &file.report {
            if let Some(format) = report.format {
                self.report_format = format;
            }
            if let Some(output) = &report.output {
                self.output = Some(PathBuf::from(output));
            }
        }

        self
    }

    #[cfg(feature = "cli")]
    pub fn from_cli(cli: &crate::config::cli::CliConfig, file: Option<&TomlConfig>) -> Self {
        let mut settings = Self::new(cli.path.clone());
        if let Some(file) = file {
            settings = settings.with_file_config(file);
        }

        if let Some(format) = cli.format {
            settings.report_format = format;
        }
        if let Some(output) = &cli.output {
            settings.output = Some(output.clone());
        }
        if !cli.extensions.is_empty() {
            settings.extensions = cli.extensions.clone();
        }

        settings
    }
}

impl Validate for LintSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_path("path", &self.root.to_string_lossy())?;

        validation::validate_non_empty_list("conventions.class_prefixes", &self.class_prefixes)?;
        for prefix in &self.class_prefixes {
            validation::validate_identifier_prefix("conventions.class_prefixes", prefix)?;
        }
        validation::validate_identifier_prefix("conventions.bool_prefix", &self.bool_prefix)?;
        validation::validate_extensions("scan.extensions", &self.extensions)?;

        if let Some(output) = &self.output {
            validation::validate_path("report.output", &output.to_string_lossy())?;
        }

        Ok(())
    }
}

impl ConfigProvider for LintSettings {
    fn root(&self) -> &Path {
        &self.root
    }

    fn class_prefixes(&self) -> &[String] {
        &self.class_prefixes
    }

    fn bool_prefix(&self) -> &str {
        &self.bool_prefix
    }

    fn extensions(&self) -> &[String] {
        &self.extensions
    }

    fn exclude_dirs(&self) -> &[String] {
        &self.exclude_dirs
    }

    fn ignore_names(&self) -> &[String] {
        &self.ignore_names
    }

    fn enabled_rules(&self) -> EnabledRules {
        self.rules
    }

    fn report_format(&self) -> ReportFormat {
        self.report_format
    }

    fn output_path(&self) -> Option<&Path> {
        self.output.as_deref()
    }
}
