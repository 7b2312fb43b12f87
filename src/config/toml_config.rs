use crate::domain::model::ReportFormat;
use crate::utils::error::{LintError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "naming-lint.toml";

/// Contents of `naming-lint.toml`. Every table and key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub conventions: Option<ConventionsConfig>,
    pub scan: Option<ScanConfig>,
    pub rules: Option<RulesConfig>,
    pub report: Option<ReportConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConventionsConfig {
    pub class_prefixes: Option<Vec<String>>,
    pub bool_prefix: Option<String>,
    pub ignore_names: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanConfig {
    pub extensions: Option<Vec<String>>,
    pub exclude_dirs: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RulesConfig {
    pub classes: Option<bool>,
    pub functions: Option<bool>,
    pub variables: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    pub format: Option<ReportFormat>,
    pub output: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(LintError::PathNotFoundError {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| LintError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` with the environment value; unknown variables stay verbatim.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}")?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(conventions) = &self.conventions {
            if let Some(prefixes) = &conventions.class_prefixes {
                validation::validate_non_empty_list("conventions.class_prefixes", prefixes)?;
                for prefix in prefixes {
                    validation::validate_identifier_prefix("conventions.class_prefixes", prefix)?;
                }
            }
            if let Some(bool_prefix) = &conventions.bool_prefix {
                validation::validate_identifier_prefix("conventions.bool_prefix", bool_prefix)?;
            }
        }

        if let Some(extensions) = self.scan.as_ref().and_then(|s| s.extensions.as_ref()) {
            validation::validate_extensions("scan.extensions", extensions)?;
        }

        if let Some(output) = self.report.as_ref().and_then(|r| r.output.as_ref()) {
            validation::validate_path("report.output", output)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[conventions]
class_prefixes = ["A", "U", "F", "E", "I", "T"]
bool_prefix = "b"
ignore_names = ["main"]

[scan]
extensions = ["cpp", "h", "inl"]
exclude_dirs = ["ThirdParty"]

[rules]
functions = false

[report]
format = "json"
output = "./reports/naming.json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let conventions = config.conventions.as_ref().unwrap();
        assert_eq!(conventions.class_prefixes.as_ref().unwrap().len(), 6);
        assert_eq!(conventions.ignore_names.as_ref().unwrap(), &vec!["main".to_string()]);
        assert_eq!(config.rules.as_ref().unwrap().functions, Some(false));
        assert_eq!(config.rules.as_ref().unwrap().classes, None);
        assert_eq!(config.report.as_ref().unwrap().format, Some(ReportFormat::Json));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.conventions.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("NAMING_LINT_TEST_REPORT_DIR", "/tmp/naming");

        let toml_content = r#"
[report]
output = "${NAMING_LINT_TEST_REPORT_DIR}/report.txt"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.report.unwrap().output.as_deref(),
            Some("/tmp/naming/report.txt")
        );

        std::env::remove_var("NAMING_LINT_TEST_REPORT_DIR");
    }

    #[test]
    fn test_unknown_env_var_is_left_verbatim() {
        let toml_content = r#"
[report]
output = "${NAMING_LINT_SURELY_UNSET_VAR}/report.txt"
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.report.unwrap().output.as_deref(),
            Some("${NAMING_LINT_SURELY_UNSET_VAR}/report.txt")
        );
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let bad_format = "[report]\nformat = \"xml\"\n";
        assert!(TomlConfig::from_toml_str(bad_format).is_err());

        let bad_prefix = "[conventions]\nbool_prefix = \"b_\"\n";
        let config = TomlConfig::from_toml_str(bad_prefix).unwrap();
        assert!(config.validate().is_err());

        let bad_extension = "[scan]\nextensions = [\".cpp\"]\n";
        let config = TomlConfig::from_toml_str(bad_extension).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_config_file_is_a_usage_error() {
        let err = TomlConfig::from_file("/no/such/naming-lint.toml").unwrap_err();
        assert!(matches!(err, LintError::PathNotFoundError { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[conventions]\nclass_prefixes = [\"A\"]\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(
            config.conventions.unwrap().class_prefixes.unwrap(),
            vec!["A".to_string()]
        );
    }
}
