#[cfg(feature = "cli")]
pub mod cli;
pub mod local;
pub mod settings;
pub mod toml_config;

pub use settings::LintSettings;
pub use toml_config::TomlConfig;
