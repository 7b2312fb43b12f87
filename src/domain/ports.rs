use crate::domain::model::{ExtractResult, LintReport, ReportFormat};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

pub trait SourceProvider: Send + Sync {
    /// Candidate files below `root` (or `root` itself when it is a file), sorted.
    fn list_files(
        &self,
        root: &Path,
        extensions: &[String],
        exclude_dirs: &[String],
    ) -> impl std::future::Future<Output = Result<Vec<PathBuf>>> + Send;
    fn read_file(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
    fn write_file(
        &self,
        path: &Path,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnabledRules {
    pub classes: bool,
    pub functions: bool,
    pub variables: bool,
}

impl Default for EnabledRules {
    fn default() -> Self {
        Self {
            classes: true,
            functions: true,
            variables: true,
        }
    }
}

pub trait ConfigProvider: Send + Sync {
    fn root(&self) -> &Path;
    fn class_prefixes(&self) -> &[String];
    fn bool_prefix(&self) -> &str;
    fn extensions(&self) -> &[String];
    fn exclude_dirs(&self) -> &[String];
    fn ignore_names(&self) -> &[String];
    fn enabled_rules(&self) -> EnabledRules;
    fn report_format(&self) -> ReportFormat;
    fn output_path(&self) -> Option<&Path>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<ExtractResult>;
    async fn transform(&self, data: ExtractResult) -> Result<LintReport>;
    async fn load(&self, report: &LintReport) -> Result<String>;
}
