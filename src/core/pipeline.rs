use crate::core::report;
use crate::core::rules::Checker;
use crate::core::scanner::Scanner;
use crate::core::{ConfigProvider, ExtractResult, LintReport, Pipeline, SourceFile, SourceProvider};
use crate::utils::error::Result;
use std::io::Write;
use std::path::PathBuf;

pub struct LintPipeline<S: SourceProvider, C: ConfigProvider> {
    source: S,
    config: C,
    scanner: Scanner,
    checker: Checker,
}

impl<S: SourceProvider, C: ConfigProvider> LintPipeline<S, C> {
    pub fn new(source: S, config: C) -> Result<Self> {
        let checker = Checker::from_config(&config);
        Ok(Self {
            source,
            config,
            scanner: Scanner::new()?,
            checker,
        })
    }

    /// Files the extract stage would read, without reading them.
    pub async fn planned_files(&self) -> Result<Vec<PathBuf>> {
        self.source
            .list_files(
                self.config.root(),
                self.config.extensions(),
                self.config.exclude_dirs(),
            )
            .await
    }
}

#[async_trait::async_trait]
impl<S: SourceProvider, C: ConfigProvider> Pipeline for LintPipeline<S, C> {
    async fn extract(&self) -> Result<ExtractResult> {
        let files = self.planned_files().await?;
        tracing::debug!("Found {} candidate files under {}", files.len(), self.config.root().display());

        let mut result = ExtractResult::default();
        for path in files {
            match self.source.read_file(&path).await {
                Ok(contents) => result.sources.push(SourceFile { path, contents }),
                Err(e) => {
                    tracing::warn!("⚠️ Cannot read file {}: {}", path.display(), e);
                    result.skipped += 1;
                }
            }
        }

        Ok(result)
    }

    async fn transform(&self, data: ExtractResult) -> Result<LintReport> {
        let mut violations = Vec::new();

        for file in &data.sources {
            let declarations = self.scanner.scan(&file.contents);
            let before = violations.len();
            violations.extend(
                declarations
                    .iter()
                    .filter_map(|decl| self.checker.check(&file.path, decl)),
            );
            tracing::debug!(
                "{}: {} declarations, {} violations",
                file.path.display(),
                declarations.len(),
                violations.len() - before
            );
        }

        Ok(LintReport::new(data.sources.len(), data.skipped, violations))
    }

    async fn load(&self, report: &LintReport) -> Result<String> {
        let rendered = report::render(report, self.config.report_format())?;

        match self.config.output_path() {
            Some(path) => {
                self.source.write_file(path, rendered.as_bytes()).await?;
                Ok(path.display().to_string())
            }
            None => {
                print_report(&rendered)?;
                Ok("stdout".to_string())
            }
        }
    }
}

fn print_report(rendered: &str) -> Result<()> {
    write_report(&mut std::io::stdout().lock(), rendered)
}

/// Write errors, e.g. a closed pipe, surface as `LintError::IoError`.
fn write_report<W: Write>(out: &mut W, rendered: &str) -> Result<()> {
    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}
