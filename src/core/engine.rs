use crate::core::{LintReport, Pipeline};
use crate::utils::error::Result;

pub struct LintEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> LintEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<LintReport> {
        tracing::info!("Starting naming check...");

        // Extract
        let sources = self.pipeline.extract().await?;
        tracing::info!(
            "Collected {} source files ({} skipped)",
            sources.sources.len(),
            sources.skipped
        );

        // Transform
        let report = self.pipeline.transform(sources).await?;
        tracing::info!(
            "Checked {} files, found {} violations",
            report.files_scanned,
            report.error_count()
        );

        // Load
        let destination = self.pipeline.load(&report).await?;
        tracing::debug!("Report written to: {}", destination);

        Ok(report)
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }
}
