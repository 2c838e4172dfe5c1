use crate::core::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

/// Runs scan → render → write. Nothing is written unless the whole scan succeeds.
pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        let started = Instant::now();
        tracing::info!("🔍 Scanning universities...");
        let records = self.pipeline.extract().await?;
        tracing::info!("Scanned {} universities", records.len());

        tracing::info!("📝 Rendering report...");
        let artifacts = self.pipeline.transform(records).await?;
        tracing::info!(
            "{} out of {} universities appear to have RSE groups",
            artifacts.rse_count(),
            artifacts.records.len()
        );

        let output_path = self.pipeline.load(artifacts).await?;
        tracing::info!(
            "Report written to {} in {:?}",
            output_path,
            started.elapsed()
        );

        Ok(output_path)
    }
}
