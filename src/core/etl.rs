use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract, transform and load; returns the rendered listings.
    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting sales ETL process");

        tracing::info!("Extracting sales records...");
        let raw_data = self.pipeline.extract().await?;
        tracing::info!("Extracted {} records", raw_data.len());

        tracing::info!("Filtering and sorting records...");
        let report = self.pipeline.transform(raw_data).await?;
        tracing::info!(
            "Kept {} of {} records",
            report.filtered.len(),
            report.original.len()
        );

        tracing::info!("Loading report...");
        let rendered = self.pipeline.load(report).await?;

        Ok(rendered)
    }
}
