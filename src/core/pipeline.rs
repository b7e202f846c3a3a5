use crate::core::report;
use crate::core::sales;
use crate::core::{ConfigProvider, Pipeline, SalesReport, SoldItem, Storage};
use crate::domain::sample::sample_items;
use crate::utils::error::{EtlError, Result};
use std::path::Path;

pub const TEXT_FILENAME: &str = "report.txt";
pub const CSV_FILENAME: &str = "filtered.csv";
pub const JSON_FILENAME: &str = "report.json";

pub struct SalesPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> SalesPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn parse_records(data: &[u8]) -> Result<Vec<SoldItem>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(data);

        let mut items = Vec::new();
        for record in reader.deserialize() {
            items.push(record?);
        }
        Ok(items)
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for SalesPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<SoldItem>> {
        match self.config.input_path() {
            Some(path) => {
                tracing::debug!("Reading sales records from: {}", path);
                let data = self.storage.read_file(path).await.map_err(|e| match e {
                    EtlError::IoError(source) => EtlError::InputReadError {
                        path: path.to_string(),
                        source,
                    },
                    other => other,
                })?;
                let items = Self::parse_records(&data)?;
                tracing::debug!("Parsed {} records from {}", items.len(), path);
                Ok(items)
            }
            None => {
                tracing::debug!("No input file configured, using the sample batch");
                Ok(sample_items())
            }
        }
    }

    async fn transform(&self, data: Vec<SoldItem>) -> Result<SalesReport> {
        Ok(sales::run(data))
    }

    async fn load(&self, report: SalesReport) -> Result<String> {
        let rendered = report::render_report(&report);

        let Some(output_path) = self.config.output_path() else {
            return Ok(rendered);
        };

        for format in self.config.output_formats() {
            let (filename, contents) = match format.as_str() {
                "text" => (TEXT_FILENAME, rendered.clone()),
                "csv" => (CSV_FILENAME, report::to_csv(&report.filtered)?),
                "json" => (JSON_FILENAME, report::to_json(&report)?),
                other => {
                    tracing::warn!("Skipping unknown output format: {}", other);
                    continue;
                }
            };

            let target = Path::new(output_path).join(filename);
            let target = target.to_string_lossy();
            tracing::debug!("Writing {} ({} bytes)", target, contents.len());
            self.storage.write_file(&target, contents.as_bytes()).await?;
        }

        Ok(rendered)
    }
}
