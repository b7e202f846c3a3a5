pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "sales-etl")]
#[command(about = "Filters, deduplicates and ranks sold items by profit")]
pub struct CliConfig {
    /// CSV file with columns id,name,serial_number,cost,sales_price,sales_person
    #[arg(long)]
    pub input: Option<String>,

    /// Directory to write report files into
    #[arg(long)]
    pub output_path: Option<String>,

    #[arg(long, value_delimiter = ',', default_value = "text")]
    pub output_formats: Vec<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> Option<&str> {
        self.input.as_deref()
    }

    fn output_path(&self) -> Option<&str> {
        self.output_path.as_deref()
    }

    fn output_formats(&self) -> &[String] {
        &self.output_formats
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(input) = &self.input {
            validation::validate_path("input", input)?;
            validation::validate_file_extensions("input", std::slice::from_ref(input), &["csv"])?;
        }
        if let Some(output_path) = &self.output_path {
            validation::validate_path("output_path", output_path)?;
        }
        validation::validate_output_formats("output_formats", &self.output_formats)
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_use_sample_and_text() {
        let config = CliConfig::parse_from(["sales-etl"]);
        assert_eq!(config.input_path(), None);
        assert_eq!(config.output_path(), None);
        assert_eq!(config.output_formats(), &["text".to_string()]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_all_flags() {
        let config = CliConfig::parse_from([
            "sales-etl",
            "--input",
            "sales.csv",
            "--output-path",
            "./reports",
            "--output-formats",
            "csv,json",
            "--verbose",
        ]);
        assert_eq!(config.input_path(), Some("sales.csv"));
        assert_eq!(config.output_path(), Some("./reports"));
        assert_eq!(config.output_formats(), &["csv".to_string(), "json".to_string()]);
        assert!(config.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_csv_input() {
        let config = CliConfig::parse_from(["sales-etl", "--input", "sales.json"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_format() {
        let config = CliConfig::parse_from(["sales-etl", "--output-formats", "xml"]);
        assert!(config.validate().is_err());
    }
}
