use crate::core::ConfigProvider;
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pipeline: PipelineConfig,
    pub source: SourceConfig,
    pub load: LoadConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Sample,
    Csv,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub r#type: SourceType,
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: Option<String>,
    #[serde(default = "default_output_formats")]
    pub output_formats: Vec<String>,
}

fn default_output_formats() -> Vec<String> {
    vec!["text".to_string()]
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub verbose: Option<bool>,
    pub json_logs: Option<bool>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EtlError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` references with environment values; unknown ones stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| EtlError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Checks field values beyond what deserialization enforces.
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("pipeline.name", &self.pipeline.name)?;

        if self.source.r#type == SourceType::Csv {
            let path = validation::validate_required_field("source.path", &self.source.path)?;
            validation::validate_path("source.path", path)?;
            validation::validate_file_extensions("source.path", std::slice::from_ref(path), &["csv"])?;
        }

        if let Some(output_path) = &self.load.output_path {
            validation::validate_path("load.output_path", output_path)?;
        }

        validation::validate_output_formats("load.output_formats", &self.load.output_formats)
    }

    pub fn verbose(&self) -> bool {
        self.monitoring.as_ref().and_then(|m| m.verbose).unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.monitoring.as_ref().and_then(|m| m.json_logs).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> Option<&str> {
        match self.source.r#type {
            SourceType::Sample => None,
            SourceType::Csv => self.source.path.as_deref(),
        }
    }

    fn output_path(&self) -> Option<&str> {
        self.load.output_path.as_deref()
    }

    fn output_formats(&self) -> &[String] {
        &self.load.output_formats
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
