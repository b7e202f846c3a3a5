pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::TomlConfig};
pub use core::{etl::EtlEngine, pipeline::SalesPipeline};
pub use domain::model::{AnnotatedItem, SalesReport, SalespersonTotal, SoldItem};
pub use utils::error::{EtlError, Result};
