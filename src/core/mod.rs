pub mod etl;
pub mod pipeline;
pub mod report;
pub mod sales;

pub use crate::domain::model::{AnnotatedItem, SalesReport, SoldItem};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
