use crate::domain::model::{SalesReport, SoldItem};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    /// CSV file to read records from; `None` selects the built-in sample batch.
    fn input_path(&self) -> Option<&str>;
    /// Directory receiving report files; `None` keeps output on stdout only.
    fn output_path(&self) -> Option<&str>;
    fn output_formats(&self) -> &[String];
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<SoldItem>>;
    async fn transform(&self, data: Vec<SoldItem>) -> Result<SalesReport>;
    async fn load(&self, report: SalesReport) -> Result<String>;
}
