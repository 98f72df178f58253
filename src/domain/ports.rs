use crate::config::settings::{CategorySpec, ReadFailurePolicy};
use crate::domain::model::UploadSummary;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn file_size(&self, path: &str) -> impl std::future::Future<Output = Result<u64>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn processing_delay(&self) -> Duration;
    fn read_failure_policy(&self) -> ReadFailurePolicy;
    fn categories(&self) -> &[CategorySpec];
}

/// 模擬數據來源；所有非由檔案推導出的數字都從這裡產生
pub trait StatsSource: Send {
    fn fallback_record_count(&mut self) -> usize;
    fn error_records(&mut self, total: usize) -> usize;
    fn processing_time_secs(&mut self) -> f64;
    fn order_volume(&mut self) -> u64;
}

#[async_trait]
pub trait SummarySink: Send + Sync {
    /// Publishes the summary and returns where it went.
    async fn publish(&self, summary: &UploadSummary) -> Result<String>;
}
