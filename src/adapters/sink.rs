use crate::config::settings::OutputFormat;
use crate::core::report;
use crate::domain::model::UploadSummary;
use crate::domain::ports::{Storage, SummarySink};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Prints the summary to stdout.
pub struct ConsoleSink {
    format: OutputFormat,
}

impl ConsoleSink {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

#[async_trait]
impl SummarySink for ConsoleSink {
    async fn publish(&self, summary: &UploadSummary) -> Result<String> {
        println!("{}", report::render(summary, self.format)?);
        Ok("stdout".to_string())
    }
}

/// 將 JSON 摘要寫入儲存空間
pub struct FileSink<S: Storage> {
    storage: S,
    path: String,
}

impl<S: Storage> FileSink<S> {
    pub fn new(storage: S, path: String) -> Self {
        Self { storage, path }
    }
}

#[async_trait]
impl<S: Storage> SummarySink for FileSink<S> {
    async fn publish(&self, summary: &UploadSummary) -> Result<String> {
        let json = report::render_json(summary)?;
        tracing::debug!("Writing summary ({} bytes) to {}", json.len(), self.path);
        self.storage.write_file(&self.path, json.as_bytes()).await?;
        Ok(self.path.clone())
    }
}
