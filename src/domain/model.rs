use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 檔案的完整文字內容，只在單次處理中存在
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContent(String);

impl FileContent {
    /// Decodes raw bytes the way a browser text reader does: invalid UTF-8 is replaced.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(String::from_utf8_lossy(bytes).into_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedFile {
    pub name: String,
    pub path: String,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UploadState {
    Idle,
    Ready,
    Processing,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordCountSource {
    Counted,
    Simulated,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryVolume {
    pub category: String,
    pub orders: u64,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadSummary {
    pub file_name: String,
    pub file_size_bytes: u64,
    pub total_records: usize,
    pub valid_records: usize,
    pub error_records: usize,
    pub processing_time_secs: f64,
    pub columns: Vec<String>,
    pub record_count_source: RecordCountSource,
    pub category_volumes: Vec<CategoryVolume>,
    /// valid/error 數、處理時間與圖表數據皆為模擬值
    pub simulated: bool,
    pub processed_at: DateTime<Utc>,
}

impl UploadSummary {
    pub fn headline(&self) -> String {
        format!("{} records processed successfully!", self.total_records)
    }
}
