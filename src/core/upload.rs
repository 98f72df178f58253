use crate::config::settings::{CategorySpec, ReadFailurePolicy};
use crate::core::chart::OrderVolumeChart;
use crate::core::csv_header::read_header_columns;
use crate::domain::model::{
    FileContent, RecordCountSource, SelectedFile, UploadState, UploadSummary,
};
use crate::domain::ports::{ConfigProvider, StatsSource, Storage};
use crate::utils::error::{Result, UploadError};
use crate::utils::format::format_file_size;
use crate::utils::validation::validate_file_extension;
use chrono::Utc;
use std::path::Path;
use std::time::Duration;

const ACCEPTED_EXTENSIONS: [&str; 1] = ["csv"];

/// Owns the state of one upload form: the selected file, where the flow is,
/// and the last summary shown.
pub struct UploadSession<S: Storage, R: StatsSource> {
    storage: S,
    stats: R,
    processing_delay: Duration,
    read_failure_policy: ReadFailurePolicy,
    categories: Vec<CategorySpec>,
    state: UploadState,
    current_file: Option<SelectedFile>,
    last_summary: Option<UploadSummary>,
}

impl<S: Storage, R: StatsSource> UploadSession<S, R> {
    pub fn new<C: ConfigProvider>(storage: S, stats: R, config: &C) -> Self {
        Self {
            storage,
            stats,
            processing_delay: config.processing_delay(),
            read_failure_policy: config.read_failure_policy(),
            categories: config.categories().to_vec(),
            state: UploadState::Idle,
            current_file: None,
            last_summary: None,
        }
    }

    pub fn state(&self) -> UploadState {
        self.state
    }

    pub fn current_file(&self) -> Option<&SelectedFile> {
        self.current_file.as_ref()
    }

    pub fn last_summary(&self) -> Option<&UploadSummary> {
        self.last_summary.as_ref()
    }

    /// 對應「Process Data」按鈕是否可按
    pub fn can_process(&self) -> bool {
        self.state == UploadState::Ready
    }

    /// Selects a file for processing.
    ///
    /// Non-CSV names are rejected and the previous selection is kept.
    pub async fn select_file(&mut self, path: &str) -> Result<&SelectedFile> {
        let name = Path::new(path)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(path)
            .to_string();

        if let Err(e) = validate_file_extension(&name, &ACCEPTED_EXTENSIONS) {
            tracing::warn!("Rejected selection '{}': not a CSV file", name);
            return Err(e);
        }

        let size_bytes = self.storage.file_size(path).await?;
        tracing::info!("Selected file: {} ({})", name, format_file_size(size_bytes));

        self.last_summary = None;
        self.state = UploadState::Ready;
        Ok(&*self.current_file.insert(SelectedFile {
            name,
            path: path.to_string(),
            size_bytes,
        }))
    }

    pub fn selection_label(&self) -> Option<String> {
        self.current_file.as_ref().map(|file| {
            format!(
                "Selected file: {} ({})",
                file.name,
                format_file_size(file.size_bytes)
            )
        })
    }

    /// Simulates processing the selected file and builds its summary.
    pub async fn process(&mut self) -> Result<&UploadSummary> {
        let file = self.current_file.clone().ok_or(UploadError::NoFileSelected)?;

        self.state = UploadState::Processing;
        tracing::info!("Processing {}...", file.name);

        if !self.processing_delay.is_zero() {
            tokio::time::sleep(self.processing_delay).await;
        }

        let (total_records, columns, source) = match self.storage.read_file(&file.path).await {
            Ok(bytes) => {
                let content = FileContent::from_bytes(&bytes);
                let columns = read_header_columns(content.as_str()).unwrap_or_else(|e| {
                    tracing::warn!("Could not parse header row of {}: {}", file.name, e);
                    Vec::new()
                });
                (content.record_count(), columns, RecordCountSource::Counted)
            }
            Err(e) => match self.read_failure_policy {
                ReadFailurePolicy::Error => {
                    self.state = UploadState::Ready;
                    tracing::error!("Failed to read {}: {}", file.path, e);
                    return Err(UploadError::UnreadableFile {
                        path: file.path,
                        reason: e.to_string(),
                    });
                }
                ReadFailurePolicy::Simulate => {
                    let count = self.stats.fallback_record_count();
                    tracing::warn!(
                        "Failed to read {} ({}); substituting simulated count {}",
                        file.path,
                        e,
                        count
                    );
                    (count, Vec::new(), RecordCountSource::Simulated)
                }
            },
        };

        let error_records = self.stats.error_records(total_records);
        let chart = OrderVolumeChart::generate(&self.categories, &mut self.stats);

        let summary = UploadSummary {
            file_name: file.name,
            file_size_bytes: file.size_bytes,
            total_records,
            valid_records: total_records - error_records,
            error_records,
            processing_time_secs: self.stats.processing_time_secs(),
            columns,
            record_count_source: source,
            category_volumes: chart.into_bars(),
            simulated: true,
            processed_at: Utc::now(),
        };

        tracing::debug!(
            total = summary.total_records,
            valid = summary.valid_records,
            errors = summary.error_records,
            "Summary built"
        );

        self.state = UploadState::Completed;
        Ok(&*self.last_summary.insert(summary))
    }

    /// 「上傳另一個檔案」：回到初始狀態
    pub fn reset(&mut self) {
        self.current_file = None;
        self.last_summary = None;
        self.state = UploadState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::{SimulationSettings, UploadSettings};
    use crate::core::simulated::SimulatedStats;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
        sizes: Arc<Mutex<HashMap<String, u64>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
                sizes: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn put(&self, path: &str, data: &[u8]) {
            self.files
                .lock()
                .await
                .insert(path.to_string(), data.to_vec());
            self.sizes
                .lock()
                .await
                .insert(path.to_string(), data.len() as u64);
        }

        /// 只登記檔案大小，讀取時會失敗
        async fn put_unreadable(&self, path: &str, size: u64) {
            self.sizes.lock().await.insert(path.to_string(), size);
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                UploadError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            self.put(path, data).await;
            Ok(())
        }

        async fn file_size(&self, path: &str) -> Result<u64> {
            let sizes = self.sizes.lock().await;
            sizes.get(path).copied().ok_or_else(|| {
                UploadError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }
    }

    fn settings(policy: ReadFailurePolicy) -> UploadSettings {
        UploadSettings {
            processing_delay_ms: 0,
            on_read_error: policy,
            simulation: SimulationSettings {
                seed: Some(42),
                ..SimulationSettings::default()
            },
            ..UploadSettings::default()
        }
    }

    fn session(
        storage: MockStorage,
        policy: ReadFailurePolicy,
    ) -> UploadSession<MockStorage, SimulatedStats> {
        let config = settings(policy);
        let stats = SimulatedStats::new(config.simulation.clone()).unwrap();
        UploadSession::new(storage, stats, &config)
    }

    #[tokio::test]
    async fn test_select_and_process_counts_records() {
        let storage = MockStorage::new();
        storage
            .put("uploads/orders.csv", b"order_id,product_type\n1,Electronics\n2,Clothing\n\n3,Groceries\n")
            .await;
        let mut session = session(storage, ReadFailurePolicy::Error);

        assert_eq!(session.state(), UploadState::Idle);
        assert!(!session.can_process());

        let selected = session.select_file("uploads/orders.csv").await.unwrap();
        assert_eq!(selected.name, "orders.csv");
        assert!(session.can_process());
        assert_eq!(
            session.selection_label().unwrap(),
            "Selected file: orders.csv (60 Bytes)"
        );

        let summary = session.process().await.unwrap().clone();
        assert_eq!(summary.total_records, 3);
        assert_eq!(summary.record_count_source, RecordCountSource::Counted);
        assert_eq!(summary.valid_records + summary.error_records, 3);
        assert_eq!(summary.columns, vec!["order_id", "product_type"]);
        assert_eq!(summary.category_volumes.len(), 6);
        assert!(summary.simulated);
        assert_eq!(summary.headline(), "3 records processed successfully!");
        assert_eq!(session.state(), UploadState::Completed);
        assert!(session.last_summary().is_some());
    }

    #[tokio::test]
    async fn test_non_csv_selection_keeps_previous_file() {
        let storage = MockStorage::new();
        storage.put("orders.csv", b"id\n1\n").await;
        storage.put("notes.txt", b"hello").await;
        let mut session = session(storage, ReadFailurePolicy::Error);

        session.select_file("orders.csv").await.unwrap();
        let err = session.select_file("notes.txt").await.unwrap_err();

        assert!(matches!(err, UploadError::UnsupportedFileType { .. }));
        assert_eq!(session.current_file().unwrap().name, "orders.csv");
        assert!(session.can_process());
    }

    #[tokio::test]
    async fn test_uppercase_extension_is_accepted() {
        let storage = MockStorage::new();
        storage.put("ORDERS.CSV", b"id\n1\n").await;
        let mut session = session(storage, ReadFailurePolicy::Error);

        assert!(session.select_file("ORDERS.CSV").await.is_ok());
    }

    #[tokio::test]
    async fn test_process_without_selection_fails() {
        let mut session = session(MockStorage::new(), ReadFailurePolicy::Error);
        let err = session.process().await.unwrap_err();
        assert!(matches!(err, UploadError::NoFileSelected));
        assert_eq!(session.state(), UploadState::Idle);
    }

    #[tokio::test]
    async fn test_unreadable_file_surfaces_error() {
        let storage = MockStorage::new();
        storage.put_unreadable("broken.csv", 2048).await;
        let mut session = session(storage, ReadFailurePolicy::Error);

        session.select_file("broken.csv").await.unwrap();
        let err = session.process().await.unwrap_err();

        assert!(matches!(err, UploadError::UnreadableFile { .. }));
        assert_eq!(session.state(), UploadState::Ready);
        assert!(session.last_summary().is_none());
    }

    #[tokio::test]
    async fn test_unreadable_file_with_simulate_policy() {
        let storage = MockStorage::new();
        storage.put_unreadable("broken.csv", 2048).await;
        let mut session = session(storage, ReadFailurePolicy::Simulate);

        session.select_file("broken.csv").await.unwrap();
        let summary = session.process().await.unwrap();

        assert_eq!(summary.record_count_source, RecordCountSource::Simulated);
        assert!((100..=199).contains(&summary.total_records));
        assert!(summary.error_records <= 4);
        assert!(summary.columns.is_empty());
    }

    #[tokio::test]
    async fn test_header_only_file_reports_zero() {
        let storage = MockStorage::new();
        storage.put("empty.csv", b"id,name\n").await;
        let mut session = session(storage, ReadFailurePolicy::Simulate);

        session.select_file("empty.csv").await.unwrap();
        let summary = session.process().await.unwrap();

        assert_eq!(summary.total_records, 0);
        assert_eq!(summary.valid_records, 0);
        assert_eq!(summary.error_records, 0);
        assert_eq!(summary.record_count_source, RecordCountSource::Counted);
    }

    #[tokio::test]
    async fn test_reset_returns_to_idle() {
        let storage = MockStorage::new();
        storage.put("orders.csv", b"id\n1\n2\n").await;
        let mut session = session(storage, ReadFailurePolicy::Error);

        session.select_file("orders.csv").await.unwrap();
        session.process().await.unwrap();
        session.reset();

        assert_eq!(session.state(), UploadState::Idle);
        assert!(session.current_file().is_none());
        assert!(session.last_summary().is_none());
        assert!(session.selection_label().is_none());
    }

    #[tokio::test]
    async fn test_processing_waits_for_configured_delay() {
        let storage = MockStorage::new();
        storage.put("orders.csv", b"id\n1\n").await;
        let mut config = settings(ReadFailurePolicy::Error);
        config.processing_delay_ms = 20;
        let stats = SimulatedStats::new(config.simulation.clone()).unwrap();
        let mut session = UploadSession::new(storage, stats, &config);

        session.select_file("orders.csv").await.unwrap();
        let started = std::time::Instant::now();
        session.process().await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(20));
    }
}
