pub mod chart;
pub mod csv_header;
pub mod record_counter;
pub mod report;
pub mod simulated;
pub mod upload;

pub use crate::domain::model::{FileContent, UploadSummary};
pub use crate::domain::ports::{ConfigProvider, StatsSource, Storage, SummarySink};
pub use crate::utils::error::Result;
