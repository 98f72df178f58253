pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{
    sink::{ConsoleSink, FileSink},
    storage::LocalStorage,
};
pub use config::settings::UploadSettings;
pub use crate::core::{record_counter::count_records, simulated::SimulatedStats, upload::UploadSession};
pub use utils::error::{Result, UploadError};
