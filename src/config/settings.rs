use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_finite, validate_hex_color, validate_non_empty_string, validate_ordered, validate_path,
    validate_range, Validate,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_PROCESSING_DELAY_MS: u64 = 1500;
pub const MAX_PROCESSING_DELAY_MS: u64 = 60_000;
pub const MAX_ORDER_VOLUME: u64 = 1_000_000;

/// 讀檔失敗時的處理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ReadFailurePolicy {
    /// Surface an `UnreadableFile` error.
    #[default]
    Error,
    /// Substitute a simulated record count.
    Simulate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySpec {
    pub name: String,
    pub color: String,
}

impl CategorySpec {
    pub fn new(name: &str, color: &str) -> Self {
        Self {
            name: name.to_string(),
            color: color.to_string(),
        }
    }
}

pub fn default_categories() -> Vec<CategorySpec> {
    vec![
        CategorySpec::new("Electronics", "#6366f1"),
        CategorySpec::new("Groceries", "#8b5cf6"),
        CategorySpec::new("Clothing", "#ec4899"),
        CategorySpec::new("Food & Beverage", "#f59e0b"),
        CategorySpec::new("Home & Garden", "#10b981"),
        CategorySpec::new("Health & Beauty", "#3b82f6"),
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSettings {
    pub seed: Option<u64>,
    pub fallback_min: usize,
    pub fallback_max: usize,
    pub max_error_records: usize,
    pub processing_time_min: f64,
    pub processing_time_max: f64,
    pub volume_min: u64,
    pub volume_max: u64,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            seed: None,
            fallback_min: 100,
            fallback_max: 199,
            max_error_records: 4,
            processing_time_min: 1.0,
            processing_time_max: 4.0,
            volume_min: 10,
            volume_max: 59,
        }
    }
}

impl Validate for SimulationSettings {
    fn validate(&self) -> Result<()> {
        validate_ordered("simulation.fallback", self.fallback_min, self.fallback_max)?;
        validate_ordered("simulation.volume", self.volume_min, self.volume_max)?;
        validate_range("simulation.volume_max", self.volume_max, 0, MAX_ORDER_VOLUME)?;
        validate_finite("simulation.processing_time_min", self.processing_time_min)?;
        validate_finite("simulation.processing_time_max", self.processing_time_max)?;
        validate_ordered(
            "simulation.processing_time",
            self.processing_time_min,
            self.processing_time_max,
        )?;
        validate_range(
            "simulation.processing_time_min",
            self.processing_time_min,
            0.0,
            f64::MAX,
        )?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    pub format: OutputFormat,
    pub path: Option<String>,
}

/// 合併預設值、TOML 設定與命令列覆蓋後的最終設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadSettings {
    pub processing_delay_ms: u64,
    pub on_read_error: ReadFailurePolicy,
    pub simulation: SimulationSettings,
    pub categories: Vec<CategorySpec>,
    pub output: OutputSettings,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            processing_delay_ms: DEFAULT_PROCESSING_DELAY_MS,
            on_read_error: ReadFailurePolicy::default(),
            simulation: SimulationSettings::default(),
            categories: default_categories(),
            output: OutputSettings::default(),
        }
    }
}

impl ConfigProvider for UploadSettings {
    fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_delay_ms)
    }

    fn read_failure_policy(&self) -> ReadFailurePolicy {
        self.on_read_error
    }

    fn categories(&self) -> &[CategorySpec] {
        &self.categories
    }
}

impl Validate for UploadSettings {
    fn validate(&self) -> Result<()> {
        validate_range(
            "upload.processing_delay_ms",
            self.processing_delay_ms,
            0,
            MAX_PROCESSING_DELAY_MS,
        )?;
        self.simulation.validate()?;

        for (index, category) in self.categories.iter().enumerate() {
            validate_non_empty_string(&format!("chart.categories[{}].name", index), &category.name)?;
            validate_hex_color(&format!("chart.categories[{}].color", index), &category.color)?;
        }

        if let Some(path) = &self.output.path {
            validate_path("output.path", path)?;
        }

        Ok(())
    }
}
