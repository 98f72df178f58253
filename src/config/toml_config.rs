use crate::config::settings::{
    CategorySpec, OutputFormat, ReadFailurePolicy, SimulationSettings, UploadSettings,
};
use crate::utils::error::{Result, UploadError};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub upload: Option<UploadSection>,
    pub simulation: Option<SimulationSection>,
    pub chart: Option<ChartSection>,
    pub output: Option<OutputSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadSection {
    pub processing_delay_ms: Option<u64>,
    pub on_read_error: Option<ReadFailurePolicy>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulationSection {
    pub seed: Option<u64>,
    pub fallback_min: Option<usize>,
    pub fallback_max: Option<usize>,
    pub max_error_records: Option<usize>,
    pub processing_time_min: Option<f64>,
    pub processing_time_max: Option<f64>,
    pub volume_min: Option<u64>,
    pub volume_max: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChartSection {
    pub categories: Option<Vec<CategorySpec>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSection {
    pub format: Option<OutputFormat>,
    pub path: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(UploadError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${SUMMARY_PATH})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| UploadError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 以預設值為基礎套用檔案中的設定
    pub fn into_settings(self) -> UploadSettings {
        let mut settings = UploadSettings::default();

        if let Some(upload) = self.upload {
            if let Some(delay) = upload.processing_delay_ms {
                settings.processing_delay_ms = delay;
            }
            if let Some(policy) = upload.on_read_error {
                settings.on_read_error = policy;
            }
        }

        if let Some(simulation) = self.simulation {
            settings.simulation = merge_simulation(settings.simulation, simulation);
        }

        if let Some(categories) = self.chart.and_then(|c| c.categories) {
            settings.categories = categories;
        }

        if let Some(output) = self.output {
            if let Some(format) = output.format {
                settings.output.format = format;
            }
            settings.output.path = output.path;
        }

        settings
    }
}

fn merge_simulation(base: SimulationSettings, section: SimulationSection) -> SimulationSettings {
    SimulationSettings {
        seed: section.seed.or(base.seed),
        fallback_min: section.fallback_min.unwrap_or(base.fallback_min),
        fallback_max: section.fallback_max.unwrap_or(base.fallback_max),
        max_error_records: section.max_error_records.unwrap_or(base.max_error_records),
        processing_time_min: section.processing_time_min.unwrap_or(base.processing_time_min),
        processing_time_max: section.processing_time_max.unwrap_or(base.processing_time_max),
        volume_min: section.volume_min.unwrap_or(base.volume_min),
        volume_max: section.volume_max.unwrap_or(base.volume_max),
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.clone().into_settings().validate()
    }
}
