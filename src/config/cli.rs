use crate::config::settings::{OutputFormat, ReadFailurePolicy, UploadSettings};
use crate::config::toml_config::TomlConfig;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "upload-summary")]
#[command(about = "Process a CSV upload and print a record summary")]
pub struct CliConfig {
    /// CSV file to process
    pub file: String,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Seed for the simulated statistics
    #[arg(long)]
    pub seed: Option<u64>,

    /// Override the simulated processing delay
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// What to do when the file cannot be read
    #[arg(long, value_enum)]
    pub on_read_error: Option<ReadFailurePolicy>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Also write the JSON summary to this path
    #[arg(short, long)]
    pub output: Option<String>,

    /// Emit log lines as JSON
    #[arg(long)]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 載入 TOML（若有指定）並套用命令列覆蓋設定
    pub fn resolve_settings(&self) -> Result<UploadSettings> {
        let mut settings = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.into_settings(),
            None => UploadSettings::default(),
        };
        self.apply_overrides(&mut settings);
        Ok(settings)
    }

    pub fn apply_overrides(&self, settings: &mut UploadSettings) {
        if let Some(seed) = self.seed {
            settings.simulation.seed = Some(seed);
        }
        if let Some(delay) = self.delay_ms {
            settings.processing_delay_ms = delay;
        }
        if let Some(policy) = self.on_read_error {
            settings.on_read_error = policy;
        }
        if let Some(format) = self.format {
            settings.output.format = format;
        }
        if let Some(path) = &self.output {
            settings.output.path = Some(path.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_defaults() {
        let cli = CliConfig::parse_from([
            "upload-summary",
            "orders.csv",
            "--seed",
            "7",
            "--delay-ms",
            "0",
            "--on-read-error",
            "simulate",
            "--format",
            "json",
        ]);

        let settings = cli.resolve_settings().unwrap();
        assert_eq!(cli.file, "orders.csv");
        assert_eq!(settings.simulation.seed, Some(7));
        assert_eq!(settings.processing_delay_ms, 0);
        assert_eq!(settings.on_read_error, ReadFailurePolicy::Simulate);
        assert_eq!(settings.output.format, OutputFormat::Json);
        assert_eq!(settings.output.path, None);
    }

    #[test]
    fn test_missing_config_file_fails() {
        let cli = CliConfig::parse_from([
            "upload-summary",
            "orders.csv",
            "--config",
            "/nonexistent/upload-summary.toml",
        ]);
        assert!(cli.resolve_settings().is_err());
    }
}
