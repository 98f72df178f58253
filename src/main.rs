use clap::Parser;
use upload_summary::domain::ports::SummarySink;
use upload_summary::utils::error::{ErrorSeverity, UploadError};
use upload_summary::utils::{logger, validation::Validate};
use upload_summary::{
    CliConfig, ConsoleSink, FileSink, LocalStorage, SimulatedStats, UploadSession,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting upload-summary");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config).await {
        tracing::error!(
            "❌ Upload failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run(config: &CliConfig) -> Result<(), UploadError> {
    let settings = config.resolve_settings()?;
    settings.validate()?;
    tracing::debug!("Resolved settings: {:?}", settings);

    let storage = LocalStorage::new(".".to_string());
    let stats = SimulatedStats::new(settings.simulation.clone())?;
    let mut session = UploadSession::new(storage.clone(), stats, &settings);

    session.select_file(&config.file).await?;
    if let Some(label) = session.selection_label() {
        tracing::info!("{}", label);
    }

    let summary = session.process().await?;
    tracing::info!("✅ {}", summary.headline());

    ConsoleSink::new(settings.output.format)
        .publish(summary)
        .await?;

    if let Some(path) = &settings.output.path {
        let location = FileSink::new(storage, path.clone()).publish(summary).await?;
        tracing::info!("📁 Summary saved to: {}", location);
    }

    Ok(())
}
