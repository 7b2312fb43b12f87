use clap::Parser;
use naming_lint::utils::{logger, validation::Validate};
use naming_lint::{CliConfig, LintEngine, LintError, LintPipeline, LintSettings, LocalSource};
use std::io::Write;

fn exit_with(e: &LintError) -> ! {
    tracing::error!(
        "❌ naming-lint failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting naming-lint on {}", cli.path.display());
    tracing::debug!("CLI config: {:?}", cli);

    let file_config = match cli.load_file_config() {
        Ok(file_config) => file_config,
        Err(e) => exit_with(&e),
    };

    if let Some(file_config) = &file_config {
        if let Err(e) = file_config.validate() {
            exit_with(&e);
        }
    }

    let settings = LintSettings::from_cli(&cli, file_config.as_ref());
    if let Err(e) = settings.validate() {
        exit_with(&e);
    }
    tracing::debug!("Effective settings: {:?}", settings);

    let pipeline = match LintPipeline::new(LocalSource::new(), settings) {
        Ok(pipeline) => pipeline,
        Err(e) => exit_with(&e),
    };
    let engine = LintEngine::new(pipeline);

    if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - files are listed, not checked");
        let files = match engine.pipeline().planned_files().await {
            Ok(files) => files,
            Err(e) => exit_with(&e),
        };

        let mut stdout = std::io::stdout().lock();
        for file in &files {
            if let Err(e) = writeln!(stdout, "{}", file.display()) {
                exit_with(&LintError::from(e));
            }
        }
        tracing::info!("{} files would be checked", files.len());
        return Ok(());
    }

    match engine.run().await {
        Ok(report) => {
            if report.files_scanned == 0 {
                tracing::warn!("No source files matched under {}", cli.path.display());
            }
            std::process::exit(report.exit_code());
        }
        Err(e) => exit_with(&e),
    }
}
