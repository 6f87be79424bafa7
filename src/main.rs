use anyhow::Context;
use clap::Parser;
use tree_format::utils::logger;
use tree_format::{
    ClangFormat, CliConfig, DryRun, FormatEngine, FormatError, FormatOutcome, Formatter,
};

fn report_failure(e: &FormatError) {
    tracing::error!("❌ {} (Category: {:?})", e, e.category());
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e);
    eprintln!("💡 {}", e.recovery_suggestion());
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            report_failure(&e);
            std::process::exit(e.exit_code());
        }
    };

    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    for root in config.absolute_roots(&cwd) {
        tracing::info!("📁 Root: {}", root.display());
    }

    let formatter: Box<dyn Formatter> = if config.dry_run {
        tracing::info!("🔍 DRY RUN MODE - the formatter will not be invoked");
        Box::new(DryRun)
    } else {
        Box::new(ClangFormat::from_config(&config))
    };

    let mut engine = FormatEngine::new(formatter, &config);

    match engine.run().await {
        Ok(summary) if summary.has_failures() => {
            for outcome in summary.trees.iter().flat_map(|t| t.failures()) {
                if let FormatOutcome::Failed { path, reason } = outcome {
                    eprintln!("❌ {}: {}", path.display(), reason);
                }
            }
            eprintln!("{}", summary.headline());
            std::process::exit(1);
        }
        Ok(summary) => {
            tracing::info!("✅ {}", summary.headline());
        }
        Err(e) => {
            report_failure(&e);
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
