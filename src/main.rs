use anyhow::Context;
use clap::Parser;
use vector_gen::utils::{logger, validation::Validate};
use vector_gen::{CliConfig, GeneratorEngine, LocalStorage, VectorPipeline};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    let logging = if config.json_logs {
        logger::init_json_logger(config.verbose)
    } else {
        logger::init_cli_logger(config.verbose)
    };
    logging.context("failed to initialise logging")?;

    tracing::info!("Starting vector-gen");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        eprintln!("Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    let monitor_enabled = config.monitor;
    let pipeline = VectorPipeline::new(LocalStorage::current_dir(), config);
    let engine = GeneratorEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run() {
        Ok(report) => {
            println!("{}", report.confirmation());
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "Vector generation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("{}", e.user_friendly_message());
            eprintln!("Suggestion: {}", e.recovery_suggestion());

            std::process::exit(e.exit_code());
        }
    }
}
