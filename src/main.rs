use clap::Parser;
use mobile_inventory::utils::logger;
use mobile_inventory::{CliConfig, MenuEngine, StdConsole};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting mobile-inventory CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let mut engine = MenuEngine::new(StdConsole::new());

    if let Err(e) = engine.run() {
        tracing::error!("Session aborted: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    tracing::info!("Session ended with {} mobiles in store", engine.store().len());
    Ok(())
}
