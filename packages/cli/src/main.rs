mod commands;

use docrepo_core::logging::init_logger;
use log::debug;

/**
 * Main CLI entry point
 */
#[cfg(not(tarpaulin_include))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger(log::LevelFilter::Info);
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    debug!("docrepo v{}", VERSION);

    commands::bootstrap().await?;

    Ok(())
}
