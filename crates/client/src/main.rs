//! Arena client binary.
//!
//! Composition root: reads configuration from the environment, sets up logging,
//! loads content from the data directory and hands stdin/stdout to the client.
//!
//! # Examples
//!
//! ```bash
//! # Replay the same battle every time
//! ARENA_SEED=7 cargo run -p arena-client
//!
//! # Custom content and a log file
//! ARENA_DATA_DIR=./my-data ARENA_LOG_DIR=./logs cargo run -p arena-client
//! ```

use std::io;

use anyhow::{Context, Result};
use arena_client::{Client, ClientConfig, Console, logging};
use arena_content::ContentFactory;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 1. Load configuration from environment
    let config = ClientConfig::from_env();

    // 2. Setup logging (guard flushes the log file on drop)
    let _guard = logging::setup_logging(&config)?;

    let seed = config.seed_or_clock();
    tracing::info!("Starting arena client");
    tracing::info!("Data directory: {}", config.data_dir.display());
    tracing::info!("Seed: {}", seed);

    // 3. Load content
    let factory = ContentFactory::new(&config.data_dir);
    let catalog = factory
        .load_equipment()
        .context("failed to load equipment catalog")?;
    let classes = factory
        .load_classes()
        .context("failed to load unit classes")?;
    let arena_config = factory
        .load_config()
        .context("failed to load arena configuration")?;

    // 4. Build and run
    let mut client = Client::builder()
        .catalog(catalog)
        .classes(classes)
        .config(arena_config)
        .seed(seed)
        .build()?;

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    client.run(&mut console)?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
