//! Alchemy game client binary.
//!
//! # Examples
//!
//! ```bash
//! # Built-in content
//! cargo run -p alchemy-client
//!
//! # Content from a data directory, logs to a file
//! ALCHEMY_DATA_DIR=data ALCHEMY_LOG_DIR=logs cargo run -p alchemy-client
//! ```

use alchemy_client::{ClientConfig, Session, load_content, logging, shell};
use anyhow::Result;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 1. Load configuration from environment
    let config = ClientConfig::from_env();

    // 2. Setup logging
    let _guard = logging::setup_logging(config.log_dir.as_deref())?;

    tracing::info!("Starting Alchemy client");
    tracing::info!("Data directory: {:?}", config.data_dir);

    // 3. Load content
    let content = load_content(&config)?;
    let mut session = Session::new(content, &config.ui);

    // 4. Run the shell
    let stdin = std::io::stdin();
    shell::run(&mut session, stdin.lock(), std::io::stdout().lock())?;

    tracing::info!(
        unlocked = session.state().unlocked.len(),
        "Client shutdown complete"
    );
    Ok(())
}
