//! Slot machine client binary.
//!
//! This binary is the composition root that assembles:
//! 1. Runtime (machine worker) via the bootstrap RuntimeBuilder
//! 2. Frontend (UI) - CLI, GUI, etc.
//!
//! # Examples
//!
//! ```bash
//! # Deterministic session with a fixed seed
//! SLOT_SEED=42 cargo run -p slot-client
//! ```

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, etc.)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use client_bootstrap::{ClientConfig, RuntimeBuilder};
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use slot_client::Client;

    // 1. Load configuration from environment
    let client_config = ClientConfig::from_env();
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging
    logging::setup_logging(client_config.session_id.as_deref())?;

    tracing::info!("Starting slot machine client");
    tracing::info!("Seed: {:?}", client_config.seed);

    // 3. Build Runtime (independent layer)
    let setup = RuntimeBuilder::new(client_config).build().await?;

    // 4. Build Frontend (independent layer)
    let frontend = CliFrontend::new(frontend_config, cli_config);

    // 5. Build and run
    let client = Client::builder()
        .runtime(setup.runtime)
        .frontend(frontend)
        .build()?;

    tracing::info!("Client assembled, starting...");
    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
