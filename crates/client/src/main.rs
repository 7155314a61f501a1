//! Simon game client binary.
//!
//! This binary is the composition root that assembles:
//! 1. Runtime (game rules and flash timers) via `Runtime::builder()`
//! 2. Frontend (UI) - CLI, GUI, etc.
//!
//! Both are built independently and injected into the Client container.
//!
//! # Examples
//!
//! ```bash
//! # Replayable game with a slower replay
//! SIMON_SEED=42 SIMON_FLASH_BASE_MS=1500 cargo run -p simon-client
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
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use simon_client::Client;
    use simon_runtime::{Runtime, RuntimeConfig};

    // 1. Load configuration from environment
    let runtime_config = RuntimeConfig::from_env();
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging
    let log_file = logging::setup_logging(cli_config.session_id.as_deref())?;

    tracing::info!("Starting Simon client");
    tracing::info!("Seed policy: {:?}", runtime_config.seed);
    tracing::debug!("Log file: {}", log_file.display());

    // 3. Build Runtime (independent layer)
    let runtime = Runtime::builder().config(runtime_config).build().await?;
    tracing::info!("Runtime built successfully");

    // 4. Build Frontend (independent layer)
    let frontend = CliFrontend::new(frontend_config, cli_config);

    // 5. Build and run
    let client = Client::builder()
        .runtime(runtime)
        .frontend(frontend)
        .build()?;

    tracing::info!("Client assembled, starting...");
    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
