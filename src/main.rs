//! MARGDARSHAK — Career Guidance Service Facade
//!
//! Entry point. Loads configuration, initialises structured logging,
//! spawns the stub API server when enabled, and runs a one-shot facade
//! self-check before idling until shutdown.

use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

use margdarshak::config;
use margdarshak::server;
use margdarshak::service::mock::MockService;
use margdarshak::service::{self, CareerService};

const BANNER: &str = r#"
 __  __    _    ____   ____ ____    _    ____  ____  _   _    _    _  __
|  \/  |  / \  |  _ \ / ___|  _ \  / \  |  _ \/ ___|| | | |  / \  | |/ /
| |\/| | / _ \ | |_) | |  _| | | |/ _ \ | |_) \___ \| |_| | / _ \ | ' /
| |  | |/ ___ \|  _ <| |_| | |_| / ___ \|  _ < ___) |  _  |/ ___ \| . \
|_|  |_/_/   \_\_| \_\\____|____/_/   \_\_| \_\____/|_| |_/_/   \_\_|\_\

  Career Guidance Service Facade
  v0.1.0 — Mock API Layer
"#;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (non-fatal if missing)
    let _ = dotenv::dotenv();

    // Load configuration from TOML
    let cfg = config::AppConfig::load("config.toml")?;

    // Initialise structured logging
    init_logging();

    // Print startup banner
    println!("{BANNER}");
    info!(
        service_name = %cfg.service.name,
        mode = %cfg.service.mode,
        server_enabled = cfg.server.enabled,
        "MARGDARSHAK starting up"
    );

    // -- Stub API server -------------------------------------------------

    // The stub always serves canned data; with mode = "remote" the facade
    // round-trips through it over HTTP.
    if cfg.server.enabled {
        let state: server::routes::ApiState = Arc::new(MockService::from_config(&cfg));
        server::spawn(state, cfg.server.port)?;
    }

    // -- Facade self-check -----------------------------------------------

    let facade = service::service_from_config(&cfg)?;
    self_check(&*facade).await;

    // -- Idle until shutdown ----------------------------------------------

    if cfg.server.enabled {
        info!("Serving. Press Ctrl+C to stop.");
        tokio::signal::ctrl_c().await?;
        info!("Shutdown signal received.");
    } else {
        warn!("[server] disabled — self-check complete, nothing left to run");
    }

    info!("MARGDARSHAK shut down cleanly.");
    Ok(())
}

/// Exercise a few read-only facade operations and log the results.
/// Failures are logged, not fatal — a remote-mode facade may race the
/// stub server binding its port.
async fn self_check(facade: &dyn CareerService) {
    info!(backend = facade.name(), live = facade.is_live(), "Running facade self-check");

    match facade.market_insights().await {
        Ok(resp) => info!(
            trends = resp.data.trends.len(),
            jobs = resp.data.jobs.len(),
            industries = resp.data.industries.len(),
            "Market insights reachable"
        ),
        Err(e) => warn!(error = %e, "Market insights self-check failed"),
    }

    match facade.user_progress(None).await {
        Ok(resp) => info!(
            user_id = %resp.data.user_id,
            courses = resp.data.courses.len(),
            "User progress reachable"
        ),
        Err(e) => warn!(error = %e, "User progress self-check failed"),
    }
}

/// Initialise the `tracing` subscriber.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("margdarshak=info"));

    let json_logging = std::env::var("MARGDARSHAK_LOG_JSON").is_ok();

    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .init();
    } else {
        fmt().with_env_filter(env_filter).with_target(true).init();
    }
}
