//! Quick-action demo - main entry point.
//!
//! Usage: `quickaction-demo [patient|provider]`

use quickaction_core::EngineConfig;
use quickaction_demo::{run_dashboard, Dashboard, DashboardKind};

// =============================================================================
// Configuration
// =============================================================================

/// Load the engine config, falling back to defaults on any error.
fn load_config() -> EngineConfig {
    match EngineConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Config unavailable ({}) - using defaults", e);
            EngineConfig::default()
        }
    }
}

// =============================================================================
// Entry Point
// =============================================================================

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Quick-action demo starting...");

    let kind = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<DashboardKind>() {
            Ok(kind) => kind,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(2);
            }
        },
        None => DashboardKind::default(),
    };

    let dashboard = match Dashboard::load(kind) {
        Ok(dashboard) => dashboard,
        Err(e) => {
            tracing::error!("Failed to load dashboard: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let config = load_config();

    // The engine only needs timers; one thread is enough.
    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: failed to create tokio runtime: {}", e);
            std::process::exit(1);
        }
    };

    match rt.block_on(run_dashboard(&dashboard, &config)) {
        Ok(reports) => {
            for report in reports {
                tracing::info!("{}: {:?}", report.label, report.outcome());
            }
        }
        Err(e) => {
            tracing::error!("Demo failed: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
