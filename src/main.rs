//! AssetDesk - Asset and Employee Tracking
//!
//! Boots a session from configuration and prints the dashboard snapshot.

use assetdesk::{config::AppConfig, logging, AppState};

const RECENT_ACTIVITY_LIMIT: usize = 10;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    let _guard = logging::init_tracing(&config.logging)?;

    tracing::info!("Starting AssetDesk v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::new(config);
    let snapshot = state.dashboard().snapshot(RECENT_ACTIVITY_LIMIT);

    tracing::info!(
        "Session ready: {} assets ({} assigned, {} available), {} employees",
        snapshot.stats.total_assets,
        snapshot.stats.assigned_assets,
        snapshot.stats.available_assets,
        snapshot.stats.active_employees
    );
    for alert in &snapshot.alerts {
        tracing::warn!("Maintenance alert for {} {}: {:?}", alert.asset_id, alert.asset_name, alert.reason);
    }

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
