/*!
 * Ecosystem Check - Main Entry Point
 *
 * Dry-run tool for ecosystem files:
 * - Loads and validates every application descriptor
 * - Resolves the spawn plan the supervisor would execute
 * - Reports failures as diagnostics, one line per resolved app otherwise
 */

use ecosystem_config::{init_tracing, load, LoadError, SpawnPlan};
use tracing::info;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize structured tracing
    init_tracing();

    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("ECOSYSTEM_CONFIG_PATH").ok())
        .unwrap_or_else(|| "ecosystem.json".to_string());

    info!(path = %path, "checking ecosystem file");

    let registry = load(&path).await?;

    for desc in registry.iter() {
        let plan = SpawnPlan::resolve(desc).map_err(|source| LoadError::Descriptor {
            app: desc.name.clone(),
            source,
        })?;

        info!(
            app = %plan.app,
            command = %plan.command.display(),
            workers = plan.worker_count(),
            mode = ?plan.exec_mode,
            "resolved"
        );
    }

    info!(apps = registry.len(), "ecosystem file ok");

    Ok(())
}
