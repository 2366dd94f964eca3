/*!
 * Config Module
 * Ecosystem file loading, path resolution, and the descriptor registry
 */

pub mod loader;
pub mod paths;

// Re-export for convenience
pub use loader::{load, EcosystemDoc, Registry};
