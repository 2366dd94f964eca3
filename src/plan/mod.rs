/*!
 * Plan Module
 * Argument tokenization and spawn-plan resolution
 */

pub mod argv;
pub mod spawn;

// Re-export for convenience
pub use spawn::{SpawnPlan, WorkerSpec, INSTANCE_ID_ENV};
