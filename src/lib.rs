/*!
 * Ecosystem Configuration Library
 * Typed application descriptors for the process supervisor
 */

pub mod config;
pub mod core;
pub mod descriptor;
pub mod plan;
pub mod telemetry;

// Re-exports
pub use config::{load, EcosystemDoc, Registry};
pub use crate::core::errors::{DescriptorError, LoadError};
pub use descriptor::{AppDescriptor, ExecMode, Interpreter};
pub use plan::{SpawnPlan, WorkerSpec, INSTANCE_ID_ENV};
pub use telemetry::init_tracing;
