/*!
 * Telemetry Module
 * Structured tracing setup
 */

pub mod tracer;

// Re-export for convenience
pub use tracer::init_tracing;
