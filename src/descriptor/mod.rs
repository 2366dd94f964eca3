/*!
 * Descriptor Module
 * Application descriptor model and validation
 */

pub mod types;
pub mod validation;

// Re-export for convenience
pub use types::{AppDescriptor, ExecMode, Interpreter};
pub use validation::validate;
