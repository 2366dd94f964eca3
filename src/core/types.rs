/*!
 * Core Types
 * Common types used across the configuration subsystem
 */

use crate::core::errors::{DescriptorError, LoadError};

/// Worker replica index within one application (0-based)
pub type ReplicaId = u32;

/// Result of loading or parsing an ecosystem file
pub type LoadResult<T> = Result<T, LoadError>;

/// Result of descriptor-level validation and resolution
///
/// # Must Use
/// A descriptor that fails validation must never reach the supervisor
pub type DescriptorResult<T> = Result<T, DescriptorError>;
