/*!
 * Path Resolution
 * Lexical script resolution and canonicalization helpers
 */

use path_clean::PathClean;
use std::path::{Path, PathBuf};

/// Resolve a script path against the descriptor working directory
///
/// Absolute scripts pass through; relative scripts are joined to `cwd`.
/// Resolution is purely lexical (`.` and `..` segments are cleaned, the
/// filesystem is never consulted) because descriptor paths refer to the
/// host the supervisor runs on, not necessarily this machine.
#[must_use]
pub fn resolve_script(cwd: &str, script: &str) -> PathBuf {
    let script_path = Path::new(script);
    if script_path.is_absolute() {
        script_path.to_path_buf().clean()
    } else {
        Path::new(cwd).join(script_path).clean()
    }
}

/// Safely canonicalize a path with fallback for non-existent paths
/// Uses parent canonicalization if the path doesn't exist
#[must_use]
pub fn safe_canonicalize(path: &Path) -> PathBuf {
    // Try to canonicalize the path directly if it exists
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }

    // For non-existent paths, canonicalize parent and append filename
    if let Some(parent) = path.parent() {
        if let (Ok(canonical_parent), Some(file_name)) = (parent.canonicalize(), path.file_name()) {
            return canonical_parent.join(file_name);
        }
    }

    // Last resort: return as-is (this is the weakest guarantee)
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_script_passes_through() {
        assert_eq!(
            resolve_script("/srv/app", "/usr/local/bin/serve"),
            PathBuf::from("/usr/local/bin/serve")
        );
    }

    #[test]
    fn test_relative_script_joins_cwd() {
        assert_eq!(
            resolve_script("/srv/app", "bin/serve"),
            PathBuf::from("/srv/app/bin/serve")
        );
        assert_eq!(
            resolve_script("/srv/app", "./bin/serve"),
            PathBuf::from("/srv/app/bin/serve")
        );
    }

    #[test]
    fn test_dot_segments_cleaned() {
        assert_eq!(
            resolve_script("/srv/app", "bin/../run"),
            PathBuf::from("/srv/app/run")
        );
        assert_eq!(
            resolve_script("/srv/app/sub", "/opt/./tool/../bin/x"),
            PathBuf::from("/opt/bin/x")
        );
    }
}
