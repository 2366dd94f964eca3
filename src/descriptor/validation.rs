/*!
 * Descriptor Validation
 * Structural and security checks on application descriptors
 */

use super::types::{AppDescriptor, Interpreter};
use crate::core::errors::DescriptorError;
use crate::core::types::DescriptorResult;
use crate::plan::argv;
use std::path::Path;

/// Validate every invariant the supervisor relies on
///
/// A descriptor that passes is guaranteed to resolve into a spawn plan.
pub fn validate(desc: &AppDescriptor) -> DescriptorResult<()> {
    require_non_empty("name", &desc.name)?;
    require_non_empty("script", &desc.script)?;
    require_non_empty("cwd", &desc.cwd)?;

    if desc.instances == 0 {
        return Err(DescriptorError::ZeroInstances);
    }

    if !Path::new(&desc.cwd).is_absolute() {
        return Err(DescriptorError::RelativeWorkingDir(desc.cwd.clone()));
    }

    validate_command("script", &desc.script)?;

    match &desc.interpreter {
        Interpreter::Direct => {}
        Interpreter::Program(p) if p.is_empty() => return Err(DescriptorError::EmptyInterpreter),
        Interpreter::Program(p) => validate_command("interpreter", p)?,
    }

    // Tokenization doubles as the syntax check for `args`
    for token in argv::tokenize(&desc.args)? {
        validate_argument(&token)?;
    }

    for (name, value) in &desc.env {
        validate_env_var(name, value)?;
    }

    Ok(())
}

fn require_non_empty(field: &'static str, value: &str) -> DescriptorResult<()> {
    if value.is_empty() {
        return Err(DescriptorError::EmptyField(field));
    }
    Ok(())
}

/// Validate a command path or program name for security issues
///
/// The supervisor execs directly and never invokes a shell, so shell
/// metacharacters in a command are always smuggling attempts.
fn validate_command(field: &'static str, command: &str) -> DescriptorResult<()> {
    let dangerous_chars = [';', '|', '&', '\n', '\r', '\0', '`', '$', '(', ')'];
    if dangerous_chars.iter().any(|&c| command.contains(c)) {
        return Err(DescriptorError::ShellMetacharacters {
            field,
            value: command.to_string(),
        });
    }

    if contains_path_traversal(command) {
        return Err(DescriptorError::PathTraversal {
            field,
            value: command.to_string(),
        });
    }

    Ok(())
}

/// Validate one tokenized argument
fn validate_argument(arg: &str) -> DescriptorResult<()> {
    let dangerous_chars = [';', '|', '&', '\n', '\r', '\0', '`'];
    if dangerous_chars.iter().any(|&c| arg.contains(c)) {
        return Err(DescriptorError::ShellMetacharacters {
            field: "args",
            value: arg.to_string(),
        });
    }

    if contains_path_traversal(arg) {
        return Err(DescriptorError::PathTraversal {
            field: "args",
            value: arg.to_string(),
        });
    }

    Ok(())
}

fn validate_env_var(name: &str, value: &str) -> DescriptorResult<()> {
    if name.is_empty() || name.contains('=') || name.contains('\0') {
        return Err(DescriptorError::InvalidEnvName(name.to_string()));
    }
    if value.contains('\0') {
        return Err(DescriptorError::InvalidEnvValue(name.to_string()));
    }
    Ok(())
}

/// Detect path components that escape upward past the starting directory
fn contains_path_traversal(path: &str) -> bool {
    let mut depth = 0i32;

    for part in path.split('/') {
        match part {
            ".." => {
                depth -= 1;
                if depth < 0 {
                    return true;
                }
            }
            "." | "" => {}
            _ => depth += 1,
        }
    }

    false
}
