/*!
 * Error Types
 * Centralized error handling with thiserror and miette
 */

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading an ecosystem file
#[derive(Error, Debug, Diagnostic)]
pub enum LoadError {
    #[error("Failed to read ecosystem file {}", path.display())]
    #[diagnostic(
        code(ecosystem::io),
        help("Check that the file exists and is readable by the supervisor user.")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Ecosystem file {} is not valid JSON", path.display())]
    #[diagnostic(
        code(ecosystem::parse),
        help("The file must be a JSON document with an `apps` array.")
    )]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Ecosystem file {} declares no applications", path.display())]
    #[diagnostic(
        code(ecosystem::no_apps),
        help("The `apps` array must contain at least one application descriptor.")
    )]
    NoApps { path: PathBuf },

    #[error("Duplicate application name: {name}")]
    #[diagnostic(
        code(ecosystem::duplicate_app),
        help("Application names identify processes to the supervisor and must be unique per file.")
    )]
    DuplicateApp { name: String },

    #[error("Invalid descriptor for application {app}")]
    #[diagnostic(code(ecosystem::invalid_descriptor))]
    Descriptor {
        app: String,
        #[source]
        source: DescriptorError,
    },
}

/// Failures in a single application descriptor
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum DescriptorError {
    #[error("Field `{0}` cannot be empty")]
    #[diagnostic(
        code(descriptor::empty_field),
        help("`name`, `script`, and `cwd` are required and must be non-empty.")
    )]
    EmptyField(&'static str),

    #[error("`instances` must be at least 1")]
    #[diagnostic(
        code(descriptor::zero_instances),
        help("Request one or more copies; the supervisor cannot run zero workers.")
    )]
    ZeroInstances,

    #[error("Working directory is not absolute: {0}")]
    #[diagnostic(
        code(descriptor::relative_cwd),
        help("`cwd` anchors script resolution and must be an absolute path.")
    )]
    RelativeWorkingDir(String),

    #[error("Invalid environment variable name: {0:?}")]
    #[diagnostic(
        code(descriptor::invalid_env_name),
        help("Names must be non-empty and contain neither `=` nor NUL.")
    )]
    InvalidEnvName(String),

    #[error("Invalid value for environment variable {0}")]
    #[diagnostic(
        code(descriptor::invalid_env_value),
        help("Values cannot contain NUL bytes.")
    )]
    InvalidEnvValue(String),

    #[error("Field `{field}` contains shell metacharacters: {value}")]
    #[diagnostic(
        code(descriptor::shell_metacharacters),
        help("The supervisor execs the command directly and never invokes a shell.")
    )]
    ShellMetacharacters {
        field: &'static str,
        value: String,
    },

    #[error("Field `{field}` contains path traversal: {value}")]
    #[diagnostic(code(descriptor::path_traversal))]
    PathTraversal {
        field: &'static str,
        value: String,
    },

    #[error("`interpreter` cannot be an empty string")]
    #[diagnostic(
        code(descriptor::empty_interpreter),
        help("Use \"none\" to run the script directly, or name an interpreter program.")
    )]
    EmptyInterpreter,

    #[error("Unterminated quote in `args`: {0}")]
    #[diagnostic(
        code(descriptor::unterminated_quote),
        help("Close the quote or escape it with a backslash.")
    )]
    UnterminatedQuote(String),
}
