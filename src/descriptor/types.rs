/*!
 * Descriptor Types
 * The application descriptor and its wire format
 */

use crate::core::serde::{default_instances, is_default, is_empty_map, is_empty_string, is_one_u32};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// Process topology strategy
///
/// A hint consumed by the supervisor: `fork` runs independent copies,
/// `cluster` runs workers that share a listening port.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecMode {
    #[default]
    Fork,
    Cluster,
}

impl ExecMode {
    #[inline]
    #[must_use]
    pub const fn is_cluster(&self) -> bool {
        matches!(self, ExecMode::Cluster)
    }
}

/// How the supervisor wraps execution of the script
///
/// Wire format is a plain string: `"none"` runs the script directly,
/// anything else names the interpreter program to launch the script with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Interpreter {
    #[default]
    Direct,
    Program(String),
}

impl Interpreter {
    #[inline]
    #[must_use]
    pub const fn is_direct(&self) -> bool {
        matches!(self, Interpreter::Direct)
    }

    /// Interpreter program name, if execution is wrapped
    #[inline]
    #[must_use]
    pub fn program(&self) -> Option<&str> {
        match self {
            Interpreter::Direct => None,
            Interpreter::Program(p) => Some(p.as_str()),
        }
    }
}

impl Serialize for Interpreter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Interpreter::Direct => serializer.serialize_str("none"),
            Interpreter::Program(p) => serializer.serialize_str(p),
        }
    }
}

impl<'de> Deserialize<'de> for Interpreter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "none" => Interpreter::Direct,
            _ => Interpreter::Program(raw),
        })
    }
}

/// One managed application, as declared in the ecosystem file
///
/// Immutable once loaded: the supervisor reads descriptors at startup and
/// never mutates them afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AppDescriptor {
    /// Human-readable label, unique within one ecosystem file
    pub name: String,
    /// Executable entry point to launch
    pub script: String,
    /// Command-line arguments, shell-style string
    #[serde(default, skip_serializing_if = "is_empty_string")]
    pub args: String,
    #[serde(default, skip_serializing_if = "Interpreter::is_direct")]
    pub interpreter: Interpreter,
    /// Working directory for the spawned process; must be absolute
    pub cwd: String,
    /// Desired number of concurrent copies
    #[serde(default = "default_instances", skip_serializing_if = "is_one_u32")]
    pub instances: u32,
    #[serde(default, skip_serializing_if = "is_default")]
    pub exec_mode: ExecMode,
    /// Environment variables injected into the process
    #[serde(default, skip_serializing_if = "is_empty_map")]
    pub env: BTreeMap<String, String>,
}

impl AppDescriptor {
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, script: impl Into<String>, cwd: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            script: script.into(),
            args: String::new(),
            interpreter: Interpreter::Direct,
            cwd: cwd.into(),
            instances: 1,
            exec_mode: ExecMode::Fork,
            env: BTreeMap::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn with_args(mut self, args: impl Into<String>) -> Self {
        self.args = args.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_interpreter(mut self, program: impl Into<String>) -> Self {
        self.interpreter = Interpreter::Program(program.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn with_instances(mut self, instances: u32) -> Self {
        self.instances = instances;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_exec_mode(mut self, mode: ExecMode) -> Self {
        self.exec_mode = mode;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_env_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(name.into(), value.into());
        self
    }

    /// Check if the descriptor requests clustered workers
    #[inline]
    #[must_use]
    pub const fn is_clustered(&self) -> bool {
        self.exec_mode.is_cluster()
    }
}
