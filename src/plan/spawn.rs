/*!
 * Spawn Plans
 * Resolution of a descriptor into concrete launch parameters
 */

use super::argv;
use crate::config::paths::resolve_script;
use crate::core::serde::{is_empty_map, is_empty_vec};
use crate::core::types::{DescriptorResult, ReplicaId};
use crate::descriptor::{AppDescriptor, ExecMode};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Environment variable carrying the worker's replica index
pub const INSTANCE_ID_ENV: &str = "ECOSYSTEM_INSTANCE_ID";

/// One worker copy of an application
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct WorkerSpec {
    pub replica: ReplicaId,
    /// Descriptor env plus the replica index at `ECOSYSTEM_INSTANCE_ID`
    #[serde(skip_serializing_if = "is_empty_map")]
    pub env: BTreeMap<String, String>,
}

impl WorkerSpec {
    #[must_use]
    fn new(replica: ReplicaId, base_env: &BTreeMap<String, String>) -> Self {
        let mut env = base_env.clone();
        env.insert(INSTANCE_ID_ENV.to_string(), replica.to_string());
        Self { replica, env }
    }
}

/// Fully-resolved launch parameters for one application
///
/// This is the exact data the supervisor runtime consumes: an absolute
/// command, a ready argument vector, the working directory, and one
/// worker entry per requested instance. `exec_mode` is carried through
/// as a topology hint; the supervisor owns what it means.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SpawnPlan {
    pub app: String,
    pub command: PathBuf,
    #[serde(skip_serializing_if = "is_empty_vec")]
    pub args: Vec<String>,
    pub working_dir: PathBuf,
    pub exec_mode: ExecMode,
    pub workers: Vec<WorkerSpec>,
}

impl SpawnPlan {
    /// Resolve a descriptor into launch parameters
    ///
    /// Relative scripts are anchored at `cwd`. When execution is wrapped,
    /// the interpreter becomes the command and the resolved script is
    /// prepended to the argument vector.
    pub fn resolve(desc: &AppDescriptor) -> DescriptorResult<Self> {
        let script = resolve_script(&desc.cwd, &desc.script);
        let tokens = argv::tokenize(&desc.args)?;

        let (command, args) = match desc.interpreter.program() {
            None => (script, tokens),
            Some(program) => {
                let mut args = Vec::with_capacity(tokens.len() + 1);
                args.push(script.to_string_lossy().into_owned());
                args.extend(tokens);
                (PathBuf::from(program), args)
            }
        };

        let workers = (0..desc.instances)
            .map(|replica| WorkerSpec::new(replica, &desc.env))
            .collect();

        Ok(Self {
            app: desc.name.clone(),
            command,
            args,
            working_dir: PathBuf::from(&desc.cwd),
            exec_mode: desc.exec_mode,
            workers,
        })
    }

    #[inline]
    #[must_use]
    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    #[inline]
    #[must_use]
    pub const fn is_clustered(&self) -> bool {
        self.exec_mode.is_cluster()
    }
}
