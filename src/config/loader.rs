/*!
 * Ecosystem Loader
 * Read-once loading of the ecosystem file into an immutable registry
 */

use super::paths::safe_canonicalize;
use crate::core::errors::LoadError;
use crate::core::types::LoadResult;
use crate::descriptor::{validate, AppDescriptor};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// The ecosystem document as written on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct EcosystemDoc {
    /// One entry per managed application
    pub apps: Vec<AppDescriptor>,
}

/// Immutable, name-keyed collection of validated descriptors
///
/// Built once at supervisor startup; `Send + Sync` with no interior
/// mutability, so it can be shared across tasks without locks.
#[derive(Debug)]
pub struct Registry {
    apps: Vec<AppDescriptor>,
    index: AHashMap<String, usize>,
}

impl Registry {
    /// Look up a descriptor by application name
    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AppDescriptor> {
        self.index.get(name).map(|&i| &self.apps[i])
    }

    /// Iterate descriptors in file order
    pub fn iter(&self) -> impl Iterator<Item = &AppDescriptor> {
        self.apps.iter()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.apps.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }
}

/// Load and validate an ecosystem file
///
/// This is the only way descriptors enter the system: one read at
/// startup, full validation, then an immutable snapshot. There is no
/// reload path.
pub async fn load(path: impl AsRef<Path>) -> LoadResult<Registry> {
    let path = safe_canonicalize(path.as_ref());

    let bytes = tokio::fs::read(&path).await.map_err(|source| LoadError::Io {
        path: path.clone(),
        source,
    })?;

    let doc: EcosystemDoc =
        serde_json::from_slice(&bytes).map_err(|source| LoadError::Parse {
            path: path.clone(),
            source,
        })?;

    if doc.apps.is_empty() {
        return Err(LoadError::NoApps { path });
    }

    let mut index = AHashMap::with_capacity(doc.apps.len());
    for (i, app) in doc.apps.iter().enumerate() {
        validate(app).map_err(|source| LoadError::Descriptor {
            app: app.name.clone(),
            source,
        })?;

        if index.insert(app.name.clone(), i).is_some() {
            return Err(LoadError::DuplicateApp {
                name: app.name.clone(),
            });
        }

        debug!(app = %app.name, instances = app.instances, mode = ?app.exec_mode, "descriptor validated");
    }

    info!(path = %path.display(), apps = doc.apps.len(), "ecosystem loaded");

    Ok(Registry {
        apps: doc.apps,
        index,
    })
}
