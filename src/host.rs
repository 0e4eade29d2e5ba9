//! Interfaces to the host application the switcher is embedded in.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::bookmark::BookmarkItem;

/// Host handle for a file that exists in the vault.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileRef {
    pub path: String,
    pub basename: String,
    pub extension: String,
}

impl FileRef {
    pub fn from_path(path: &str) -> Self {
        let name = path.rsplit('/').next().unwrap_or(path);
        let (basename, extension) = match name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => (stem, ext),
            _ => (name, ""),
        };
        Self {
            path: path.to_string(),
            basename: basename.to_string(),
            extension: extension.to_string(),
        }
    }
}

/// Source of bookmark items and of file identities.
pub trait ItemStore: Send + Sync {
    fn list_root_items(&self) -> Vec<BookmarkItem>;
    fn resolve_file_by_path(&self, path: &str) -> Option<FileRef>;
}

/// An enabled host capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capability {
    pub id: String,
}

/// Runtime lookup of host capabilities by well-known id.
pub trait CapabilityGate: Send + Sync {
    fn enabled_capability(&self, id: &str) -> Option<Capability>;
}

/// A fixed set of enabled capability ids.
#[derive(Debug, Default, Clone)]
pub struct StaticCapabilities {
    enabled: HashSet<String>,
}

impl StaticCapabilities {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            enabled: ids.into_iter().map(Into::into).collect(),
        }
    }
}

impl CapabilityGate for StaticCapabilities {
    fn enabled_capability(&self, id: &str) -> Option<Capability> {
        self.enabled.contains(id).then(|| Capability { id: id.to_string() })
    }
}

/// Paths the workspace currently has open, recently opened, or bookmarked.
#[derive(Debug, Default, Clone)]
pub struct WorkspaceEnvList {
    pub open_workspace_files: HashSet<String>,
    pub recent_files: HashSet<String>,
    pub bookmarked_files: HashSet<String>,
}
