use std::path::{Component, Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::bookmark::BookmarkItem;
use crate::host::{FileRef, ItemStore};

#[derive(Debug, Default, Serialize, Deserialize)]
struct BookmarksFile {
    #[serde(default)]
    items: Vec<BookmarkItem>,
}

pub fn load_bookmarks(path: &Path) -> anyhow::Result<Vec<BookmarkItem>> {
    let content = std::fs::read_to_string(path).unwrap_or_default();
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    let file: BookmarksFile = serde_json::from_str(&content)
        .with_context(|| format!("invalid bookmarks file {}", path.display()))?;
    Ok(file.items)
}

pub fn save_bookmarks(path: &Path, items: &[BookmarkItem]) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&BookmarksFile {
        items: items.to_vec(),
    })?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, json)?;
    Ok(())
}

/// Item store backed by a bookmarks JSON file and a vault directory.
///
/// The file is re-read on every listing so edits made by the host between
/// keystrokes are visible immediately.
pub struct JsonItemStore {
    bookmarks_file: PathBuf,
    vault_root: PathBuf,
}

impl JsonItemStore {
    /// Open a store, failing if the bookmarks file exists but cannot be parsed.
    pub fn open(bookmarks_file: impl Into<PathBuf>, vault_root: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let store = Self {
            bookmarks_file: bookmarks_file.into(),
            vault_root: vault_root.into(),
        };
        load_bookmarks(&store.bookmarks_file)?;
        Ok(store)
    }

    pub fn bookmarks_file(&self) -> &Path {
        &self.bookmarks_file
    }
}

impl ItemStore for JsonItemStore {
    fn list_root_items(&self) -> Vec<BookmarkItem> {
        match load_bookmarks(&self.bookmarks_file) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!("failed to read bookmarks: {e:#}");
                Vec::new()
            }
        }
    }

    fn resolve_file_by_path(&self, path: &str) -> Option<FileRef> {
        if !is_vault_relative(path) {
            tracing::debug!(path, "bookmark path is not vault-relative");
            return None;
        }
        let full = self.vault_root.join(path);
        full.is_file().then(|| FileRef::from_path(path))
    }
}

/// True for a non-empty relative path that stays below the vault root.
fn is_vault_relative(path: &str) -> bool {
    let mut components = Path::new(path).components().peekable();
    components.peek().is_some()
        && components.all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
