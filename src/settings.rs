use serde::{Deserialize, Serialize};

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// Trigger that switches the input into bookmarks mode.
    ///
    /// Older settings files stored this under `starred_list_command`.
    #[serde(default = "default_bookmarks_list_command", alias = "starred_list_command")]
    pub bookmarks_list_command: String,
    /// When enabled the application initialises the logger at debug level.
    /// Defaults to `false` when the field is missing in the settings file.
    #[serde(default)]
    pub debug_logging: bool,
    /// Upper bound on the number of suggestions returned per request.
    /// `0` disables the limit.
    #[serde(default)]
    pub max_suggestions: usize,
    /// Root directory used to resolve bookmarked file paths.
    #[serde(default)]
    pub vault_path: Option<String>,
    /// Location of the bookmarks file. Relative paths are resolved against
    /// `vault_path` when set.
    #[serde(default = "default_bookmarks_file")]
    pub bookmarks_file: String,
}

fn default_bookmarks_list_command() -> String {
    "'".into()
}

fn default_bookmarks_file() -> String {
    ".obsidian/bookmarks.json".into()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bookmarks_list_command: default_bookmarks_list_command(),
            debug_logging: false,
            max_suggestions: 0,
            vault_path: None,
            bookmarks_file: default_bookmarks_file(),
        }
    }
}

impl Settings {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Full path of the bookmarks file, joined onto the vault root when the
    /// configured path is relative.
    pub fn bookmarks_path(&self) -> std::path::PathBuf {
        let file = std::path::Path::new(&self.bookmarks_file);
        match &self.vault_path {
            Some(vault) if file.is_relative() => std::path::Path::new(vault).join(file),
            _ => file.to_path_buf(),
        }
    }
}
