use serde::{Deserialize, Serialize};

use crate::bookmark::BookmarkItem;
use crate::host::FileRef;
use crate::matcher::SearchResult;
use crate::mode::{MatchType, SuggestionType};

/// A bookmark offered to the presentation layer.
///
/// `file` is always serialised, as `null` when the bookmark does not point at
/// an existing file, so consumers can key off it without re-resolving paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkSuggestion {
    #[serde(rename = "type")]
    pub suggestion_type: SuggestionType,
    pub item: BookmarkItem,
    pub file: Option<FileRef>,
    #[serde(rename = "match", default, skip_serializing_if = "Option::is_none")]
    pub match_result: Option<SearchResult>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSuggestion {
    #[serde(rename = "type")]
    pub suggestion_type: SuggestionType,
    pub file: FileRef,
    #[serde(rename = "match", default)]
    pub match_result: Option<SearchResult>,
    #[serde(default)]
    pub match_type: MatchType,
    #[serde(default)]
    pub match_text: Option<String>,
    #[serde(default)]
    pub is_open_in_editor: bool,
    #[serde(default)]
    pub is_recent: bool,
    #[serde(default)]
    pub is_bookmarked: bool,
}

impl FileSuggestion {
    pub fn new(file: FileRef, match_result: Option<SearchResult>) -> Self {
        Self {
            suggestion_type: SuggestionType::File,
            file,
            match_result,
            match_type: MatchType::None,
            match_text: None,
            is_open_in_editor: false,
            is_recent: false,
            is_bookmarked: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasSuggestion {
    #[serde(rename = "type")]
    pub suggestion_type: SuggestionType,
    pub alias: String,
    pub file: FileRef,
    #[serde(rename = "match", default)]
    pub match_result: Option<SearchResult>,
    #[serde(default)]
    pub match_type: MatchType,
    #[serde(default)]
    pub match_text: Option<String>,
    #[serde(default)]
    pub is_open_in_editor: bool,
    #[serde(default)]
    pub is_recent: bool,
    #[serde(default)]
    pub is_bookmarked: bool,
}

impl AliasSuggestion {
    pub fn new(alias: impl Into<String>, file: FileRef, match_result: Option<SearchResult>) -> Self {
        Self {
            suggestion_type: SuggestionType::Alias,
            alias: alias.into(),
            file,
            match_result,
            match_type: MatchType::None,
            match_text: None,
            is_open_in_editor: false,
            is_recent: false,
            is_bookmarked: false,
        }
    }
}

/// A link target that does not exist in the vault yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnresolvedSuggestion {
    #[serde(rename = "type")]
    pub suggestion_type: SuggestionType,
    pub linktext: String,
    #[serde(rename = "match", default)]
    pub match_result: Option<SearchResult>,
}

/// Untagged on the wire. `Alias` must precede `File`: alias JSON also
/// satisfies `FileSuggestion`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnySuggestion {
    Bookmark(BookmarkSuggestion),
    Alias(AliasSuggestion),
    File(FileSuggestion),
    Unresolved(UnresolvedSuggestion),
}

impl AnySuggestion {
    pub fn suggestion_type(&self) -> SuggestionType {
        match self {
            AnySuggestion::Bookmark(s) => s.suggestion_type,
            AnySuggestion::Alias(s) => s.suggestion_type,
            AnySuggestion::File(s) => s.suggestion_type,
            AnySuggestion::Unresolved(s) => s.suggestion_type,
        }
    }

    pub fn file(&self) -> Option<&FileRef> {
        match self {
            AnySuggestion::Bookmark(s) => s.file.as_ref(),
            AnySuggestion::Alias(s) => Some(&s.file),
            AnySuggestion::File(s) => Some(&s.file),
            AnySuggestion::Unresolved(_) => None,
        }
    }
}

impl From<BookmarkSuggestion> for AnySuggestion {
    fn from(value: BookmarkSuggestion) -> Self {
        AnySuggestion::Bookmark(value)
    }
}

impl From<FileSuggestion> for AnySuggestion {
    fn from(value: FileSuggestion) -> Self {
        AnySuggestion::File(value)
    }
}

impl From<AliasSuggestion> for AnySuggestion {
    fn from(value: AliasSuggestion) -> Self {
        AnySuggestion::Alias(value)
    }
}

impl From<UnresolvedSuggestion> for AnySuggestion {
    fn from(value: UnresolvedSuggestion) -> Self {
        AnySuggestion::Unresolved(value)
    }
}

/// Standard-mode suggestions the extended standard handler decorates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemSuggestion {
    File(FileSuggestion),
    Alias(AliasSuggestion),
}

impl From<SystemSuggestion> for AnySuggestion {
    fn from(value: SystemSuggestion) -> Self {
        match value {
            SystemSuggestion::File(s) => AnySuggestion::File(s),
            SystemSuggestion::Alias(s) => AnySuggestion::Alias(s),
        }
    }
}

/// Keyboard state at the time a suggestion is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Ctrl on Windows/Linux, Cmd on macOS.
    pub mod_key: bool,
}

/// What the host should do when a suggestion is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ChooseAction {
    OpenFile {
        path: String,
        subpath: Option<String>,
        new_pane: bool,
    },
    ExecuteSearch {
        query: String,
    },
}
