use serde::{Deserialize, Serialize};

/// Operating state of the switcher. Decides which handler owns the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum Mode {
    #[default]
    Standard,
    EditorList,
    SymbolList,
    WorkspaceList,
    HeadingsList,
    BookmarksList,
    CommandList,
    RelatedItemsList,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Mode::Standard => "standard",
            Mode::EditorList => "editor list",
            Mode::SymbolList => "symbol list",
            Mode::WorkspaceList => "workspace list",
            Mode::HeadingsList => "headings list",
            Mode::BookmarksList => "bookmarks list",
            Mode::CommandList => "command list",
            Mode::RelatedItemsList => "related items list",
        };
        f.write_str(name)
    }
}

/// Tag identifying which mode produced a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SuggestionType {
    EditorList,
    SymbolList,
    WorkspaceList,
    HeadingsList,
    Bookmark,
    CommandList,
    RelatedItemsList,
    File,
    Alias,
    Unresolved,
}

/// Which part of a suggestion's text a match was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum MatchType {
    #[default]
    None,
    Primary,
    Basename,
    Path,
}
