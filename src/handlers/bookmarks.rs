use std::sync::Arc;

use crate::bookmark::BookmarkItem;
use crate::handlers::Handler;
use crate::host::{CapabilityGate, FileRef, ItemStore};
use crate::input::{InputInfo, ParsedCommand};
use crate::matcher::QueryMatcher;
use crate::mode::{Mode, SuggestionType};
use crate::settings::Settings;
use crate::suggestion::{AnySuggestion, BookmarkSuggestion, ChooseAction, Modifiers};

/// Capability id the host registers the bookmarks feature under.
pub const BOOKMARKS_PLUGIN_ID: &str = "bookmarks";

/// A bookmark leaf together with the file it resolved to, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenedItem {
    pub item: BookmarkItem,
    pub file: Option<FileRef>,
}

/// Flatten a bookmarks tree into its leaves, depth-first.
///
/// Folders are dropped without descending. Groups are replaced by their
/// flattened children. File bookmarks are resolved against `store`.
pub fn flatten(root: Vec<BookmarkItem>, store: &dyn ItemStore) -> Vec<FlattenedItem> {
    let mut out = Vec::new();
    flatten_into(root, store, &mut out);
    out
}

fn flatten_into(items: Vec<BookmarkItem>, store: &dyn ItemStore, out: &mut Vec<FlattenedItem>) {
    for item in items {
        match item {
            BookmarkItem::Folder { .. } => {}
            BookmarkItem::Group { items, .. } => flatten_into(items, store, out),
            BookmarkItem::File { ref path, .. } => {
                let file = store.resolve_file_by_path(path);
                out.push(FlattenedItem { item, file });
            }
            BookmarkItem::Search { .. } => out.push(FlattenedItem { item, file: None }),
        }
    }
}

/// Keep the items whose display title matches `filter_text`.
///
/// A filter that is empty, or prepares to an empty query, passes every item
/// through without a match result. Order follows `items` in both cases.
pub fn rank(
    items: Vec<FlattenedItem>,
    filter_text: &str,
    matcher: &dyn QueryMatcher,
) -> Vec<BookmarkSuggestion> {
    if filter_text.is_empty() {
        return pass_through(items);
    }

    let query = matcher.prepare_query(filter_text);
    if query.normalized.is_empty() {
        return pass_through(items);
    }
    items
        .into_iter()
        .filter_map(|f| {
            let result = matcher.fuzzy_match(&query, &f.item.display_title())?;
            Some(make_suggestion(f, Some(result)))
        })
        .collect()
}

fn pass_through(items: Vec<FlattenedItem>) -> Vec<BookmarkSuggestion> {
    items.into_iter().map(|f| make_suggestion(f, None)).collect()
}

fn make_suggestion(
    flattened: FlattenedItem,
    match_result: Option<crate::matcher::SearchResult>,
) -> BookmarkSuggestion {
    BookmarkSuggestion {
        suggestion_type: SuggestionType::Bookmark,
        item: flattened.item,
        file: flattened.file,
        match_result,
    }
}

pub struct BookmarksHandler {
    settings: Arc<Settings>,
    store: Arc<dyn ItemStore>,
    capabilities: Arc<dyn CapabilityGate>,
    matcher: Arc<dyn QueryMatcher>,
}

impl BookmarksHandler {
    pub fn new(
        settings: Arc<Settings>,
        store: Arc<dyn ItemStore>,
        capabilities: Arc<dyn CapabilityGate>,
        matcher: Arc<dyn QueryMatcher>,
    ) -> Self {
        Self {
            settings,
            store,
            capabilities,
            matcher,
        }
    }

    pub fn is_group_item(item: &BookmarkItem) -> bool {
        matches!(item, BookmarkItem::Group { .. })
    }

    pub fn is_file_item(item: &BookmarkItem) -> bool {
        matches!(item, BookmarkItem::File { .. })
    }

    fn is_enabled(&self) -> bool {
        self.capabilities
            .enabled_capability(BOOKMARKS_PLUGIN_ID)
            .is_some()
    }

    /// Check the bookmarks gate and build the command for `filter_text`.
    pub fn validate(&self, filter_text: &str, index: usize) -> ParsedCommand {
        if !self.is_enabled() {
            tracing::debug!(index, "bookmarks capability unavailable; staying in standard mode");
            return ParsedCommand::standard();
        }
        tracing::debug!(index, filter = filter_text, "bookmarks mode validated");
        ParsedCommand::validated(Mode::BookmarksList, filter_text)
    }

    fn flattened(&self) -> Vec<FlattenedItem> {
        if !self.is_enabled() {
            return Vec::new();
        }
        let items = flatten(self.store.list_root_items(), self.store.as_ref());
        tracing::debug!(count = items.len(), "flattened bookmarks");
        items
    }

    /// Every bookmark leaf of the current tree, unfiltered.
    pub fn get_items(&self) -> Vec<BookmarkSuggestion> {
        self.flattened()
            .into_iter()
            .map(|f| make_suggestion(f, None))
            .collect()
    }
}

impl Handler for BookmarksHandler {
    type Suggestion = BookmarkSuggestion;

    fn mode(&self) -> Mode {
        Mode::BookmarksList
    }

    fn command_string(&self) -> &str {
        &self.settings.bookmarks_list_command
    }

    fn validate_command(
        &self,
        _input: &InputInfo,
        index: usize,
        filter_text: &str,
        _active_suggestion: Option<&AnySuggestion>,
        _active_file: Option<&FileRef>,
    ) -> ParsedCommand {
        self.validate(filter_text, index)
    }

    fn get_suggestions(&self, input: Option<&InputInfo>) -> Vec<BookmarkSuggestion> {
        let Some(input) = input else {
            return Vec::new();
        };
        rank(self.flattened(), input.filter_text(), self.matcher.as_ref())
    }

    fn on_choose_suggestion(
        &self,
        suggestion: &BookmarkSuggestion,
        modifiers: Modifiers,
    ) -> Option<ChooseAction> {
        match &suggestion.item {
            BookmarkItem::File { subpath, .. } => {
                let file = suggestion.file.as_ref()?;
                Some(ChooseAction::OpenFile {
                    path: file.path.clone(),
                    subpath: subpath.clone(),
                    new_pane: modifiers.mod_key,
                })
            }
            BookmarkItem::Search { query, .. } => Some(ChooseAction::ExecuteSearch {
                query: query.clone(),
            }),
            BookmarkItem::Folder { .. } | BookmarkItem::Group { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoFiles;

    impl ItemStore for NoFiles {
        fn list_root_items(&self) -> Vec<BookmarkItem> {
            Vec::new()
        }

        fn resolve_file_by_path(&self, _path: &str) -> Option<FileRef> {
            None
        }
    }

    #[test]
    fn empty_groups_and_folders_contribute_nothing() {
        let tree = vec![
            BookmarkItem::group(Some("empty"), vec![]),
            BookmarkItem::folder("dir"),
            BookmarkItem::group(None, vec![BookmarkItem::group(None, vec![])]),
        ];
        assert!(flatten(tree, &NoFiles).is_empty());
        assert!(flatten(Vec::new(), &NoFiles).is_empty());
    }

    #[test]
    fn deep_nesting_keeps_depth_first_order() {
        let mut tree = BookmarkItem::search("deepest", None);
        for depth in 0..50 {
            tree = BookmarkItem::group(
                None,
                vec![
                    BookmarkItem::search(format!("before {depth}"), None),
                    tree,
                ],
            );
        }
        let out = flatten(vec![tree], &NoFiles);
        assert_eq!(out.len(), 51);
        assert_eq!(out[0].item.display_title(), "before 49");
        assert_eq!(out[50].item.display_title(), "deepest");
    }
}
