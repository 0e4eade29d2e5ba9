
use mock_host::{ExactMatcher, MockGate, MockStore};
use quick_switcher::bookmark::BookmarkItem;
use quick_switcher::handlers::bookmarks::{flatten, rank, FlattenedItem};
use quick_switcher::handlers::{BookmarksHandler, Handler, BOOKMARKS_PLUGIN_ID};
use quick_switcher::host::FileRef;
use quick_switcher::input::{InputInfo, ParsedCommand};
use quick_switcher::matcher::SkimQueryMatcher;
use quick_switcher::mode::{Mode, SuggestionType};
use quick_switcher::settings::Settings;
use quick_switcher::suggestion::{ChooseAction, Modifiers};
use std::sync::atomic::Ordering;
use std::sync::Arc;

const TRIGGER: &str = "'";
const BOOKMARKED_FILE_TITLE: &str = "file 1";

fn default_tree() -> Vec<BookmarkItem> {
    vec![
        BookmarkItem::folder("folder"),
        BookmarkItem::file("p1", Some(BOOKMARKED_FILE_TITLE)),
        BookmarkItem::group(Some("group"), vec![BookmarkItem::file("p2", Some("x"))]),
    ]
}

struct Fixture {
    store: Arc<MockStore>,
    gate: Arc<MockGate>,
    matcher: Arc<ExactMatcher>,
    sut: BookmarksHandler,
}

fn fixture() -> Fixture {
    let store = Arc::new(MockStore::new(default_tree(), &["p1", "p2"]));
    let gate = Arc::new(MockGate::new(true));
    let matcher = Arc::new(ExactMatcher::default());
    let settings = Arc::new(Settings {
        bookmarks_list_command: TRIGGER.into(),
        ..Settings::default()
    });
    let sut = BookmarksHandler::new(settings, store.clone(), gate.clone(), matcher.clone());
    Fixture {
        store,
        gate,
        matcher,
        sut,
    }
}

fn validated(f: &Fixture, filter: &str) -> InputInfo {
    let info = InputInfo::new(format!("{TRIGGER}{filter}"));
    let cmd = f.sut.validate_command(&info, TRIGGER.len(), filter, None, None);
    info.with_command(cmd)
}

#[test]
fn command_string_is_the_configured_trigger() {
    let f = fixture();
    assert_eq!(f.sut.command_string(), TRIGGER);
    assert_eq!(f.sut.mode(), Mode::BookmarksList);
}

#[test]
fn validates_when_bookmarks_enabled() {
    let f = fixture();
    for filter in ["foo", "", "  spaced  "] {
        let info = validated(&f, filter);
        assert_eq!(info.mode(), Mode::BookmarksList);
        let cmd = info.parsed_command().unwrap();
        assert_eq!(cmd.parsed_input.as_deref(), Some(filter));
        assert!(cmd.is_validated);
    }
    assert!(f.gate.was_queried_for(BOOKMARKS_PLUGIN_ID));
}

#[test]
fn does_not_validate_when_bookmarks_disabled() {
    let f = fixture();
    f.gate.set_enabled(false);
    for filter in ["foo", ""] {
        let info = validated(&f, filter);
        assert_eq!(info.mode(), Mode::Standard);
        assert_eq!(info.parsed_command(), Some(&ParsedCommand::standard()));
        let cmd = info.parsed_command().unwrap();
        assert_eq!(cmd.parsed_input, None);
        assert!(!cmd.is_validated);
    }
}

#[test]
fn missing_input_returns_empty() {
    let f = fixture();
    assert!(f.sut.get_suggestions(None).is_empty());
}

#[test]
fn returns_all_bookmarks_without_filter() {
    let f = fixture();
    let results = f.sut.get_suggestions(Some(&validated(&f, "")));

    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|s| s.suggestion_type == SuggestionType::Bookmark));
    assert!(results.iter().all(|s| s.match_result.is_none()));
    let paths: Vec<_> = results.iter().filter_map(|s| s.item.path()).collect();
    assert_eq!(paths, vec!["p1", "p2"]);
    assert!(f.gate.was_queried_for(BOOKMARKS_PLUGIN_ID));
    assert_eq!(f.matcher.prepared.load(Ordering::SeqCst), 0);
}

#[test]
fn file_bookmarks_carry_their_file() {
    let f = fixture();
    let results = f.sut.get_suggestions(Some(&validated(&f, "")));
    for sugg in results.iter().filter(|s| BookmarksHandler::is_file_item(&s.item)) {
        let path = sugg.item.path().unwrap();
        assert_eq!(sugg.file.as_ref().map(|file| file.path.as_str()), Some(path));
    }
}

#[test]
fn filter_returns_only_matching_bookmarks() {
    let f = fixture();
    let results = f.sut.get_suggestions(Some(&validated(&f, BOOKMARKED_FILE_TITLE)));

    assert_eq!(results.len(), 1);
    let only = &results[0];
    assert_eq!(only.suggestion_type, SuggestionType::Bookmark);
    assert_eq!(only.item.path(), Some("p1"));
    assert!(only.match_result.is_some());
    assert_eq!(f.matcher.prepared.load(Ordering::SeqCst), 1);
    assert_eq!(f.matcher.matched.load(Ordering::SeqCst), 2);
}

#[test]
fn unvalidated_input_is_not_filtered() {
    let f = fixture();
    let info = InputInfo::new(format!("{TRIGGER}{BOOKMARKED_FILE_TITLE}"));
    assert_eq!(f.sut.get_suggestions(Some(&info)).len(), 2);
}

#[test]
fn disabled_capability_yields_no_items() {
    let f = fixture();
    f.gate.set_enabled(false);
    assert!(f.sut.get_items().is_empty());
}

#[test]
fn get_items_traverses_nested_groups() {
    let f = fixture();
    let leaf = BookmarkItem::search("tag:#todo", Some("todos"));
    let child = BookmarkItem::group(Some("childGroup"), vec![leaf.clone()]);
    let parent = BookmarkItem::group(Some("parentGroup"), vec![child]);
    f.store.set_items(vec![parent]);

    let results = f.sut.get_items();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].item, leaf);
    assert_eq!(results[0].file, None);
}

#[test]
fn get_items_resolves_file_identity() {
    let f = fixture();
    f.store.set_items(vec![BookmarkItem::file("p1", Some("file 1"))]);

    let results = f.sut.get_items();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].file, Some(FileRef::from_path("p1")));
}

#[test]
fn unresolved_file_has_null_file() {
    let f = fixture();
    f.store.set_items(vec![BookmarkItem::file("gone.md", None)]);

    let results = f.sut.get_items();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].file, None);
    let json = serde_json::to_value(&results[0]).unwrap();
    assert!(json["file"].is_null());
}

#[test]
fn store_is_reread_on_every_request() {
    let f = fixture();
    assert_eq!(f.sut.get_items().len(), 2);
    f.store.set_items(Vec::new());
    assert!(f.sut.get_items().is_empty());
}

#[test]
fn flatten_keeps_depth_first_order() {
    let store = MockStore::new(Vec::new(), &["a", "c"]);
    let tree = vec![
        BookmarkItem::file("a", None),
        BookmarkItem::group(
            None,
            vec![
                BookmarkItem::search("b", None),
                BookmarkItem::folder("skipped"),
                BookmarkItem::group(None, vec![BookmarkItem::file("c", None)]),
            ],
        ),
        BookmarkItem::file("d", None),
    ];
    let out = flatten(tree, &store);
    let titles: Vec<_> = out.iter().map(|f| f.item.display_title()).collect();
    assert_eq!(titles, vec!["a", "b", "c", "d"]);
    assert!(out
        .iter()
        .all(|f| !BookmarksHandler::is_group_item(&f.item)
            && !matches!(f.item, BookmarkItem::Folder { .. })));
    let files: Vec<_> = out.iter().map(|f| f.file.is_some()).collect();
    assert_eq!(files, vec![true, false, true, false]);
}

#[test]
fn rank_with_real_matcher_keeps_flatten_order() {
    let items = vec![
        FlattenedItem {
            item: BookmarkItem::search("q", Some("meeting notes")),
            file: None,
        },
        FlattenedItem {
            item: BookmarkItem::search("q", Some("groceries")),
            file: None,
        },
        FlattenedItem {
            item: BookmarkItem::search("q", Some("notes")),
            file: None,
        },
    ];
    let matcher = SkimQueryMatcher::new();
    let ranked = rank(items.clone(), "notes", &matcher);
    let titles: Vec<_> = ranked.iter().map(|s| s.item.display_title()).collect();
    assert_eq!(titles, vec!["meeting notes", "notes"]);
    assert!(ranked.iter().all(|s| s.match_result.is_some()));

    let all = rank(items.clone(), "", &matcher);
    assert_eq!(all.len(), 3);
    assert!(all.iter().all(|s| s.match_result.is_none()));

    let blank = rank(items, "   ", &matcher);
    let titles: Vec<_> = blank.iter().map(|s| s.item.display_title()).collect();
    assert_eq!(titles, vec!["meeting notes", "groceries", "notes"]);
    assert!(blank.iter().all(|s| s.match_result.is_none()));
}

#[test]
fn choosing_bookmarks_produces_actions() {
    let f = fixture();
    let mut results = f.sut.get_items();
    assert_eq!(
        f.sut.on_choose_suggestion(&results[0], Modifiers { mod_key: true }),
        Some(ChooseAction::OpenFile {
            path: "p1".into(),
            subpath: None,
            new_pane: true,
        })
    );

    results[0].file = None;
    assert_eq!(f.sut.on_choose_suggestion(&results[0], Modifiers::default()), None);

    f.store.set_items(vec![BookmarkItem::search("tag:#todo", None)]);
    let search = f.sut.get_items();
    assert_eq!(
        f.sut.on_choose_suggestion(&search[0], Modifiers::default()),
        Some(ChooseAction::ExecuteSearch {
            query: "tag:#todo".into()
        })
    );
}
