use std::sync::Arc;

use anyhow::Context;
use quick_switcher::dispatcher::ModeDispatcher;
use quick_switcher::handlers::{BookmarksHandler, BOOKMARKS_PLUGIN_ID};
use quick_switcher::host::StaticCapabilities;
use quick_switcher::matcher::SkimQueryMatcher;
use quick_switcher::settings::{Settings, SETTINGS_FILE};
use quick_switcher::store::JsonItemStore;

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let settings_path = args.next().unwrap_or_else(|| SETTINGS_FILE.to_string());
    let query = args.collect::<Vec<_>>().join(" ");

    let settings = Settings::load(&settings_path)
        .with_context(|| format!("failed to load settings from {settings_path}"))?;
    quick_switcher::logging::init(settings.debug_logging, None);

    let vault = settings.vault_path.clone().unwrap_or_else(|| ".".into());
    let store = JsonItemStore::open(settings.bookmarks_path(), &vault)?;
    let settings = Arc::new(settings);

    let handler = BookmarksHandler::new(
        settings.clone(),
        Arc::new(store),
        Arc::new(StaticCapabilities::new([BOOKMARKS_PLUGIN_ID])),
        Arc::new(SkimQueryMatcher::new()),
    );
    let mut dispatcher = ModeDispatcher::new().with_max_suggestions(settings.max_suggestions);
    dispatcher.register(Box::new(handler));

    let input = dispatcher.parse_input(&query, None);
    tracing::info!(mode = %input.mode(), "dispatching query");
    for sugg in dispatcher.get_suggestions(&input) {
        println!("{}", serde_json::to_string(&sugg)?);
    }
    Ok(())
}
