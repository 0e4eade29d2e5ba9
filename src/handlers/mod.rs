use crate::host::FileRef;
use crate::input::{InputInfo, ParsedCommand};
use crate::mode::Mode;
use crate::suggestion::{AnySuggestion, ChooseAction, Modifiers};

pub mod bookmarks;
pub mod standard;

pub use bookmarks::{BookmarksHandler, BOOKMARKS_PLUGIN_ID};
pub use standard::StandardExHandler;

/// Contract shared by every mode handler.
pub trait Handler: Send + Sync {
    type Suggestion: Clone + Into<AnySuggestion>;

    /// Mode entered when this handler validates the input.
    fn mode(&self) -> Mode;

    /// Trigger string that selects this handler. Empty means the handler is
    /// never selected by a trigger.
    fn command_string(&self) -> &str;

    fn validate_command(
        &self,
        input: &InputInfo,
        index: usize,
        filter_text: &str,
        active_suggestion: Option<&AnySuggestion>,
        active_file: Option<&FileRef>,
    ) -> ParsedCommand;

    fn get_suggestions(&self, input: Option<&InputInfo>) -> Vec<Self::Suggestion>;

    fn on_choose_suggestion(
        &self,
        suggestion: &Self::Suggestion,
        modifiers: Modifiers,
    ) -> Option<ChooseAction>;
}

/// Object-safe view of a [`Handler`] used by the dispatcher.
pub trait ModeHandler: Send + Sync {
    fn mode(&self) -> Mode;
    fn command_string(&self) -> &str;
    fn validate_command(
        &self,
        input: &InputInfo,
        index: usize,
        filter_text: &str,
        active_suggestion: Option<&AnySuggestion>,
        active_file: Option<&FileRef>,
    ) -> ParsedCommand;
    fn get_suggestions(&self, input: Option<&InputInfo>) -> Vec<AnySuggestion>;
}

impl<H: Handler> ModeHandler for H {
    fn mode(&self) -> Mode {
        Handler::mode(self)
    }

    fn command_string(&self) -> &str {
        Handler::command_string(self)
    }

    fn validate_command(
        &self,
        input: &InputInfo,
        index: usize,
        filter_text: &str,
        active_suggestion: Option<&AnySuggestion>,
        active_file: Option<&FileRef>,
    ) -> ParsedCommand {
        Handler::validate_command(self, input, index, filter_text, active_suggestion, active_file)
    }

    fn get_suggestions(&self, input: Option<&InputInfo>) -> Vec<AnySuggestion> {
        Handler::get_suggestions(self, input)
            .into_iter()
            .map(Into::into)
            .collect()
    }
}
