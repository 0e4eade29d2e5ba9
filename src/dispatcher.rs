use crate::handlers::ModeHandler;
use crate::host::FileRef;
use crate::input::InputInfo;
use crate::mode::Mode;
use crate::suggestion::AnySuggestion;

/// Routes input to the handler whose trigger starts it.
pub struct ModeDispatcher {
    handlers: Vec<Box<dyn ModeHandler>>,
    max_suggestions: usize,
}

impl ModeDispatcher {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            max_suggestions: 0,
        }
    }

    /// Cap the number of suggestions returned per request. `0` disables it.
    pub fn with_max_suggestions(mut self, max: usize) -> Self {
        self.max_suggestions = max;
        self
    }

    pub fn register(&mut self, handler: Box<dyn ModeHandler>) {
        self.handlers.push(handler);
    }

    pub fn handler_for(&self, mode: Mode) -> Option<&dyn ModeHandler> {
        self.handlers
            .iter()
            .find(|h| h.mode() == mode)
            .map(|h| h.as_ref())
    }

    /// Handler with the longest non-empty trigger that prefixes `text`.
    fn triggered_handler(&self, text: &str) -> Option<&dyn ModeHandler> {
        self.handlers
            .iter()
            .filter(|h| {
                let trigger = h.command_string();
                !trigger.is_empty() && text.starts_with(trigger)
            })
            .max_by_key(|h| h.command_string().len())
            .map(|h| h.as_ref())
    }

    /// Parse `text` into an [`InputInfo`] carrying the validated command.
    ///
    /// Input without a recognised trigger, or whose handler rejects it, is
    /// left in standard mode.
    pub fn parse_input(&self, text: &str, active_file: Option<&FileRef>) -> InputInfo {
        let info = InputInfo::new(text);
        let Some(handler) = self.triggered_handler(text) else {
            return info;
        };

        let index = handler.command_string().len();
        let filter_text = &text[index..];
        let command = handler.validate_command(&info, index, filter_text, None, active_file);
        tracing::debug!(mode = %command.mode, validated = command.is_validated, "parsed input");
        info.with_command(command)
    }

    /// Suggestions from the handler owning the input's mode.
    ///
    /// Standard-mode input yields nothing: the host produces those itself.
    pub fn get_suggestions(&self, input: &InputInfo) -> Vec<AnySuggestion> {
        let mode = input.mode();
        if mode == Mode::Standard {
            return Vec::new();
        }
        let Some(handler) = self.handler_for(mode) else {
            tracing::warn!(%mode, "no handler registered for mode");
            return Vec::new();
        };
        let mut out = handler.get_suggestions(Some(input));
        if self.max_suggestions > 0 {
            out.truncate(self.max_suggestions);
        }
        out
    }
}

impl Default for ModeDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
