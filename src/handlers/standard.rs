use crate::handlers::Handler;
use crate::host::{FileRef, WorkspaceEnvList};
use crate::input::{InputInfo, ParsedCommand};
use crate::matcher::SearchResult;
use crate::mode::{MatchType, Mode, SuggestionType};
use crate::suggestion::{
    AnySuggestion, ChooseAction, Modifiers, SystemSuggestion, UnresolvedSuggestion,
};

/// Decorates the host's own standard-mode suggestions.
///
/// Standard mode has no trigger and its suggestions come from the host, so
/// validation and suggestion generation are not supported here.
#[derive(Debug, Default)]
pub struct StandardExHandler;

impl StandardExHandler {
    pub fn new() -> Self {
        Self
    }

    /// Record which text a standard suggestion matched on and where its file
    /// appears in the workspace.
    pub fn add_properties_to_standard_suggestions(
        &self,
        env: &WorkspaceEnvList,
        sugg: &mut SystemSuggestion,
    ) {
        match sugg {
            SystemSuggestion::Alias(s) => {
                if s.match_result.is_some() {
                    s.match_type = MatchType::Primary;
                    s.match_text = Some(s.alias.clone());
                } else {
                    s.match_type = MatchType::None;
                    s.match_text = None;
                }
            }
            SystemSuggestion::File(s) => {
                if s.match_result.is_some() {
                    s.match_type = MatchType::Path;
                    s.match_text = Some(s.file.path.clone());
                } else {
                    s.match_type = MatchType::None;
                    s.match_text = None;
                }
            }
        }
        update_workspace_env_status(env, sugg);
    }

    pub fn create_unresolved_suggestion(
        linktext: impl Into<String>,
        result: Option<SearchResult>,
    ) -> UnresolvedSuggestion {
        UnresolvedSuggestion {
            suggestion_type: SuggestionType::Unresolved,
            linktext: linktext.into(),
            match_result: result,
        }
    }
}

fn update_workspace_env_status(env: &WorkspaceEnvList, sugg: &mut SystemSuggestion) {
    let (file, open, recent, bookmarked) = match sugg {
        SystemSuggestion::File(s) => (
            &s.file,
            &mut s.is_open_in_editor,
            &mut s.is_recent,
            &mut s.is_bookmarked,
        ),
        SystemSuggestion::Alias(s) => (
            &s.file,
            &mut s.is_open_in_editor,
            &mut s.is_recent,
            &mut s.is_bookmarked,
        ),
    };
    *open = env.open_workspace_files.contains(&file.path);
    *recent = env.recent_files.contains(&file.path);
    *bookmarked = env.bookmarked_files.contains(&file.path);
}

impl Handler for StandardExHandler {
    type Suggestion = SystemSuggestion;

    fn mode(&self) -> Mode {
        Mode::Standard
    }

    fn command_string(&self) -> &str {
        ""
    }

    fn validate_command(
        &self,
        _input: &InputInfo,
        _index: usize,
        _filter_text: &str,
        _active_suggestion: Option<&AnySuggestion>,
        _active_file: Option<&FileRef>,
    ) -> ParsedCommand {
        unimplemented!("standard mode has no command to validate")
    }

    fn get_suggestions(&self, _input: Option<&InputInfo>) -> Vec<SystemSuggestion> {
        unimplemented!("standard mode suggestions are produced by the host")
    }

    fn on_choose_suggestion(
        &self,
        suggestion: &SystemSuggestion,
        modifiers: Modifiers,
    ) -> Option<ChooseAction> {
        let file = match suggestion {
            SystemSuggestion::File(s) => &s.file,
            SystemSuggestion::Alias(s) => &s.file,
        };
        Some(ChooseAction::OpenFile {
            path: file.path.clone(),
            subpath: None,
            new_pane: modifiers.mod_key,
        })
    }
}
