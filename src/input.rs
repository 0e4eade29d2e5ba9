use crate::mode::Mode;

/// Outcome of a mode validator for one parse of the input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedCommand {
    pub mode: Mode,
    /// Text following the trigger. `None` when validation failed.
    pub parsed_input: Option<String>,
    pub is_validated: bool,
}

impl ParsedCommand {
    pub fn validated(mode: Mode, parsed_input: impl Into<String>) -> Self {
        Self {
            mode,
            parsed_input: Some(parsed_input.into()),
            is_validated: true,
        }
    }

    /// The "not this mode" result.
    pub fn standard() -> Self {
        Self::default()
    }
}

/// Parse context for one keystroke: the raw input and, once a validator has
/// run, the command it produced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputInfo {
    input_text: String,
    command: Option<ParsedCommand>,
}

impl InputInfo {
    pub fn new(input_text: impl Into<String>) -> Self {
        Self {
            input_text: input_text.into(),
            command: None,
        }
    }

    pub fn with_command(mut self, command: ParsedCommand) -> Self {
        self.command = Some(command);
        self
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn parsed_command(&self) -> Option<&ParsedCommand> {
        self.command.as_ref()
    }

    pub fn mode(&self) -> Mode {
        self.command.as_ref().map(|c| c.mode).unwrap_or_default()
    }

    /// Filter text of a validated command, empty otherwise.
    pub fn filter_text(&self) -> &str {
        match &self.command {
            Some(ParsedCommand {
                is_validated: true,
                parsed_input: Some(text),
                ..
            }) => text.as_str(),
            _ => "",
        }
    }
}
