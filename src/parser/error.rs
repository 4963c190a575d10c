use crate::model::FieldError;
use crate::parser::prefix::Prefix;

/// Generic diagnosis for a preamble that is not a valid 1-based index.
pub const MESSAGE_INVALID_INDEX: &str = "Index is not a non-zero unsigned integer.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The prefix combination violates the command's grammar.
    #[error("Invalid command format!\n{usage}")]
    InvalidFormat { usage: &'static str },
    /// The preamble should have been a 1-based index; the invoking command's
    /// usage text is appended to the generic diagnosis.
    #[error("{}\n{usage}", MESSAGE_INVALID_INDEX)]
    InvalidIndex { usage: &'static str },
    #[error(transparent)]
    InvalidField(#[from] FieldError),
    #[error(
        "Multiple values specified for the following single-valued field(s): {}",
        format_prefixes(.0)
    )]
    DuplicatePrefix(Vec<Prefix>),
    /// An edit-type command named no field at all.
    #[error("At least one field to edit must be provided.")]
    NoFieldEdited,
    #[error("Unknown command: {word}\nUse 'help' to see the list of available commands.")]
    UnknownCommand { word: String },
}

fn format_prefixes(prefixes: &[Prefix]) -> String {
    prefixes
        .iter()
        .map(Prefix::token)
        .collect::<Vec<_>>()
        .join(" ")
}
