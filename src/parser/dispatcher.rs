//! Maps a command word to its parser.

use crate::parser::commands::{
    self, Command, parse_add, parse_delete, parse_edit, parse_find, parse_memo, parse_request,
    parse_tag, parse_untag,
};
use crate::parser::error::ParseError;

/// Parses one full command line into a [`Command`].
///
/// The first whitespace-delimited word selects the parser; the remainder is
/// handed over with its leading whitespace intact so that prefix occurrences
/// keep their whitespace precondition. Word-only commands ignore trailing
/// input.
pub fn parse(input: &str) -> Result<Command, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::InvalidFormat {
            usage: commands::HELP_USAGE,
        });
    }
    let (word, args) = match trimmed.find(char::is_whitespace) {
        Some(position) => (&trimmed[..position], &trimmed[position..]),
        None => (trimmed, ""),
    };
    match word {
        "add" => parse_add(args),
        "edit" => parse_edit(args),
        "delete" => parse_delete(args),
        "clear" => Ok(Command::Clear),
        "list" => Ok(Command::List),
        "find" => parse_find(args),
        "tag" => parse_tag(args),
        "untag" => parse_untag(args),
        "request" => parse_request(args),
        "memo" => parse_memo(args),
        "help" => Ok(Command::Help),
        "exit" => Ok(Command::Exit),
        _ => Err(ParseError::UnknownCommand {
            word: word.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("list", Command::List)]
    #[case("clear", Command::Clear)]
    #[case("help", Command::Help)]
    #[case("exit", Command::Exit)]
    fn word_only_commands(#[case] input: &str, #[case] expected: Command) {
        assert_eq!(parse(input).unwrap(), expected);
    }

    #[rstest]
    #[case("list 3")]
    #[case("exit please")]
    fn word_only_commands_ignore_trailing_input(#[case] input: &str) {
        assert!(parse(input).is_ok());
    }

    #[test]
    fn dispatches_to_the_selected_parser() {
        let command = parse("delete 2").unwrap();
        assert!(matches!(command, Command::Delete { index } if index.one_based() == 2));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let command = parse("   delete 2   ").unwrap();
        assert!(matches!(command, Command::Delete { .. }));
    }

    #[rstest]
    #[case("froboz 1", "froboz")]
    #[case("ADD n/Amy", "ADD")]
    #[case("addn/Amy", "addn/Amy")]
    fn unknown_command_names_the_word(#[case] input: &str, #[case] word: &str) {
        assert_eq!(
            parse(input),
            Err(ParseError::UnknownCommand {
                word: word.to_string(),
            })
        );
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn empty_input_points_at_general_help(#[case] input: &str) {
        assert_eq!(
            parse(input),
            Err(ParseError::InvalidFormat {
                usage: commands::HELP_USAGE,
            })
        );
    }
}
