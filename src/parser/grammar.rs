//! Declarative prefix-arity rules shared by the command parsers.
//!
//! Each command declares one [`CommandGrammar`] row; a single interpreter
//! enforces it against the tokenized arguments before any field value is
//! validated, so adding a command means adding a row, not conditionals.

use crate::parser::error::ParseError;
use crate::parser::prefix::Prefix;
use crate::parser::tokenizer::ArgumentMultimap;

#[derive(Debug, Clone, Copy)]
pub struct CommandGrammar {
    /// Usage text appended to grammar violations.
    pub usage: &'static str,
    /// Prefixes that must be present. An empty value still counts as
    /// present; emptiness is a field-validation concern.
    pub required: &'static [Prefix],
    /// Groups of which exactly one member must be present.
    pub exactly_one_of: &'static [&'static [Prefix]],
    /// Prefixes that may occur at most once.
    pub singular: &'static [Prefix],
    /// Whether text before the first prefix is a grammar violation.
    pub forbid_preamble: bool,
}

impl CommandGrammar {
    pub const fn new(usage: &'static str) -> Self {
        Self {
            usage,
            required: &[],
            exactly_one_of: &[],
            singular: &[],
            forbid_preamble: false,
        }
    }

    pub fn check(&self, map: &ArgumentMultimap) -> Result<(), ParseError> {
        for &prefix in self.required {
            if map.value(prefix).is_none() {
                return Err(ParseError::InvalidFormat { usage: self.usage });
            }
        }
        if self.forbid_preamble && !map.preamble().is_empty() {
            return Err(ParseError::InvalidFormat { usage: self.usage });
        }
        for group in self.exactly_one_of {
            let present = group.iter().filter(|&&p| map.value(p).is_some()).count();
            if present != 1 {
                return Err(ParseError::InvalidFormat { usage: self.usage });
            }
        }
        map.verify_no_duplicates(self.singular)
    }
}
