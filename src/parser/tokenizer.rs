//! Splits a raw argument string into a preamble and prefix-tagged segments.
//!
//! A prefix occurrence is only recognized at position 0 or immediately after
//! whitespace, so a token embedded inside a value (e.g. an email containing
//! `n/`) never opens a new segment. Values are the trimmed text between one
//! occurrence and the next; nothing is validated here.

use std::collections::HashMap;

use crate::parser::error::ParseError;
use crate::parser::prefix::Prefix;

/// Per-prefix ordered raw values plus the preamble, as extracted from one
/// command's argument string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// The unlabelled leading portion of the arguments; may be empty.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// The last occurrence's value for `prefix`, or `None` when it never
    /// occurred. Last-wins for fields where repetition is not meaningful.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// Every occurrence's value for `prefix`, in left-to-right order.
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values
            .get(&prefix)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Fails when any of `prefixes` occurs more than once, naming every
    /// offender.
    pub fn verify_no_duplicates(&self, prefixes: &[Prefix]) -> Result<(), ParseError> {
        let duplicated: Vec<Prefix> = prefixes
            .iter()
            .copied()
            .filter(|&prefix| self.all_values(prefix).len() > 1)
            .collect();
        if duplicated.is_empty() {
            Ok(())
        } else {
            Err(ParseError::DuplicatePrefix(duplicated))
        }
    }
}

/// Tokenize `raw_args` against the requested `prefixes`.
///
/// Every requested prefix is present in the result, with an empty sequence
/// when it never occurred. An input without any occurrence yields the whole
/// trimmed input as the preamble.
pub fn tokenize(raw_args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut occurrences: Vec<(usize, Prefix)> = Vec::new();
    for &prefix in prefixes {
        let mut from = 0;
        while let Some(found) = raw_args[from..].find(prefix.token()) {
            let position = from + found;
            if position == 0 || raw_args[..position].ends_with(char::is_whitespace) {
                occurrences.push((position, prefix));
            }
            from = position + 1;
        }
    }
    occurrences.sort_by_key(|&(position, _)| position);

    let mut values: HashMap<Prefix, Vec<String>> = prefixes
        .iter()
        .map(|&prefix| (prefix, Vec::new()))
        .collect();
    let preamble = match occurrences.first() {
        Some(&(position, _)) => &raw_args[..position],
        None => raw_args,
    };
    for (i, &(position, prefix)) in occurrences.iter().enumerate() {
        let value_start = position + prefix.token().len();
        let value_end = occurrences
            .get(i + 1)
            .map(|&(next, _)| next)
            .unwrap_or(raw_args.len());
        if let Some(entry) = values.get_mut(&prefix) {
            entry.push(raw_args[value_start..value_end].trim().to_string());
        }
    }

    ArgumentMultimap {
        preamble: preamble.trim().to_string(),
        values,
    }
}
