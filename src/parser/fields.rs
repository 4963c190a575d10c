//! Index parsing and the batch field validators used by the command parsers.

use std::collections::HashSet;

use serde::Serialize;

use crate::model::booking::BookingTag;
use crate::model::field::{FieldKind, Request, Tag};
use crate::model::tag_list::TagList;
use crate::model::FieldError;
use crate::parser::error::ParseError;

/// A 1-based position into the displayed guest list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Index(usize);

impl Index {
    /// `None` when `value` is zero.
    pub fn from_one_based(value: usize) -> Option<Self> {
        (value > 0).then_some(Self(value))
    }

    pub fn one_based(&self) -> usize {
        self.0
    }

    pub fn zero_based(&self) -> usize {
        self.0 - 1
    }
}

/// Parses a trimmed non-zero unsigned integer, or `None`.
///
/// Signs are rejected (`+1` is not a valid index), as is anything that
/// overflows; callers attach their own usage text to the failure.
pub fn parse_index(raw: &str) -> Option<Index> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: usize = trimmed.parse().ok()?;
    Index::from_one_based(value)
}

/// Validates every raw tag value into a [`TagList`].
///
/// A repeated trimmed raw value is a duplicate-field error, detected before
/// validity so that `t/x t/x` reports the duplicate even when `x` is not a
/// valid tag.
pub fn parse_tags(values: &[String]) -> Result<TagList, ParseError> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut tags = TagList::new();
    for raw in values {
        let trimmed = raw.trim();
        if !seen.insert(trimmed.to_string()) {
            return Err(duplicate(FieldKind::Tag, trimmed));
        }
        let tag = Tag::parse(trimmed)?;
        tags.add(tag).map_err(|_| duplicate(FieldKind::Tag, trimmed))?;
    }
    Ok(tags)
}

/// Validates every raw booking tag; identical text after the first
/// occurrence is dropped rather than rejected.
pub fn parse_booking_tags(values: &[String]) -> Result<Vec<BookingTag>, ParseError> {
    let mut parsed: Vec<BookingTag> = Vec::new();
    for raw in values {
        let tag = BookingTag::parse(raw)?;
        if !parsed.contains(&tag) {
            parsed.push(tag);
        }
    }
    Ok(parsed)
}

/// Validates every raw request, rejecting a repeated request text.
pub fn parse_requests(values: &[String]) -> Result<Vec<Request>, ParseError> {
    let mut parsed: Vec<Request> = Vec::new();
    for raw in values {
        let request = Request::parse(raw)?;
        if parsed.contains(&request) {
            return Err(duplicate(FieldKind::Request, request.as_str()));
        }
        parsed.push(request);
    }
    Ok(parsed)
}

fn duplicate(kind: FieldKind, value: &str) -> ParseError {
    FieldError::Duplicate {
        kind,
        value: value.to_string(),
    }
    .into()
}
