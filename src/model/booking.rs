//! Booking annotations: a property label plus the stay's date range.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::error::FieldError;
use crate::model::field::FieldKind;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A validated booking annotation of the textual form
/// `PROPERTY from/YYYY-MM-DD to/YYYY-MM-DD`.
///
/// The full normalized text is kept as the canonical value; the property
/// label and the start/end dates are derived from it at parse time and are
/// guaranteed consistent with the text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BookingTag {
    text: String,
    label: String,
    start: NaiveDate,
    end: NaiveDate,
}

impl BookingTag {
    pub fn parse(raw: &str) -> Result<Self, FieldError> {
        let text = raw.trim();
        let (label, start, end) =
            split_parts(text).ok_or(FieldError::Invalid(FieldKind::BookingTag))?;
        Ok(Self {
            text: text.to_string(),
            label: label.to_string(),
            start,
            end,
        })
    }

    /// The full textual form, e.g. `Beach House from/2024-10-01 to/2024-10-20`.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The property label, e.g. `Beach House`.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether `date` falls within the booking period, inclusive at both ends.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl TryFrom<String> for BookingTag {
    type Error = FieldError;

    fn try_from(raw: String) -> Result<Self, FieldError> {
        Self::parse(&raw)
    }
}

impl From<BookingTag> for String {
    fn from(value: BookingTag) -> String {
        value.text
    }
}

impl std::fmt::Display for BookingTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Split `PROPERTY from/START to/END` into its parts, or `None` when the
/// text does not conform. The label match is greedy: only the last
/// ` from/` separates the label from the date range.
fn split_parts(text: &str) -> Option<(&str, NaiveDate, NaiveDate)> {
    let (label, range) = text.rsplit_once(" from/")?;
    let label = label.trim_end();
    if label.is_empty() {
        return None;
    }
    let (start_raw, end_raw) = range.split_once(" to/")?;
    let start = NaiveDate::parse_from_str(start_raw.trim(), DATE_FORMAT).ok()?;
    let end = NaiveDate::parse_from_str(end_raw.trim(), DATE_FORMAT).ok()?;
    (start <= end).then_some((label, start, end))
}

/// Table predicate for [`FieldKind::BookingTag`].
pub(crate) fn is_valid_booking_tag(s: &str) -> bool {
    split_parts(s).is_some()
}
