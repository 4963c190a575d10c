//! Validated person-field values and the constraint table behind them.
//!
//! Each field kind has a normalization rule, a format predicate, and a
//! user-facing constraint message. The table is interpreted by a single
//! [`validate`] function; the newtypes below are thin immutable wrappers
//! whose only constructor goes through it, so no instance can exist whose
//! backing string fails its kind's predicate.

use serde::{Deserialize, Serialize};

use crate::model::booking;
use crate::model::error::FieldError;

/// Maximum character count shared by the length-bounded kinds.
pub const MAX_FIELD_LEN: usize = 170;

/// The validated field kinds of a person record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    Phone,
    Email,
    Address,
    Memo,
    Tag,
    BookingTag,
    Request,
}

/// Whitespace normalization applied before a kind's predicate runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Normalize {
    /// Trim both ends only (token-like kinds).
    Trim,
    /// Trim and collapse interior whitespace runs to one space (free-text kinds).
    Collapse,
}

struct Constraint {
    kind: FieldKind,
    normalize: Normalize,
    check: fn(&str) -> bool,
    message: &'static str,
}

const CONSTRAINTS: &[Constraint] = &[
    Constraint {
        kind: FieldKind::Name,
        normalize: Normalize::Collapse,
        check: is_valid_name,
        message: "Names should start with an alphanumeric character, contain only alphanumeric \
                  characters and spaces, and be at most 170 characters long",
    },
    Constraint {
        kind: FieldKind::Phone,
        normalize: Normalize::Trim,
        check: is_valid_phone,
        message: "Phone numbers should only contain digits, and should be at least 3 digits long",
    },
    Constraint {
        kind: FieldKind::Email,
        normalize: Normalize::Trim,
        check: is_valid_email,
        message: "Emails should be of the form local-part@domain, where the local-part contains \
                  only alphanumeric characters and the special characters +_.-, and the domain is \
                  made up of dot-separated labels that start and end with alphanumeric characters \
                  and end with a label at least 2 characters long",
    },
    Constraint {
        kind: FieldKind::Address,
        normalize: Normalize::Collapse,
        check: is_valid_address,
        message: "Addresses should not be blank and should be at most 170 characters long",
    },
    Constraint {
        kind: FieldKind::Memo,
        normalize: Normalize::Trim,
        check: is_valid_memo,
        message: "Memos should be at most 170 characters long",
    },
    Constraint {
        kind: FieldKind::Tag,
        normalize: Normalize::Trim,
        check: is_valid_tag,
        message: "Tags should not be empty and should be at most 170 characters long",
    },
    Constraint {
        kind: FieldKind::BookingTag,
        normalize: Normalize::Trim,
        check: booking::is_valid_booking_tag,
        message: "Booking tags should be of the form 'PROPERTY from/YYYY-MM-DD to/YYYY-MM-DD', \
                  with a non-empty property, valid calendar dates, and an end date that is not \
                  before the start date",
    },
    Constraint {
        kind: FieldKind::Request,
        normalize: Normalize::Trim,
        check: is_valid_request,
        message: "Requests should not be empty and should be at most 170 characters long",
    },
];

impl FieldKind {
    /// Lowercase field name used in diagnostics (e.g. "booking tag").
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Name => "name",
            FieldKind::Phone => "phone",
            FieldKind::Email => "email",
            FieldKind::Address => "address",
            FieldKind::Memo => "memo",
            FieldKind::Tag => "tag",
            FieldKind::BookingTag => "booking tag",
            FieldKind::Request => "request",
        }
    }

    /// The user-facing constraint message for this kind.
    pub fn constraints(&self) -> &'static str {
        self.spec().message
    }

    fn spec(&self) -> &'static Constraint {
        // The table covers every variant; the fallback is unreachable but
        // keeps the lookup total.
        CONSTRAINTS
            .iter()
            .find(|c| c.kind == *self)
            .unwrap_or(&CONSTRAINTS[0])
    }
}

/// Normalize `raw` per `kind`'s rule and run its format predicate.
///
/// Returns the normalized string on success so that a validated value always
/// stores the canonical form.
pub fn validate(kind: FieldKind, raw: &str) -> Result<String, FieldError> {
    let spec = kind.spec();
    let normalized = match spec.normalize {
        Normalize::Trim => raw.trim().to_string(),
        Normalize::Collapse => collapse_whitespace(raw),
    };
    if (spec.check)(&normalized) {
        Ok(normalized)
    } else {
        Err(FieldError::Invalid(kind))
    }
}

/// Collapse every run of whitespace to a single space and trim both ends.
pub(crate) fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_valid_name(s: &str) -> bool {
    let Some(first) = s.chars().next() else {
        return false;
    };
    first.is_alphanumeric()
        && s.chars().all(|c| c.is_alphanumeric() || c == ' ')
        && s.chars().count() <= MAX_FIELD_LEN
}

fn is_valid_phone(s: &str) -> bool {
    s.len() >= 3 && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_valid_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    is_valid_local_part(local) && is_valid_domain(domain)
}

fn is_valid_local_part(local: &str) -> bool {
    let allowed = |c: char| c.is_ascii_alphanumeric() || matches!(c, '+' | '_' | '.' | '-');
    !local.is_empty()
        && local.chars().all(allowed)
        && local.chars().next().is_some_and(|c| c.is_ascii_alphanumeric())
        && local.chars().last().is_some_and(|c| c.is_ascii_alphanumeric())
}

fn is_valid_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    labels.last().is_some_and(|last| last.len() >= 2) && labels.iter().all(|l| is_valid_label(l))
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        && label.chars().next().is_some_and(|c| c.is_ascii_alphanumeric())
        && label.chars().last().is_some_and(|c| c.is_ascii_alphanumeric())
}

fn is_valid_address(s: &str) -> bool {
    !s.is_empty() && s.chars().count() <= MAX_FIELD_LEN
}

// An empty memo is valid: it means "clear the memo" on edit-type commands.
fn is_valid_memo(s: &str) -> bool {
    s.chars().count() <= MAX_FIELD_LEN
}

fn is_valid_tag(s: &str) -> bool {
    !s.is_empty() && s.chars().count() <= MAX_FIELD_LEN
}

fn is_valid_request(s: &str) -> bool {
    !s.is_empty() && s.chars().count() <= MAX_FIELD_LEN
}

/// Defines an immutable validated string newtype whose only constructor runs
/// the constraint table for the given kind.
macro_rules! validated_field {
    ($(#[$doc:meta])* $name:ident, $kind:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub fn parse(raw: &str) -> Result<Self, FieldError> {
                validate($kind, raw).map(Self)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = FieldError;

            fn try_from(raw: String) -> Result<Self, FieldError> {
                Self::parse(&raw)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                value.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

validated_field!(
    /// A guest's full name, whitespace-normalized.
    Name,
    FieldKind::Name
);
validated_field!(
    /// A digits-only phone number.
    Phone,
    FieldKind::Phone
);
validated_field!(
    /// An email address of the form local-part@domain.
    Email,
    FieldKind::Email
);
validated_field!(
    /// A free-text postal address, whitespace-normalized.
    Address,
    FieldKind::Address
);
validated_field!(
    /// A free-text note attached to a guest; may be empty.
    Memo,
    FieldKind::Memo
);
validated_field!(
    /// A short label attached to a guest.
    Tag,
    FieldKind::Tag
);
validated_field!(
    /// A special request recorded for a guest.
    Request,
    FieldKind::Request
);

impl Memo {
    /// An empty memo clears the field on edit-type commands and never
    /// matches a memo search.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
