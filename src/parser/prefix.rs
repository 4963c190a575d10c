//! The fixed prefix registry of the command language.
//!
//! A prefix is an opaque marker token that delimits one argument segment
//! (e.g. `n/` introduces a name). The registry is a process-wide constant;
//! prefixes are compared by exact token equality.

/// An argument-segment marker, e.g. `n/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(token: &'static str) -> Self {
        Self(token)
    }

    pub const fn token(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");
pub const PREFIX_ADDRESS: Prefix = Prefix::new("a/");
pub const PREFIX_TAG: Prefix = Prefix::new("t/");
pub const PREFIX_BOOKING_TAG: Prefix = Prefix::new("bt/");
pub const PREFIX_BOOKING_DATE: Prefix = Prefix::new("bd/");
pub const PREFIX_BOOKING_PROPERTY: Prefix = Prefix::new("bp/");
pub const PREFIX_MEMO: Prefix = Prefix::new("m/");
pub const PREFIX_REQUEST: Prefix = Prefix::new("r/");
