//! The guest record and the edit descriptor produced by the `edit` command.

use serde::{Deserialize, Serialize};

use crate::model::booking::BookingTag;
use crate::model::field::{Address, Email, Memo, Name, Phone, Request};
use crate::model::tag_list::TagList;

/// One guest. Only the name is mandatory at the type level; a search against
/// an absent optional field never matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: Name,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<Email>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<Memo>,
    #[serde(default, skip_serializing_if = "TagList::is_empty")]
    pub tags: TagList,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub booking_tags: Vec<BookingTag>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requests: Vec<Request>,
}

/// Field deltas carried by an `edit` command.
///
/// `None` leaves the field unchanged. For the repeatable fields, `Some` with
/// an empty collection resets the field to empty (the user supplied the
/// prefix with no value), which is distinct from omitting the prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PersonEdits {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Name>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Email>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<Memo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<TagList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_tags: Option<Vec<BookingTag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requests: Option<Vec<Request>>,
}

impl PersonEdits {
    /// True when no field is edited at all; such an edit is rejected at
    /// parse time.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.phone.is_none()
            && self.email.is_none()
            && self.address.is_none()
            && self.memo.is_none()
            && self.tags.is_none()
            && self.booking_tags.is_none()
            && self.requests.is_none()
    }

    /// Produces the edited copy of `person`. An explicitly empty memo clears
    /// the field rather than storing an empty value.
    pub fn apply(&self, person: &Person) -> Person {
        Person {
            name: self.name.clone().unwrap_or_else(|| person.name.clone()),
            phone: self.phone.clone().or_else(|| person.phone.clone()),
            email: self.email.clone().or_else(|| person.email.clone()),
            address: self.address.clone().or_else(|| person.address.clone()),
            memo: match &self.memo {
                Some(memo) if memo.is_empty() => None,
                Some(memo) => Some(memo.clone()),
                None => person.memo.clone(),
            },
            tags: self.tags.clone().unwrap_or_else(|| person.tags.clone()),
            booking_tags: self
                .booking_tags
                .clone()
                .unwrap_or_else(|| person.booking_tags.clone()),
            requests: self
                .requests
                .clone()
                .unwrap_or_else(|| person.requests.clone()),
        }
    }
}
