//! Multi-criteria guest search.
//!
//! A [`PersonPredicate`] composes field-level match rules into one boolean
//! filter: a person matches when it matches at least one (type, keyword)
//! pair, with OR across search types and OR across keywords within a type.
//! The contract checks happen at construction; a built predicate is a pure,
//! total function over a person record and may be applied repeatedly.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::person::Person;
use crate::search::error::SearchError;

const DATE_KEYWORD_FORMAT: &str = "%Y-%m-%d";

/// The field categories a `find` query can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchType {
    Name,
    Phone,
    Email,
    Address,
    Tag,
    BookingDate,
    BookingProperty,
    Memo,
}

impl SearchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::Name => "name",
            SearchType::Phone => "phone",
            SearchType::Email => "email",
            SearchType::Address => "address",
            SearchType::Tag => "tag",
            SearchType::BookingDate => "booking-date",
            SearchType::BookingProperty => "booking-property",
            SearchType::Memo => "memo",
        }
    }
}

impl std::fmt::Display for SearchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Search type to the ordered, non-empty keywords requested for it.
pub type SearchCriteria = BTreeMap<SearchType, Vec<String>>;

/// The combined filter built from one `find` command's criteria.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonPredicate {
    criteria: SearchCriteria,
}

impl PersonPredicate {
    /// Builds the predicate, rejecting an empty criteria map and any
    /// criterion whose keyword list is empty or contains an empty keyword.
    pub fn new(criteria: SearchCriteria) -> Result<Self, SearchError> {
        if criteria.is_empty() {
            return Err(SearchError::EmptyCriteria);
        }
        for (&search_type, keywords) in &criteria {
            if keywords.is_empty() || keywords.iter().any(|k| k.is_empty()) {
                return Err(SearchError::EmptyKeyword { search_type });
            }
        }
        Ok(Self { criteria })
    }

    pub fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    /// True when `person` matches any (type, keyword) pair.
    pub fn matches(&self, person: &Person) -> bool {
        self.criteria.iter().any(|(&search_type, keywords)| {
            keywords
                .iter()
                .any(|keyword| match_field(person, &keyword.to_lowercase(), search_type))
        })
    }
}

/// Per-type matcher. `keyword` is already lower-cased; matching is
/// case-insensitive substring containment except for booking dates. Absent
/// optional fields never match, and a malformed date keyword never matches
/// (the predicate stays total).
fn match_field(person: &Person, keyword: &str, search_type: SearchType) -> bool {
    match search_type {
        SearchType::Name => person.name.as_str().to_lowercase().contains(keyword),
        SearchType::Phone => person
            .phone
            .as_ref()
            .is_some_and(|phone| phone.as_str().to_lowercase().contains(keyword)),
        SearchType::Email => person
            .email
            .as_ref()
            .is_some_and(|email| email.as_str().to_lowercase().contains(keyword)),
        SearchType::Address => person
            .address
            .as_ref()
            .is_some_and(|address| address.as_str().to_lowercase().contains(keyword)),
        SearchType::Tag => person
            .tags
            .iter()
            .any(|tag| tag.as_str().to_lowercase().contains(keyword)),
        SearchType::BookingProperty => person
            .booking_tags
            .iter()
            .any(|tag| tag.label().to_lowercase().contains(keyword)),
        SearchType::BookingDate => {
            match NaiveDate::parse_from_str(keyword, DATE_KEYWORD_FORMAT) {
                Ok(date) => person.booking_tags.iter().any(|tag| tag.covers(date)),
                Err(_) => false,
            }
        }
        SearchType::Memo => person.memo.as_ref().is_some_and(|memo| {
            !memo.is_empty() && memo.as_str().to_lowercase().contains(keyword)
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::booking::BookingTag;
    use crate::model::field::{Address, Email, Memo, Name, Phone, Request, Tag};
    use crate::model::tag_list::TagList;
    use rstest::rstest;

    fn person(name: &str) -> Person {
        Person {
            name: Name::parse(name).unwrap(),
            phone: None,
            email: None,
            address: None,
            memo: None,
            tags: TagList::new(),
            booking_tags: Vec::new(),
            requests: Vec::new(),
        }
    }

    fn full_person() -> Person {
        Person {
            name: Name::parse("John Lee").unwrap(),
            phone: Some(Phone::parse("91234567").unwrap()),
            email: Some(Email::parse("johnlee@example.com").unwrap()),
            address: Some(Address::parse("311 Clementi Ave 2").unwrap()),
            memo: Some(Memo::parse("wants breakfast").unwrap()),
            tags: TagList::try_from(vec![Tag::parse("friend").unwrap()]).unwrap(),
            booking_tags: vec![
                BookingTag::parse("Beach House from/2024-10-01 to/2024-10-20").unwrap(),
            ],
            requests: vec![Request::parse("late checkout").unwrap()],
        }
    }

    fn criteria(entries: &[(SearchType, &[&str])]) -> SearchCriteria {
        entries
            .iter()
            .map(|&(search_type, keywords)| {
                (
                    search_type,
                    keywords.iter().map(|k| k.to_string()).collect(),
                )
            })
            .collect()
    }

    // === Construction contract ===

    #[test]
    fn empty_criteria_is_rejected() {
        assert_eq!(
            PersonPredicate::new(SearchCriteria::new()),
            Err(SearchError::EmptyCriteria)
        );
    }

    #[test]
    fn empty_keyword_list_is_rejected() {
        let result = PersonPredicate::new(criteria(&[(SearchType::Name, &[])]));
        assert_eq!(
            result,
            Err(SearchError::EmptyKeyword {
                search_type: SearchType::Name
            })
        );
    }

    #[test]
    fn empty_keyword_string_is_rejected() {
        let result = PersonPredicate::new(criteria(&[(SearchType::Tag, &["friend", ""])]));
        assert_eq!(
            result,
            Err(SearchError::EmptyKeyword {
                search_type: SearchType::Tag
            })
        );
    }

    // === OR semantics ===

    #[test]
    fn or_across_types() {
        let predicate = PersonPredicate::new(criteria(&[
            (SearchType::Name, &["john"]),
            (SearchType::Tag, &["friend"]),
        ]))
        .unwrap();

        // matches by name alone (no tags at all)
        assert!(predicate.matches(&person("John Lee")));

        // matches by tag alone (name does not contain "john")
        let mut amy = person("Amy");
        amy.tags = TagList::try_from(vec![Tag::parse("friend").unwrap()]).unwrap();
        assert!(predicate.matches(&amy));

        // matches neither
        assert!(!predicate.matches(&person("Bob")));
    }

    #[test]
    fn or_within_a_type() {
        let predicate =
            PersonPredicate::new(criteria(&[(SearchType::Name, &["alice", "bob"])])).unwrap();
        assert!(predicate.matches(&person("Bob Tan")));
        assert!(predicate.matches(&person("Alice Lim")));
        assert!(!predicate.matches(&person("Carol")));
    }

    // === Per-type matchers ===

    #[rstest]
    #[case(SearchType::Name, "john", true)]
    #[case(SearchType::Name, "JOHN", true)]
    #[case(SearchType::Name, "lee", true)]
    #[case(SearchType::Name, "amy", false)]
    #[case(SearchType::Phone, "9123", true)]
    #[case(SearchType::Phone, "000", false)]
    #[case(SearchType::Email, "johnlee@", true)]
    #[case(SearchType::Email, "gmail", false)]
    #[case(SearchType::Address, "clementi", true)]
    #[case(SearchType::Address, "bedok", false)]
    #[case(SearchType::Tag, "fri", true)]
    #[case(SearchType::Tag, "vip", false)]
    #[case(SearchType::Memo, "breakfast", true)]
    #[case(SearchType::Memo, "dinner", false)]
    #[case(SearchType::BookingProperty, "beach", true)]
    #[case(SearchType::BookingProperty, "villa", false)]
    fn substring_matchers(#[case] search_type: SearchType, #[case] keyword: &str, #[case] expected: bool) {
        let predicate =
            PersonPredicate::new(criteria(&[(search_type, &[keyword])])).unwrap();
        assert_eq!(predicate.matches(&full_person()), expected);
    }

    #[test]
    fn absent_optional_fields_never_match() {
        let bare = person("John");
        for search_type in [
            SearchType::Phone,
            SearchType::Email,
            SearchType::Address,
            SearchType::Memo,
            SearchType::Tag,
            SearchType::BookingProperty,
        ] {
            let predicate =
                PersonPredicate::new(criteria(&[(search_type, &["john"])])).unwrap();
            assert!(!predicate.matches(&bare), "{search_type} matched a bare person");
        }
    }

    #[test]
    fn empty_memo_never_matches() {
        let mut p = person("John");
        p.memo = Some(Memo::parse("").unwrap());
        let predicate = PersonPredicate::new(criteria(&[(SearchType::Memo, &["x"])])).unwrap();
        assert!(!predicate.matches(&p));
    }

    // === Booking-date matcher ===

    #[rstest]
    #[case("2024-10-15", true)]
    #[case("2024-10-01", true)]
    #[case("2024-10-20", true)]
    #[case("2024-09-30", false)]
    #[case("2024-10-21", false)]
    fn booking_date_interval_is_inclusive(#[case] keyword: &str, #[case] expected: bool) {
        let predicate =
            PersonPredicate::new(criteria(&[(SearchType::BookingDate, &[keyword])])).unwrap();
        assert_eq!(predicate.matches(&full_person()), expected);
    }

    #[rstest]
    #[case("not-a-date")]
    #[case("2024-13-01")]
    #[case("15-10-2024")]
    fn malformed_date_keyword_never_matches(#[case] keyword: &str) {
        let predicate =
            PersonPredicate::new(criteria(&[(SearchType::BookingDate, &[keyword])])).unwrap();
        assert!(!predicate.matches(&full_person()));
    }

    // === Purity ===

    #[test]
    fn matching_is_repeatable() {
        let predicate =
            PersonPredicate::new(criteria(&[(SearchType::Name, &["john"])])).unwrap();
        let p = full_person();
        assert_eq!(predicate.matches(&p), predicate.matches(&p));
    }
}
