//! The command objects and one parser per command verb.
//!
//! Every parser follows the same policy: tokenize with the command's
//! declared prefix set, enforce its grammar row, validate the preamble as an
//! index when the command targets a guest by position, then validate each
//! present field in a fixed declared order so the first failure is
//! deterministic.

use serde::Serialize;

use crate::model::booking::BookingTag;
use crate::model::field::{Address, Email, Memo, Name, Phone, Request, Tag};
use crate::model::person::{Person, PersonEdits};
use crate::model::tag_list::TagList;
use crate::parser::error::ParseError;
use crate::parser::fields::{
    Index, parse_booking_tags, parse_index, parse_requests, parse_tags,
};
use crate::parser::grammar::CommandGrammar;
use crate::parser::prefix::{
    PREFIX_ADDRESS, PREFIX_BOOKING_DATE, PREFIX_BOOKING_PROPERTY, PREFIX_BOOKING_TAG,
    PREFIX_EMAIL, PREFIX_MEMO, PREFIX_NAME, PREFIX_PHONE, PREFIX_REQUEST, PREFIX_TAG, Prefix,
};
use crate::parser::tokenizer::{ArgumentMultimap, tokenize};
use crate::search::predicate::{SearchCriteria, SearchType};

/// One fully-validated user action. Produced only by a successful parse;
/// execution happens elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    Add(Person),
    Edit { index: Index, edits: PersonEdits },
    Delete { index: Index },
    Clear,
    List,
    Find(SearchCriteria),
    Tag {
        index: Index,
        tags: TagList,
        booking_tags: Vec<BookingTag>,
    },
    Untag {
        index: Index,
        tag: Option<Tag>,
        booking_tag: Option<BookingTag>,
    },
    Request { index: Index, requests: Vec<Request> },
    Memo { index: Index, memo: Memo },
    Help,
    Exit,
}

pub const ADD_USAGE: &str = "add: Adds a guest to the guest list.\n\
    Parameters: n/NAME p/PHONE e/EMAIL a/ADDRESS [m/MEMO] [r/REQUEST]... \
    [bt/BOOKING_TAG]... [t/TAG]...\n\
    Example: add n/John Doe p/98765432 e/johnd@example.com a/311 Clementi Ave 2 t/friend";

pub const EDIT_USAGE: &str = "edit: Edits the guest at the given index. \
    Existing values are overwritten; a repeatable prefix with no value \
    clears that field.\n\
    Parameters: INDEX [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [m/MEMO] \
    [t/TAG]... [bt/BOOKING_TAG]... [r/REQUEST]...\n\
    Example: edit 1 p/91234567 e/johndoe@example.com";

pub const DELETE_USAGE: &str = "delete: Deletes the guest at the given index.\n\
    Parameters: INDEX\n\
    Example: delete 1";

pub const FIND_USAGE: &str = "find: Finds guests by one or more fields simultaneously.\n\
    Parameters: KEYWORD... or any of n/KEYWORD... p/KEYWORD... e/KEYWORD... \
    a/KEYWORD... t/KEYWORD... m/KEYWORD... bd/DATE... bp/PROPERTY...\n\
    Examples: find John | find n/John a/Clementi | find bd/2024-10-15";

pub const TAG_USAGE: &str = "tag: Attaches tags or booking tags to the guest at the given index.\n\
    Parameters: INDEX [t/TAG]... [bt/BOOKING_TAG]...\n\
    Example: tag 2 t/vip bt/Beach House from/2024-10-01 to/2024-10-20";

pub const UNTAG_USAGE: &str = "untag: Removes one tag or one booking tag from the guest at the \
    given index.\n\
    Parameters: INDEX t/TAG or INDEX bt/BOOKING_TAG\n\
    Example: untag 2 t/vip";

pub const REQUEST_USAGE: &str = "request: Records special requests for the guest at the given \
    index.\n\
    Parameters: INDEX r/REQUEST...\n\
    Example: request 3 r/extra towels r/late checkout";

pub const MEMO_USAGE: &str = "memo: Sets the memo of the guest at the given index; an empty \
    memo clears it.\n\
    Parameters: INDEX m/MEMO\n\
    Example: memo 1 m/prefers the ground floor";

pub const HELP_USAGE: &str = "help: Shows program usage instructions.\n\
    Example: help";

const ADD_PREFIXES: &[Prefix] = &[
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_ADDRESS,
    PREFIX_MEMO,
    PREFIX_REQUEST,
    PREFIX_BOOKING_TAG,
    PREFIX_TAG,
];

const ADD_GRAMMAR: CommandGrammar = CommandGrammar {
    required: &[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS],
    singular: &[
        PREFIX_NAME,
        PREFIX_PHONE,
        PREFIX_EMAIL,
        PREFIX_ADDRESS,
        PREFIX_MEMO,
    ],
    forbid_preamble: true,
    ..CommandGrammar::new(ADD_USAGE)
};

pub fn parse_add(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(args, ADD_PREFIXES);
    ADD_GRAMMAR.check(&map)?;

    let name = Name::parse(map.value(PREFIX_NAME).unwrap_or_default())?;
    let phone = Phone::parse(map.value(PREFIX_PHONE).unwrap_or_default())?;
    let email = Email::parse(map.value(PREFIX_EMAIL).unwrap_or_default())?;
    let address = Address::parse(map.value(PREFIX_ADDRESS).unwrap_or_default())?;
    let memo = match map.value(PREFIX_MEMO) {
        Some(raw) => {
            let memo = Memo::parse(raw)?;
            (!memo.is_empty()).then_some(memo)
        }
        None => None,
    };
    let requests = parse_requests(map.all_values(PREFIX_REQUEST))?;
    let booking_tags = parse_booking_tags(map.all_values(PREFIX_BOOKING_TAG))?;
    let tags = parse_tags(map.all_values(PREFIX_TAG))?;

    Ok(Command::Add(Person {
        name,
        phone: Some(phone),
        email: Some(email),
        address: Some(address),
        memo,
        tags,
        booking_tags,
        requests,
    }))
}

const EDIT_PREFIXES: &[Prefix] = ADD_PREFIXES;

const EDIT_GRAMMAR: CommandGrammar = CommandGrammar {
    singular: &[
        PREFIX_NAME,
        PREFIX_PHONE,
        PREFIX_EMAIL,
        PREFIX_ADDRESS,
        PREFIX_MEMO,
    ],
    ..CommandGrammar::new(EDIT_USAGE)
};

pub fn parse_edit(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(args, EDIT_PREFIXES);

    // The no-field check precedes index validation: `edit Amy Bee` and a
    // bare `edit 1` both report the missing field, not the preamble.
    if EDIT_PREFIXES.iter().all(|&p| map.value(p).is_none()) {
        return Err(ParseError::NoFieldEdited);
    }

    let index =
        parse_index(map.preamble()).ok_or(ParseError::InvalidIndex { usage: EDIT_USAGE })?;
    EDIT_GRAMMAR.check(&map)?;

    let edits = PersonEdits {
        name: map.value(PREFIX_NAME).map(Name::parse).transpose()?,
        phone: map.value(PREFIX_PHONE).map(Phone::parse).transpose()?,
        email: map.value(PREFIX_EMAIL).map(Email::parse).transpose()?,
        address: map.value(PREFIX_ADDRESS).map(Address::parse).transpose()?,
        memo: map.value(PREFIX_MEMO).map(Memo::parse).transpose()?,
        tags: tags_for_edit(&map)?,
        booking_tags: booking_tags_for_edit(&map)?,
        requests: requests_for_edit(&map)?,
    };

    Ok(Command::Edit { index, edits })
}

/// `None` when `t/` was absent; reset-to-empty when its only value is the
/// empty string; otherwise the validated tags. An empty value alongside
/// non-empty ones is an ordinary empty-tag validation failure.
fn tags_for_edit(map: &ArgumentMultimap) -> Result<Option<TagList>, ParseError> {
    let values = map.all_values(PREFIX_TAG);
    if values.is_empty() {
        return Ok(None);
    }
    if values.len() == 1 && values[0].is_empty() {
        return Ok(Some(TagList::new()));
    }
    parse_tags(values).map(Some)
}

fn booking_tags_for_edit(map: &ArgumentMultimap) -> Result<Option<Vec<BookingTag>>, ParseError> {
    let values = map.all_values(PREFIX_BOOKING_TAG);
    if values.is_empty() {
        return Ok(None);
    }
    if values.len() == 1 && values[0].is_empty() {
        return Ok(Some(Vec::new()));
    }
    parse_booking_tags(values).map(Some)
}

fn requests_for_edit(map: &ArgumentMultimap) -> Result<Option<Vec<Request>>, ParseError> {
    let values = map.all_values(PREFIX_REQUEST);
    if values.is_empty() {
        return Ok(None);
    }
    if values.len() == 1 && values[0].is_empty() {
        return Ok(Some(Vec::new()));
    }
    parse_requests(values).map(Some)
}

pub fn parse_delete(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(args, &[]);
    let index =
        parse_index(map.preamble()).ok_or(ParseError::InvalidIndex { usage: DELETE_USAGE })?;
    Ok(Command::Delete { index })
}

const FIND_PREFIXES: &[Prefix] = &[
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_ADDRESS,
    PREFIX_TAG,
    PREFIX_MEMO,
    PREFIX_BOOKING_DATE,
    PREFIX_BOOKING_PROPERTY,
];

/// Declared order doubles as the validation order of `parse_criteria`.
const FIND_CRITERIA: &[(Prefix, SearchType)] = &[
    (PREFIX_NAME, SearchType::Name),
    (PREFIX_PHONE, SearchType::Phone),
    (PREFIX_EMAIL, SearchType::Email),
    (PREFIX_ADDRESS, SearchType::Address),
    (PREFIX_TAG, SearchType::Tag),
    (PREFIX_MEMO, SearchType::Memo),
    (PREFIX_BOOKING_DATE, SearchType::BookingDate),
    (PREFIX_BOOKING_PROPERTY, SearchType::BookingProperty),
];

pub fn parse_find(args: &str) -> Result<Command, ParseError> {
    parse_criteria(args).map(Command::Find)
}

/// Parses a `find`-style argument string into search criteria.
///
/// A bare keyword preamble is a name search; otherwise the preamble must be
/// empty and every present criterion must carry at least one keyword.
/// Keywords are split on whitespace and collected across repeated prefixes.
pub fn parse_criteria(args: &str) -> Result<SearchCriteria, ParseError> {
    let map = tokenize(args, FIND_PREFIXES);
    let mut criteria = SearchCriteria::new();

    if FIND_PREFIXES.iter().all(|&p| map.value(p).is_none()) {
        let keywords = split_keywords(map.preamble());
        if keywords.is_empty() {
            return Err(ParseError::InvalidFormat { usage: FIND_USAGE });
        }
        criteria.insert(SearchType::Name, keywords);
        return Ok(criteria);
    }

    if !map.preamble().is_empty() {
        return Err(ParseError::InvalidFormat { usage: FIND_USAGE });
    }

    for &(prefix, search_type) in FIND_CRITERIA {
        let mut keywords = Vec::new();
        for value in map.all_values(prefix) {
            let split = split_keywords(value);
            if split.is_empty() {
                return Err(ParseError::InvalidFormat { usage: FIND_USAGE });
            }
            keywords.extend(split);
        }
        if !keywords.is_empty() {
            criteria.insert(search_type, keywords);
        }
    }

    Ok(criteria)
}

fn split_keywords(value: &str) -> Vec<String> {
    value.split_whitespace().map(str::to_string).collect()
}

const TAG_PREFIXES: &[Prefix] = &[PREFIX_TAG, PREFIX_BOOKING_TAG];

pub fn parse_tag(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(args, TAG_PREFIXES);
    if TAG_PREFIXES.iter().all(|&p| map.value(p).is_none()) {
        return Err(ParseError::InvalidFormat { usage: TAG_USAGE });
    }
    let index =
        parse_index(map.preamble()).ok_or(ParseError::InvalidIndex { usage: TAG_USAGE })?;
    let tags = parse_tags(map.all_values(PREFIX_TAG))?;
    let booking_tags = parse_booking_tags(map.all_values(PREFIX_BOOKING_TAG))?;
    Ok(Command::Tag {
        index,
        tags,
        booking_tags,
    })
}

const UNTAG_GRAMMAR: CommandGrammar = CommandGrammar {
    exactly_one_of: &[&[PREFIX_BOOKING_TAG, PREFIX_TAG]],
    singular: &[PREFIX_BOOKING_TAG, PREFIX_TAG],
    ..CommandGrammar::new(UNTAG_USAGE)
};

pub fn parse_untag(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(args, TAG_PREFIXES);
    UNTAG_GRAMMAR.check(&map)?;
    let index =
        parse_index(map.preamble()).ok_or(ParseError::InvalidIndex { usage: UNTAG_USAGE })?;
    let tag = map.value(PREFIX_TAG).map(Tag::parse).transpose()?;
    let booking_tag = map
        .value(PREFIX_BOOKING_TAG)
        .map(BookingTag::parse)
        .transpose()?;
    Ok(Command::Untag {
        index,
        tag,
        booking_tag,
    })
}

pub fn parse_request(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(args, &[PREFIX_REQUEST]);
    if map.value(PREFIX_REQUEST).is_none() {
        return Err(ParseError::InvalidFormat { usage: REQUEST_USAGE });
    }
    let index =
        parse_index(map.preamble()).ok_or(ParseError::InvalidIndex { usage: REQUEST_USAGE })?;
    let requests = parse_requests(map.all_values(PREFIX_REQUEST))?;
    Ok(Command::Request { index, requests })
}

const MEMO_GRAMMAR: CommandGrammar = CommandGrammar {
    required: &[PREFIX_MEMO],
    singular: &[PREFIX_MEMO],
    ..CommandGrammar::new(MEMO_USAGE)
};

pub fn parse_memo(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(args, &[PREFIX_MEMO]);
    MEMO_GRAMMAR.check(&map)?;
    let index =
        parse_index(map.preamble()).ok_or(ParseError::InvalidIndex { usage: MEMO_USAGE })?;
    let memo = Memo::parse(map.value(PREFIX_MEMO).unwrap_or_default())?;
    Ok(Command::Memo { index, memo })
}
