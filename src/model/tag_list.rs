//! An ordered tag collection that rejects duplicates.
//!
//! Uniqueness violations and missing elements are explicit error variants
//! rather than silent no-ops; insertion order is preserved.

use serde::{Deserialize, Serialize};

use crate::model::error::TagListError;
use crate::model::field::Tag;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Tag>", into = "Vec<Tag>")]
pub struct TagList {
    items: Vec<Tag>,
}

impl TagList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, tag: &Tag) -> bool {
        self.items.contains(tag)
    }

    /// Appends `tag`, failing when an equal tag is already present.
    pub fn add(&mut self, tag: Tag) -> Result<(), TagListError> {
        if self.contains(&tag) {
            return Err(TagListError::Duplicate);
        }
        self.items.push(tag);
        Ok(())
    }

    /// Removes the tag equal to `tag`, failing when none is present.
    pub fn remove(&mut self, tag: &Tag) -> Result<(), TagListError> {
        let position = self
            .items
            .iter()
            .position(|t| t == tag)
            .ok_or(TagListError::NotFound)?;
        self.items.remove(position);
        Ok(())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl TryFrom<Vec<Tag>> for TagList {
    type Error = TagListError;

    fn try_from(tags: Vec<Tag>) -> Result<Self, TagListError> {
        let mut list = TagList::new();
        for tag in tags {
            list.add(tag)?;
        }
        Ok(list)
    }
}

impl From<TagList> for Vec<Tag> {
    fn from(list: TagList) -> Vec<Tag> {
        list.items
    }
}

impl<'a> IntoIterator for &'a TagList {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(name: &str) -> Tag {
        Tag::parse(name).unwrap()
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut list = TagList::new();
        list.add(tag("vip")).unwrap();
        list.add(tag("friend")).unwrap();
        let names: Vec<&str> = list.iter().map(Tag::as_str).collect();
        assert_eq!(names, vec!["vip", "friend"]);
    }

    #[test]
    fn add_duplicate_fails_and_leaves_list_unchanged() {
        let mut list = TagList::new();
        list.add(tag("vip")).unwrap();
        let result = list.add(tag("vip"));
        assert_eq!(result, Err(TagListError::Duplicate));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn remove_existing_tag() {
        let mut list = TagList::new();
        list.add(tag("vip")).unwrap();
        list.remove(&tag("vip")).unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn remove_missing_tag_fails() {
        let mut list = TagList::new();
        list.add(tag("vip")).unwrap();
        assert_eq!(list.remove(&tag("friend")), Err(TagListError::NotFound));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn try_from_rejects_duplicates() {
        let result = TagList::try_from(vec![tag("vip"), tag("vip")]);
        assert_eq!(result, Err(TagListError::Duplicate));
    }

    #[test]
    fn serde_round_trips_as_vector() {
        let list = TagList::try_from(vec![tag("vip"), tag("friend")]).unwrap();
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"["vip","friend"]"#);
        let back: TagList = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list);
    }

    #[test]
    fn deserialization_rejects_duplicates() {
        let result: Result<TagList, _> = serde_json::from_str(r#"["vip","vip"]"#);
        assert!(result.is_err());
    }
}
