use crate::model::field::FieldKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// The normalized value failed its kind's format predicate.
    #[error("{}", .0.constraints())]
    Invalid(FieldKind),
    /// The same value was supplied more than once for a field that rejects repeats.
    #[error("Duplicate {} supplied: {value}", .kind.as_str())]
    Duplicate { kind: FieldKind, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TagListError {
    #[error("tag already exists in the list")]
    Duplicate,
    #[error("tag does not exist in the list")]
    NotFound,
}
