use crate::search::predicate::SearchType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The criteria map was empty; a predicate over nothing is a caller bug.
    #[error("At least one search criterion must be provided")]
    EmptyCriteria,
    /// A criterion carried no keywords or an empty keyword. Contract
    /// violation by the caller, never a "no match" result.
    #[error("Search keywords for '{search_type}' must be non-empty")]
    EmptyKeyword { search_type: SearchType },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        SearchError::EmptyCriteria,
        "At least one search criterion must be provided"
    )]
    #[case(
        SearchError::EmptyKeyword { search_type: SearchType::BookingDate },
        "Search keywords for 'booking-date' must be non-empty"
    )]
    fn search_error_display(#[case] error: SearchError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn search_error_implements_std_error() {
        let error: &dyn std::error::Error = &SearchError::EmptyCriteria;
        assert!(error.source().is_none());
    }
}
