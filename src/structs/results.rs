use serde::{Deserialize, Serialize};

/// A single web-search result, in the form the provider returned it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultItem {
    pub url: String,
    pub title: String,
    /// Raw date representation, reformatted only at display time.
    pub published_date: String,
    /// Full text snippet.
    pub content: String,
}

/// The outcome of one search dispatch.
///
/// `results` preserves provider order, which doubles as display order.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResultItem>,
    /// Number of provider queries executed to produce `results`.
    pub operation_count: Option<u32>,
}

/// Distinguishes "no result set yet" from "a result set with zero entries".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultsPhase {
    Searching,
    Empty,
    Populated,
}

impl ResultsPhase {
    pub fn of(results: Option<&[SearchResultItem]>) -> Self {
        match results {
            None => ResultsPhase::Searching,
            Some([]) => ResultsPhase::Empty,
            Some(_) => ResultsPhase::Populated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str) -> SearchResultItem {
        SearchResultItem {
            url: format!("https://example.com/{title}"),
            title: title.to_string(),
            published_date: String::new(),
            content: String::new(),
        }
    }

    #[test]
    fn test_absent_results_are_searching() {
        assert_eq!(ResultsPhase::of(None), ResultsPhase::Searching);
    }

    #[test]
    fn test_present_empty_results_are_not_searching() {
        assert_eq!(ResultsPhase::of(Some(&[])), ResultsPhase::Empty);
    }

    #[test]
    fn test_populated_results() {
        let items = vec![item("a"), item("b")];
        assert_eq!(ResultsPhase::of(Some(&items)), ResultsPhase::Populated);
    }
}
