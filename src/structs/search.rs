use serde::{Deserialize, Serialize};

/// A search job as submitted by the UI.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// The queries to run. Each query is one provider operation.
    pub queries: Vec<String>,
}

impl SearchRequest {
    /// Splits the raw contents of the search box into individual queries.
    ///
    /// Queries are separated by ";". Blank fragments are discarded.
    pub fn parse(raw: &str) -> Self {
        Self {
            queries: raw
                .split(';')
                .map(str::trim)
                .filter(|query| !query.is_empty())
                .map(ToOwned::to_owned)
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_query() {
        let request = SearchRequest::parse("who is the ceo of tavily?");
        assert_eq!(request.queries, vec!["who is the ceo of tavily?"]);
    }

    #[test]
    fn test_parse_multiple_queries() {
        let request = SearchRequest::parse("rust web frameworks; leptos ssr ");
        assert_eq!(request.queries, vec!["rust web frameworks", "leptos ssr"]);
    }

    #[test]
    fn test_parse_discards_blank_fragments() {
        let request = SearchRequest::parse(" ; ;   ");
        assert!(request.is_empty());
    }
}
