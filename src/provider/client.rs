use crate::{
    provider::SearchError,
    structs::{SearchRequest, SearchResponse, SearchResultItem},
};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, time::Duration};
use tracing::debug;

/// Encapsulates all run-time settings which are needed by the search client.
#[derive(Clone, Debug)]
pub struct ProviderSettings {
    pub base_url: String,
    pub api_key: String,
    pub max_results: usize,
    pub timeout_ms: u64,
}

pub struct SearchClient {
    client: Client,
    settings: ProviderSettings,
}

#[derive(Serialize)]
struct WireRequest<'a> {
    api_key: &'a str,
    query: &'a str,
    max_results: usize,
}

#[derive(Deserialize)]
struct WireResponse {
    #[serde(default)]
    results: Vec<WireResult>,
}

/// One result as the provider returns it. Fields the provider omits degrade
/// to empty strings rather than failing the whole response.
#[derive(Deserialize)]
struct WireResult {
    url: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    published_date: String,
    #[serde(default)]
    content: String,
}

impl From<WireResult> for SearchResultItem {
    fn from(wire: WireResult) -> Self {
        Self {
            url: wire.url,
            title: wire.title,
            published_date: wire.published_date,
            content: wire.content,
        }
    }
}

impl SearchClient {
    pub fn new(settings: ProviderSettings) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(settings.timeout_ms))
            .build()?;
        Ok(Self { client, settings })
    }

    /// Runs one provider operation per query, concatenating the batches in
    /// query order.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
        if request.queries.is_empty() {
            return Err(SearchError::EmptyRequest);
        }

        let mut batches = Vec::with_capacity(request.queries.len());
        for query in &request.queries {
            batches.push(self.search_one(query).await?);
        }

        Ok(SearchResponse {
            results: dedup_by_url(batches.into_iter().flatten()),
            operation_count: Some(request.queries.len() as u32),
        })
    }

    async fn search_one(&self, query: &str) -> Result<Vec<SearchResultItem>, SearchError> {
        debug!("Querying provider: {query}");

        let response = self
            .client
            .post(format!("{}/search", self.settings.base_url))
            .json(&WireRequest {
                api_key: &self.settings.api_key,
                query,
                max_results: self.settings.max_results,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::ProviderStatus(status.as_u16()));
        }

        let wire = response
            .json::<WireResponse>()
            .await
            .map_err(|e| SearchError::MalformedResponse(e.to_string()))?;

        Ok(wire.results.into_iter().map(SearchResultItem::from).collect())
    }
}

/// Keeps the first occurrence of each URL, preserving order otherwise.
fn dedup_by_url(results: impl IntoIterator<Item = SearchResultItem>) -> Vec<SearchResultItem> {
    let mut seen = HashSet::new();
    results
        .into_iter()
        .filter(|item| seen.insert(item.url.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(url: &str, title: &str) -> SearchResultItem {
        SearchResultItem {
            url: url.to_string(),
            title: title.to_string(),
            published_date: String::new(),
            content: String::new(),
        }
    }

    #[test]
    fn test_wire_response_parses_full_result() {
        let wire: WireResponse = serde_json::from_str(
            r#"{
                "results": [
                    {
                        "url": "https://example.com",
                        "title": "Example",
                        "published_date": "2025-03-05",
                        "content": "An example snippet."
                    }
                ]
            }"#,
        )
        .expect("Response should parse, this should never fail.");

        let items = wire
            .results
            .into_iter()
            .map(SearchResultItem::from)
            .collect::<Vec<_>>();
        assert_eq!(items, vec![SearchResultItem {
            url: "https://example.com".to_string(),
            title: "Example".to_string(),
            published_date: "2025-03-05".to_string(),
            content: "An example snippet.".to_string(),
        }]);
    }

    #[test]
    fn test_wire_response_tolerates_missing_fields() {
        let wire: WireResponse = serde_json::from_str(
            r#"{ "results": [ { "url": "https://example.com" } ] }"#,
        )
        .expect("Response should parse, this should never fail.");

        assert_eq!(wire.results.len(), 1);
        assert!(wire.results[0].title.is_empty());
        assert!(wire.results[0].published_date.is_empty());
    }

    #[test]
    fn test_wire_response_tolerates_missing_results() {
        let wire: WireResponse = serde_json::from_str("{}")
            .expect("Response should parse, this should never fail.");
        assert!(wire.results.is_empty());
    }

    #[test]
    fn test_dedup_by_url_keeps_first_occurrence() {
        let deduped = dedup_by_url([
            item("https://a.com", "First"),
            item("https://b.com", "Second"),
            item("https://a.com", "Duplicate"),
        ]);

        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].title, "First");
        assert_eq!(deduped[1].title, "Second");
    }
}
