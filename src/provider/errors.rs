use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("The search request contains no queries.")]
    EmptyRequest,
    #[error("The search provider returned status code {0}.")]
    ProviderStatus(u16),
    #[error("Could not reach the search provider: {0}")]
    Transport(String),
    #[error("Could not parse the provider response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for SearchError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.to_string())
    }
}
