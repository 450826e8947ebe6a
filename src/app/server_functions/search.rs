use crate::structs::{SearchRequest, SearchResponse};
use cfg_if::cfg_if;
use leptos::prelude::*;
use tracing::instrument;

cfg_if! {
    if #[cfg(feature = "ssr")] {
        use crate::structs::ServerSideData;
        use tracing::debug;
    }
}

#[server]
#[instrument(skip_all, err(level = "warn"))]
pub async fn run_web_search(request: SearchRequest) -> Result<SearchResponse, ServerFnError> {
    debug!("Running web search for {} query(s)", request.queries.len());

    let search_client = use_context::<ServerSideData>()
        .expect("ServerSideData should be provided, this should never fail.")
        .search_client;

    let response = search_client.search(&request).await?;

    debug!("Search produced {} result(s)", response.results.len());

    Ok(response)
}
