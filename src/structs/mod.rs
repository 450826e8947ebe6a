//! Defines structs shared between the client and server halves of the app.

mod results;
mod search;

use cfg_if::cfg_if;
use serde::{Deserialize, Serialize};

pub use results::{ResultsPhase, SearchResponse, SearchResultItem};
pub use search::SearchRequest;

/// Contains the settings defined in the CLI used as default values in the UI's inputs.
#[derive(Default, Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "ssr", derive(Args))]
pub struct DefaultData {
    /// The query placed in the search box when the page first loads.
    #[cfg_attr(feature = "ssr", clap(long))]
    pub(crate) query: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClientSideData {
    pub default_data: DefaultData,
    pub provider_name: String,
    pub link_to_provider_console: Option<String>,
}

cfg_if! {
    if #[cfg(feature = "ssr")] {
        use clap::Args;
        use std::sync::Arc;
        use crate::provider::SearchClient;

        /// Shared state handed to server functions on each request.
        #[derive(Clone)]
        pub struct ServerSideData {
            pub search_client: Arc<SearchClient>,
        }
    }
}
