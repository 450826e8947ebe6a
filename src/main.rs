#![recursion_limit = "256"]

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::Router;
    use clap::{Args, Parser};
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use search_viewer::{
        App,
        provider::{ProviderSettings, SearchClient},
        shell,
        structs::{ClientSideData, DefaultData, ServerSideData},
    };
    use std::sync::Arc;
    use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt};

    /// [clap] derived struct to parse command line arguments.
    #[derive(Parser)]
    #[clap(author, version, about)]
    struct Cli {
        #[clap(flatten)]
        provider: ProviderOpts,

        #[clap(flatten)]
        default_data: DefaultData,

        /// Label shown under the page title, identifying the search provider.
        #[clap(long, default_value = "Tavily")]
        provider_name: String,

        /// If set, then the top bar links to the provider's console at the URL specified.
        #[clap(long)]
        link_to_provider_console: Option<String>,
    }

    /// Connection settings for the hosted search API.
    #[derive(Args)]
    struct ProviderOpts {
        /// Base URL of the search API.
        #[clap(long, default_value = "https://api.tavily.com")]
        provider_url: String,

        /// API key for the search API.
        #[clap(long, env = "SEARCH_API_KEY")]
        api_key: String,

        /// The maximum number of results each query may return.
        #[clap(long, default_value = "10")]
        max_results: usize,

        /// Timeout applied to each provider request, in milliseconds.
        #[clap(long, default_value = "10000")]
        timeout_ms: u64,
    }

    let args = Cli::parse();

    let stdout_tracer = tracing_subscriber::fmt::layer();

    // This filter is applied to the stdout tracer
    let log_filter = EnvFilter::from_default_env();

    let subscriber =
        tracing_subscriber::Registry::default().with(stdout_tracer.with_filter(log_filter));

    //  This is only called once, so will never panic
    tracing::subscriber::set_global_default(subscriber)
        .expect("tracing::subscriber::set_global_default should only be called once");

    let search_client = Arc::new(SearchClient::new(ProviderSettings {
        base_url: args.provider.provider_url,
        api_key: args.provider.api_key,
        max_results: args.provider.max_results,
        timeout_ms: args.provider.timeout_ms,
    })?);

    let client_side_data = ClientSideData {
        default_data: args.default_data,
        provider_name: args.provider_name,
        link_to_provider_console: args.link_to_provider_console,
    };
    let server_side_data = ServerSideData { search_client };

    let conf = get_configuration(None)?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let client_side_data = client_side_data.clone();
                let server_side_data = server_side_data.clone();
                move || {
                    provide_context(client_side_data.clone());
                    provide_context(server_side_data.clone());
                }
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    tracing::info!("Listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // A binary exists only for the server; the client entry point is [search_viewer::hydrate].
}
