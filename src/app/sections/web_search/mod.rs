mod display;
mod preview;
mod results_panel;

use leptos::{IntoView, component, logging, prelude::*, view};

use crate::app::{components::DisplayErrors, main_content::MainLevelContext};
use results_panel::SearchResultsPanel;

/// Derives the panel's reactive inputs from the search [ServerAction]:
/// - action pending: the result set is absent ("search in progress"),
/// - action finished with `Ok`: the result set is present, possibly empty,
/// - action finished with `Err`: the failure is logged and displayed, and the
///   panel keeps an absent result set for that dispatch.
///
/// The panel mounts on the first dispatch and stays mounted thereafter, so
/// its view state survives subsequent dispatches.
#[component]
pub(crate) fn WebSearchSection() -> impl IntoView {
    let run_web_search = use_context::<MainLevelContext>()
        .expect("MainLevelContext should be provided, this should never fail.")
        .run_web_search;

    // The last completed response, with failures logged and discarded.
    let response = Signal::derive(move || {
        run_web_search
            .value()
            .get()
            .and_then(|response| response.inspect_err(|e| logging::warn!("{e}")).ok())
    });

    let results = Signal::derive(move || {
        if run_web_search.pending().get() {
            None
        } else {
            response.get().map(|response| response.results)
        }
    });
    let operation_count =
        Signal::derive(move || response.get().and_then(|response| response.operation_count));

    let searched = Signal::derive(move || {
        run_web_search.pending().get() || run_web_search.value().get().is_some()
    });

    view! {
        {move || searched.get().then(|| view!{ <SearchResultsPanel results operation_count /> })}
        {move || run_web_search.value().get().map(|result| view! {
            <ErrorBoundary fallback = |errors| view!{ <DisplayErrors errors /> }>
                {result.map(|_| ())}
            </ErrorBoundary>
        })}
    }
}
