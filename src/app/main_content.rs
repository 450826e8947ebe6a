use leptos::prelude::*;

use crate::app::{
    sections::{QuerySection, WebSearchSection},
    server_functions::RunWebSearch,
};

/// This struct enables a degree of type-checking for the [use_context]/[provide_context] functions.
/// Any component making use of the following fields should call `use_context::<MainLevelContext>()`
/// and select the desired field.
#[derive(Clone)]
pub(crate) struct MainLevelContext {
    pub(crate) run_web_search: ServerAction<RunWebSearch>,
}

/// Creates the body of the page below the [TopBar].
///
/// Creates and provides the [ServerAction] through which searches are dispatched.
#[component]
pub(crate) fn Main() -> impl IntoView {
    provide_context(MainLevelContext {
        run_web_search: ServerAction::new(),
    });

    view! {
        <div class = "main">
            <QuerySection />
            <WebSearchSection />
        </div>
    }
}
