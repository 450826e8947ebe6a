use leptos::{IntoView, component, html::Input, prelude::*, view};

use crate::{
    app::{
        TopLevelContext,
        components::{Panel, QueryBox, Section, SubmitBox},
        main_content::MainLevelContext,
        server_functions::RunWebSearch,
    },
    structs::SearchRequest,
};

#[component]
pub(crate) fn QuerySection() -> impl IntoView {
    let default_data = use_context::<TopLevelContext>()
        .expect("TopLevelContext should be provided, this should never fail.")
        .client_side_data
        .default_data;

    let main_context = use_context::<MainLevelContext>()
        .expect("MainLevelContext should be provided, this should never fail.");
    let run_web_search = main_context.run_web_search;

    let query_ref = NodeRef::<Input>::new();

    let on_submit = move || {
        let raw = query_ref
            .get()
            .map(|input| input.value())
            .unwrap_or_default();

        let request = SearchRequest::parse(&raw);
        if !request.is_empty() {
            run_web_search.dispatch(RunWebSearch { request });
        }
    };

    view! {
        <form on:submit = move |e|{ e.prevent_default(); on_submit() }>
            <Section name = "Search">
                <Panel>
                    <QueryBox name = "query" label = "Query:" value = {default_data.query.unwrap_or_default()} node_ref = query_ref />
                    <SubmitBox label = "Search" classes = vec!["search-button"] />
                </Panel>
            </Section>
        </form>
    }
}
