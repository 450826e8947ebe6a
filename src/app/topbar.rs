//! Appears at the top of each page.
use crate::app::TopLevelContext;
use leptos::{IntoView, component, prelude::*, view};

#[component]
pub(crate) fn TopBar() -> impl IntoView {
    let client_side_data = use_context::<TopLevelContext>()
        .expect("TopLevelContext should be provided, this should never fail.")
        .client_side_data;

    let console_link = client_side_data
        .link_to_provider_console
        .map(|link| view! {<a href = {link.clone()}><span>"Provider Console"</span></a>});
    let provider_name = client_side_data.provider_name;

    view! {
        <div class = "topbar">
            <div class = "title-box">
                <div class = "title">"Search Viewer"</div>
                <div class = "subtitle">{provider_name}</div>
            </div>
            <div class = "menu">
                <a href = "/"><span>Home</span></a>
                {console_link}
            </div>
        </div>
    }
}
