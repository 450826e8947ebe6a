use crate::app::components::build_classes_string;
use leptos::{IntoView, component, prelude::*, view};

/// A grid container for laying out the items of a [Section].
#[component]
pub(crate) fn Panel(
    #[prop(optional)] classes: Vec<&'static str>,
    children: Children,
) -> impl IntoView {
    let class = build_classes_string("panel", classes);
    view! {
        <div class = class>
            {children()}
        </div>
    }
}
