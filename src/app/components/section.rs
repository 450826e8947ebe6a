//! A titled box, stacked vertically, with a header and content space.
use crate::app::components::build_classes_string;
use leptos::{IntoView, component, prelude::*, view};

#[component]
pub(crate) fn Section(
    name: &'static str,
    #[prop(optional)] classes: Vec<&'static str>,
    children: Children,
) -> impl IntoView {
    let class = build_classes_string("section", classes);
    view! {
        <div class = class>
            <div class = "name">{name}</div>
            <div class = "content">
                {children()}
            </div>
        </div>
    }
}
