use leptos::{IntoView, component, html::Input, prelude::*, view};

use crate::app::components::build_classes_string;

/// A labelled text input backed by a [NodeRef], read on form submission.
#[component]
pub(crate) fn QueryBox(
    name: &'static str,
    label: &'static str,
    value: String,
    node_ref: NodeRef<Input>,
) -> impl IntoView {
    view! {
        <label class = "panel-item" for = {name}>
            {label}
            <input class = "panel-item query-input" name = name id = name type = "text" value = value
                placeholder = "Separate multiple queries with ;" node_ref = node_ref />
        </label>
    }
}

#[component]
pub(crate) fn SubmitBox(
    label: &'static str,
    #[prop(optional)] classes: Vec<&'static str>,
) -> impl IntoView {
    let class = build_classes_string("panel-item", classes);
    view! {
        <input type = "submit" class = class value = label />
    }
}
