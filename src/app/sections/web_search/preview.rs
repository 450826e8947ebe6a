use leptos::{IntoView, component, prelude::*, view};

use crate::{
    format::{format_date, host_name_of, truncate_content},
    structs::SearchResultItem,
};

/// Detail card for the result currently under the pointer.
#[component]
pub(crate) fn PreviewPane(item: SearchResultItem) -> impl IntoView {
    view! {
        <div class = "preview-card">
            <div class = "preview-origin">
                <span>{host_name_of(&item.url)}</span>
                <span>{format_date(&item.published_date)}</span>
            </div>
            <h3 class = "preview-title clamp-two-lines">{item.title}</h3>
            <p class = "preview-content clamp-two-lines">{truncate_content(&item.content)}</p>
        </div>
    }
}
