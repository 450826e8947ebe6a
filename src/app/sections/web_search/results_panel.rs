use leptos::{IntoView, component, either::Either, prelude::*, view};

use crate::{
    app::sections::web_search::{
        display::{OverflowControl, header_label, preview_item, visible_results},
        preview::PreviewPane,
    },
    structs::SearchResultItem,
};

/// A collapsible panel of web-search results with a hover preview pane.
///
/// All three pieces of view state live here and nowhere else. They are reset
/// when the panel unmounts and kept when the props change, so a panel
/// expanded during a search stays expanded when the results land.
#[component]
pub(crate) fn SearchResultsPanel(
    results: Signal<Option<Vec<SearchResultItem>>>,
    operation_count: Signal<Option<u32>>,
) -> impl IntoView {
    let (panel_expanded, set_panel_expanded) = signal(false);
    let (hovered_index, set_hovered_index) = signal::<Option<usize>>(None);
    let (show_all_results, set_show_all_results) = signal(false);

    view! {
        <div class = "web-search">
            <div class = "web-search-header" on:click = move |_| set_panel_expanded.update(|expanded| *expanded = !*expanded)>
                <span class = "web-search-label">
                    {move || header_label(results.get().as_deref(), operation_count.get())}
                </span>
                {move || match results.get() {
                    None => Either::Left(view! { <div class = "spinner"></div> }),
                    Some(_) => {
                        let chevron = if panel_expanded.get() { "chevron chevron-up" } else { "chevron chevron-down" };
                        Either::Right(view! { <div class = {chevron}></div> })
                    }
                }}
            </div>
            {move || {
                panel_expanded
                    .get()
                    .then(|| results.get())
                    .flatten()
                    .map(|items| view! {
                        <PanelBody items show_all_results set_show_all_results hovered_index set_hovered_index />
                    })
            }}
        </div>
    }
}

/// The two-pane body: the result list on the left, the preview of the hovered
/// item on the right.
#[component]
fn PanelBody(
    items: Vec<SearchResultItem>,
    show_all_results: ReadSignal<bool>,
    set_show_all_results: WriteSignal<bool>,
    hovered_index: ReadSignal<Option<usize>>,
    set_hovered_index: WriteSignal<Option<usize>>,
) -> impl IntoView {
    view! {
        <div class = "web-search-body">
            <div class = "result-list">
                <ResultList items = items.clone() show_all_results set_show_all_results set_hovered_index />
            </div>
            <div class = "result-preview">
                {
                    let items = items.clone();
                    move || preview_item(&items, hovered_index.get())
                        .cloned()
                        .map(|item| view! { <PreviewPane item /> })
                }
            </div>
        </div>
    }
}

#[component]
fn ResultList(
    items: Vec<SearchResultItem>,
    show_all_results: ReadSignal<bool>,
    set_show_all_results: WriteSignal<bool>,
    set_hovered_index: WriteSignal<Option<usize>>,
) -> impl IntoView {
    if items.is_empty() {
        return Either::Left(view! { <div class = "no-results">"No search results"</div> });
    }

    let total = items.len();
    Either::Right(view! {
        <ul class = "results">
            {
                let items = items.clone();
                move || visible_results(&items, show_all_results.get())
                    .to_vec()
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| view! { <ResultItem index item set_hovered_index /> })
                    .collect::<Vec<_>>()
            }
        </ul>
        {move || OverflowControl::of(total, show_all_results.get()).map(|control| {
            let show_all = matches!(control, OverflowControl::ShowAll { .. });
            view! {
                <input type = "button" class = "overflow-button" value = {control.label()}
                    on:click = move |_| set_show_all_results.set(show_all) />
            }
        })}
    })
}

#[component]
fn ResultItem(
    index: usize,
    item: SearchResultItem,
    set_hovered_index: WriteSignal<Option<usize>>,
) -> impl IntoView {
    view! {
        <li class = "result-item"
            on:mouseenter = move |_| set_hovered_index.set(Some(index))
            on:mouseleave = move |_| set_hovered_index.set(None)
        >
            <a href = {item.url} target = "_blank" rel = "noopener noreferrer">
                {format!("{}. {}", index + 1, item.title)}
            </a>
        </li>
    }
}
