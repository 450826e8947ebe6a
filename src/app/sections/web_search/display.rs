//! Derivations from the raw inputs of [super::results_panel::SearchResultsPanel].

use strum::Display;

use crate::structs::{ResultsPhase, SearchResultItem};

/// Number of results shown while the list is collapsed.
pub(crate) const COLLAPSED_RESULT_COUNT: usize = 5;

#[derive(Display)]
enum HeaderStatus {
    #[strum(to_string = "Conducting web search")]
    Searching,
    #[strum(to_string = "Web search complete")]
    Complete,
}

/// The header row label. A query count is appended only once the results are
/// in, and only when more than one query was executed.
pub(crate) fn header_label(
    results: Option<&[SearchResultItem]>,
    operation_count: Option<u32>,
) -> String {
    match ResultsPhase::of(results) {
        ResultsPhase::Searching => HeaderStatus::Searching.to_string(),
        ResultsPhase::Empty | ResultsPhase::Populated => {
            let mut label = HeaderStatus::Complete.to_string();
            if let Some(count) = operation_count.filter(|&count| count > 1) {
                label.push_str(&format!(" ({count} queries)"));
            }
            label
        }
    }
}

/// The slice of `items` currently rendered in the left pane.
///
/// Truncation takes a prefix, so an item's index within this slice equals its
/// index in `items`.
pub(crate) fn visible_results(items: &[SearchResultItem], show_all: bool) -> &[SearchResultItem] {
    if show_all {
        items
    } else {
        &items[..items.len().min(COLLAPSED_RESULT_COUNT)]
    }
}

/// The control rendered below the result list, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum OverflowControl {
    ShowAll { total: usize },
    ShowLess,
}

impl OverflowControl {
    pub(crate) fn of(total: usize, show_all: bool) -> Option<Self> {
        if total <= COLLAPSED_RESULT_COUNT {
            None
        } else if show_all {
            Some(OverflowControl::ShowLess)
        } else {
            Some(OverflowControl::ShowAll { total })
        }
    }

    pub(crate) fn label(&self) -> String {
        match self {
            OverflowControl::ShowAll { total } => format!("Show all {total} results"),
            OverflowControl::ShowLess => "Show less".to_string(),
        }
    }
}

/// The item previewed in the right pane. A hovered index which no longer
/// refers to a position inside `items` yields no preview.
pub(crate) fn preview_item(
    items: &[SearchResultItem],
    hovered_index: Option<usize>,
) -> Option<&SearchResultItem> {
    hovered_index.and_then(|index| items.get(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(count: usize) -> Vec<SearchResultItem> {
        (0..count)
            .map(|index| SearchResultItem {
                url: format!("https://example.com/{index}"),
                title: format!("Result {index}"),
                published_date: "2025-03-05".to_string(),
                content: format!("Snippet {index}"),
            })
            .collect()
    }

    #[test]
    fn test_header_label_while_searching() {
        assert_eq!(header_label(None, None), "Conducting web search");
        // The count is only shown once the results are in.
        assert_eq!(header_label(None, Some(3)), "Conducting web search");
    }

    #[test]
    fn test_header_label_complete_without_count() {
        let items = items(2);
        assert_eq!(header_label(Some(&items), None), "Web search complete");
    }

    #[test]
    fn test_header_label_complete_with_single_query() {
        let items = items(2);
        assert_eq!(header_label(Some(&items), Some(1)), "Web search complete");
    }

    #[test]
    fn test_header_label_complete_with_multiple_queries() {
        let items = items(2);
        assert_eq!(
            header_label(Some(&items), Some(3)),
            "Web search complete (3 queries)"
        );
    }

    #[test]
    fn test_visible_results_truncates_to_prefix() {
        let items = items(7);
        let visible = visible_results(&items, false);
        assert_eq!(visible.len(), 5);
        assert_eq!(visible[0].title, "Result 0");
        assert_eq!(visible[4].title, "Result 4");
    }

    #[test]
    fn test_visible_results_shows_all_when_expanded() {
        let items = items(7);
        assert_eq!(visible_results(&items, true).len(), 7);
    }

    #[test]
    fn test_visible_results_short_list_unchanged() {
        let items = items(3);
        assert_eq!(visible_results(&items, false).len(), 3);
        assert_eq!(visible_results(&items, true).len(), 3);
    }

    #[test]
    fn test_overflow_control_absent_for_short_lists() {
        assert_eq!(OverflowControl::of(3, false), None);
        assert_eq!(OverflowControl::of(3, true), None);
        assert_eq!(OverflowControl::of(5, false), None);
    }

    #[test]
    fn test_overflow_control_flips_with_show_all() {
        assert_eq!(
            OverflowControl::of(7, false),
            Some(OverflowControl::ShowAll { total: 7 })
        );
        assert_eq!(OverflowControl::of(7, true), Some(OverflowControl::ShowLess));
    }

    #[test]
    fn test_overflow_control_labels() {
        assert_eq!(
            OverflowControl::ShowAll { total: 7 }.label(),
            "Show all 7 results"
        );
        assert_eq!(OverflowControl::ShowLess.label(), "Show less");
    }

    #[test]
    fn test_preview_item_in_range() {
        let items = items(7);
        let previewed = preview_item(&items, Some(6)).expect("Index 6 should be previewable.");
        assert_eq!(previewed.title, "Result 6");
    }

    #[test]
    fn test_preview_item_suppressed_when_out_of_range() {
        // A shrunken result set no longer containing the hovered index.
        let items = items(3);
        assert!(preview_item(&items, Some(6)).is_none());
    }

    #[test]
    fn test_preview_item_suppressed_without_hover() {
        let items = items(3);
        assert!(preview_item(&items, None).is_none());
    }
}
