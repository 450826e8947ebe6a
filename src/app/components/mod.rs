//! Defines Leptos components which are used throughout the rest of the [app] module.

mod control_box;
mod display_errors;
mod panel;
mod section;

pub(crate) use control_box::{QueryBox, SubmitBox};
pub(crate) use display_errors::DisplayErrors;
pub(crate) use panel::Panel;
pub(crate) use section::Section;

pub(crate) fn build_classes_string(main: &'static str, mut classes: Vec<&'static str>) -> String {
    classes.push(main);
    classes
        .into_iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
