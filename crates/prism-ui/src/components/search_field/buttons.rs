//! Clear and submit sub-components of the search field.

use std::rc::Rc;

use dioxus::prelude::*;

use super::core::FocusTarget;
use super::{use_search_field, SubmitButtonLocation};
use crate::components::button::{Button, ButtonVariant, IconButton};

/// Clear control for the search field.
///
/// Renders nothing while the value is empty. Clearing routes through the
/// context's clear handler, which blanks the value, fires the consumer's
/// clear callback, and moves focus back to the input.
#[component]
pub fn SearchFieldClearButton() -> Element {
    let ctx = use_search_field();
    let value = ctx.value;
    let on_clear = ctx.on_clear;

    if value().is_empty() {
        return rsx! {};
    }

    rsx! {
        IconButton {
            onclick: move |()| on_clear.call(()),
            aria_label: ctx.screen_reader_text.clear_button.clone(),
            class: "prism-searchfield__clear".to_string(),
            "{ctx.icons.clear}"
        }
    }
}

/// Properties for the [`SearchFieldSubmitButton`] component.
#[derive(Clone, PartialEq, Props)]
pub struct SearchFieldSubmitButtonProps {
    /// Whether the control renders inside the field box as an icon button
    /// or outside it as a labeled button.
    #[props(default)]
    pub submit_button_location: SubmitButtonLocation,
}

/// Submit control for the search field.
///
/// Sources its label, icon, and focus wiring from the context; its only
/// input is the placement flag. After a submit the coordinator requests
/// focus here, which this component consumes.
#[component]
pub fn SearchFieldSubmitButton(props: SearchFieldSubmitButtonProps) -> Element {
    let ctx = use_search_field();
    let mut focus_request = ctx.focus_request;
    let mut mounted = use_signal(|| None::<Rc<MountedData>>);

    use_effect(move || {
        if focus_request() == Some(FocusTarget::SubmitButton) {
            if let Some(element) = mounted.peek().clone() {
                focus_request.set(None);
                spawn(async move {
                    let _ = element.set_focus(true).await;
                });
            }
        }
    });

    match props.submit_button_location {
        SubmitButtonLocation::Internal => rsx! {
            button {
                r#type: "submit",
                class: "{SubmitButtonLocation::Internal.class()}",
                onmounted: move |event: MountedEvent| mounted.set(Some(event.data())),
                span { class: "prism-searchfield__submit-icon", "{ctx.icons.submit}" }
                span { class: "sr-only", "{ctx.screen_reader_text.submit_button}" }
            }
        },
        SubmitButtonLocation::External => rsx! {
            Button {
                variant: ButtonVariant::Primary,
                button_type: "submit".to_string(),
                class: SubmitButtonLocation::External.class().to_string(),
                onmounted: move |event: MountedEvent| mounted.set(Some(event.data())),
                span { "{ctx.screen_reader_text.submit_button}" }
            }
        },
    }
}
