//! Label and input sub-components of the search field.

use std::rc::Rc;

use dioxus::prelude::*;

use super::core::FocusTarget;
use super::use_search_field;

/// Properties for the [`SearchFieldLabel`] component.
#[derive(Clone, PartialEq, Props)]
pub struct SearchFieldLabelProps {
    /// Visible label text. When omitted, the coordinator's screen-reader
    /// label is rendered visually hidden instead.
    #[props(default)]
    pub text: Option<String>,
}

/// Label for the search input, bound via the generated input ID.
#[component]
pub fn SearchFieldLabel(props: SearchFieldLabelProps) -> Element {
    let ctx = use_search_field();
    let label_text = props
        .text
        .clone()
        .unwrap_or_else(|| ctx.screen_reader_text.label.clone());

    rsx! {
        label {
            r#for: "{ctx.input_id}",
            class: if props.text.is_some() { "prism-searchfield__label" } else { "prism-searchfield__label sr-only" },
            "{label_text}"
        }
    }
}

/// Properties for the [`SearchFieldInput`] component.
#[derive(Clone, PartialEq, Props)]
pub struct SearchFieldInputProps {
    /// Placeholder text (displayed muted).
    #[props(default)]
    pub placeholder: Option<String>,
}

/// The text input of the search field.
///
/// Reflects the coordinator's value and routes entry, focus, and blur
/// events through the context handlers. Consumes focus requests aimed at
/// the input (a clear action moves focus back here).
#[component]
pub fn SearchFieldInput(props: SearchFieldInputProps) -> Element {
    let ctx = use_search_field();
    let value = ctx.value;
    let on_input = ctx.on_input;
    let on_focus = ctx.on_focus;
    let on_blur = ctx.on_blur;
    let mut focus_request = ctx.focus_request;
    let mut mounted = use_signal(|| None::<Rc<MountedData>>);

    use_effect(move || {
        if focus_request() == Some(FocusTarget::Input) {
            if let Some(element) = mounted.peek().clone() {
                focus_request.set(None);
                spawn(async move {
                    let _ = element.set_focus(true).await;
                });
            }
        }
    });

    rsx! {
        input {
            id: "{ctx.input_id}",
            class: "prism-searchfield__input",
            r#type: "text",
            value: "{value}",
            placeholder: props.placeholder.as_deref().unwrap_or(""),
            onmounted: move |event: MountedEvent| mounted.set(Some(event.data())),
            oninput: move |event: FormEvent| on_input.call(event.value()),
            onfocus: move |event: FocusEvent| on_focus.call(event),
            onblur: move |event: FocusEvent| on_blur.call(event),
        }
    }
}
