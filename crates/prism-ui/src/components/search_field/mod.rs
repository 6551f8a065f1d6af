//! SearchField composite
//!
//! A composable search widget: a coordinator component owning the shared
//! state, and label / input / clear / submit sub-components that read and
//! mutate that state through a statically typed context.
//!
//! # Example
//!
//! ```rust,ignore
//! rsx! {
//!     SearchField {
//!         on_submit: move |query: String| run_search(query),
//!         SearchFieldLabel {}
//!         SearchFieldInput { placeholder: "Search the library...".to_string() }
//!         SearchFieldClearButton {}
//!     }
//! }
//! ```
//!
//! Submit-button placement is an explicit coordinator prop
//! ([`SubmitButtonLocation`]); the coordinator renders the single submit
//! control itself, inside or outside the field box. Children never carry a
//! submit marker, so no tree introspection is needed to place it.

mod buttons;
mod core;
mod input;

pub use buttons::*;
pub use input::*;
pub use self::core::{FocusTarget, SearchFieldCore};

use dioxus::prelude::*;

/// Screen-reader labels for the field and its controls (e.g. for i18n).
#[derive(Clone, PartialEq, Debug)]
pub struct ScreenReaderText {
    /// Label announced for the input itself.
    pub label: String,
    /// Label for the submit control.
    pub submit_button: String,
    /// Label for the clear control.
    pub clear_button: String,
}

impl Default for ScreenReaderText {
    fn default() -> Self {
        Self {
            label: "search".to_string(),
            submit_button: "submit search".to_string(),
            clear_button: "clear search".to_string(),
        }
    }
}

/// Glyphs rendered on the submit and clear controls.
///
/// Icon artwork is a collaborator concern; these are plain text glyphs and
/// consumers substitute their own.
#[derive(Clone, PartialEq, Debug)]
pub struct SearchIcons {
    pub submit: String,
    pub clear: String,
}

impl Default for SearchIcons {
    fn default() -> Self {
        Self {
            submit: "\u{1F50D}".to_string(),
            clear: "\u{00D7}".to_string(),
        }
    }
}

/// Placement of the submit control relative to the field box.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SubmitButtonLocation {
    /// Icon button rendered inside the field box.
    #[default]
    Internal,
    /// Labeled button rendered outside the field box.
    External,
}

impl SubmitButtonLocation {
    /// Returns the CSS class for the submit control at this placement.
    pub fn class(&self) -> &'static str {
        match self {
            SubmitButtonLocation::Internal => "prism-searchfield__submit",
            SubmitButtonLocation::External => "prism-searchfield__submit--external",
        }
    }
}

/// Shared state handle provided by [`SearchField`] to its sub-components.
///
/// Read-only from the perspective of children: every mutation goes through
/// one of the callbacks, which route into the coordinator's
/// [`SearchFieldCore`].
#[derive(Clone)]
pub struct SearchFieldContext {
    /// Generated once per mount; associates the label with the input.
    pub input_id: String,
    pub screen_reader_text: ScreenReaderText,
    pub icons: SearchIcons,
    /// Current text value.
    pub value: Memo<String>,
    /// One user entry event.
    pub on_input: Callback<String>,
    pub on_focus: Callback<FocusEvent>,
    pub on_blur: Callback<FocusEvent>,
    /// Clear action from the clear button.
    pub on_clear: Callback<()>,
    /// Pending focus movement, consumed by the sub-component it targets.
    pub focus_request: Signal<Option<FocusTarget>>,
}

/// Hook to access the search field context from a sub-component.
///
/// Panics if called outside a [`SearchField`] subtree, which is a
/// composition bug in the caller.
pub fn use_search_field() -> SearchFieldContext {
    use_context::<SearchFieldContext>()
}

/// Properties for the [`SearchField`] coordinator.
#[derive(Clone, PartialEq, Props)]
pub struct SearchFieldProps {
    /// Nested sub-components. At a minimum [`SearchFieldLabel`] and
    /// [`SearchFieldInput`] are expected.
    pub children: Element,
    /// Called with the current value when the form is submitted.
    pub on_submit: EventHandler<String>,
    /// Called when the field is cleared.
    #[props(default)]
    pub on_clear: EventHandler<()>,
    /// Called with the new value once per user entry event. Not called for
    /// the initial value or for parent-driven resets.
    #[props(default)]
    pub on_change: EventHandler<String>,
    /// Called when the input gains focus, with the raw event.
    #[props(default)]
    pub on_focus: EventHandler<FocusEvent>,
    /// Called when the input loses focus, with the raw event.
    #[props(default)]
    pub on_blur: EventHandler<FocusEvent>,
    /// Initial value. Supplying a different value on a later render
    /// resynchronizes the field to it (one-way, parent-initiated reset).
    #[props(default)]
    pub value: String,
    #[props(default)]
    pub screen_reader_text: ScreenReaderText,
    #[props(default)]
    pub icons: SearchIcons,
    /// Where the submit control renders.
    #[props(default)]
    pub submit_button_location: SubmitButtonLocation,
    /// `aria-label` for the form element; useful when several search
    /// fields share a page.
    #[props(default)]
    pub form_aria_label: Option<String>,
    /// Additional CSS classes for the field box.
    #[props(default)]
    pub class: Option<String>,
}

/// Search field coordinator.
///
/// Owns the canonical value/focus state, provides [`SearchFieldContext`]
/// to descendants, wraps children in a `role="search"` form, and renders
/// the single submit control at the configured placement.
#[component]
pub fn SearchField(props: SearchFieldProps) -> Element {
    let mut core = use_signal(|| SearchFieldCore::new(props.value.clone()));
    let input_id = use_hook(|| format!("prism-searchfield-input-{}", rand_id()));

    // Parent-driven reset: resynchronize when the supplied value changes.
    let supplied = props.value.clone();
    use_effect(use_reactive!(|(supplied,)| {
        core.write().sync_external(supplied);
    }));

    let value = use_memo(move || core.read().value().to_string());
    let has_focus = use_memo(move || core.read().has_focus());
    let mut focus_request = use_signal(|| None::<FocusTarget>);

    let on_change = props.on_change;
    let on_input = use_callback(move |text: String| {
        let reported = core.write().input(text);
        on_change.call(reported);
    });

    let on_focus_out = props.on_focus;
    let on_focus = use_callback(move |event: FocusEvent| {
        core.write().focus();
        on_focus_out.call(event);
    });

    let on_blur_out = props.on_blur;
    let on_blur = use_callback(move |event: FocusEvent| {
        core.write().blur();
        on_blur_out.call(event);
    });

    let on_clear_out = props.on_clear;
    let on_clear = use_callback(move |()| {
        let target = core.write().clear();
        on_clear_out.call(());
        focus_request.set(Some(target));
    });

    use_context_provider(|| SearchFieldContext {
        input_id: input_id.clone(),
        screen_reader_text: props.screen_reader_text.clone(),
        icons: props.icons.clone(),
        value,
        on_input,
        on_focus,
        on_blur,
        on_clear,
        focus_request,
    });

    let on_submit = props.on_submit;
    let handle_submit = move |event: FormEvent| {
        event.prevent_default();
        let (submitted, target) = core.read().submit();
        tracing::debug!("search field submitted: {:?}", submitted);
        on_submit.call(submitted);
        focus_request.set(Some(target));
    };

    let mut box_class = String::from("prism-searchfield");
    if has_focus() {
        box_class.push_str(" has-focus");
    }
    if let Some(extra) = &props.class {
        box_class.push(' ');
        box_class.push_str(extra);
    }

    rsx! {
        form {
            role: "search",
            class: "prism-search",
            aria_label: props.form_aria_label.clone(),
            onsubmit: handle_submit,
            div { class: "{box_class}",
                {props.children}
                if props.submit_button_location == SubmitButtonLocation::Internal {
                    SearchFieldSubmitButton {}
                }
            }
            if props.submit_button_location == SubmitButtonLocation::External {
                SearchFieldSubmitButton {
                    submit_button_location: SubmitButtonLocation::External,
                }
            }
        }
    }
}

/// Generate a stable per-mount ID for label/input association.
fn rand_id() -> u32 {
    use std::time::{SystemTime, UNIX_EPOCH};
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    (duration.as_nanos() % 1_000_000) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_button_location_classes() {
        assert_eq!(
            SubmitButtonLocation::Internal.class(),
            "prism-searchfield__submit"
        );
        assert_eq!(
            SubmitButtonLocation::External.class(),
            "prism-searchfield__submit--external"
        );
    }

    #[test]
    fn submit_button_location_default_is_internal() {
        assert_eq!(SubmitButtonLocation::default(), SubmitButtonLocation::Internal);
    }

    #[test]
    fn screen_reader_text_defaults() {
        let text = ScreenReaderText::default();
        assert_eq!(text.label, "search");
        assert_eq!(text.submit_button, "submit search");
        assert_eq!(text.clear_button, "clear search");
    }

    #[test]
    fn rand_id_generates_number() {
        let id1 = rand_id();
        let id2 = rand_id();
        assert!(id1 < 1_000_000);
        assert!(id2 < 1_000_000);
    }
}
