//! Showcase application for the Prism components.
//!
//! Mounts the SearchField in both submit-button placements and surfaces
//! the callback activity on screen, so the interaction contract can be
//! exercised by hand.

use dioxus::prelude::*;
use prism_ui::{
    SearchField, SearchFieldClearButton, SearchFieldInput, SearchFieldLabel, SubmitButtonLocation,
};

use crate::theme::GLOBAL_STYLES;

/// Root application component.
#[component]
pub fn App() -> Element {
    let mut last_submitted = use_signal(String::new);
    let mut event_log = use_signal(Vec::<String>::new);

    let mut log = move |entry: String| {
        tracing::info!("{}", entry);
        event_log.write().push(entry);
    };

    rsx! {
        style { {GLOBAL_STYLES} }
        main { class: "showcase",
            h1 { "Prism Design System" }

            section {
                h2 { "SearchField" }
                SearchField {
                    value: "cats".to_string(),
                    form_aria_label: "library search".to_string(),
                    on_submit: move |query: String| {
                        last_submitted.set(query.clone());
                        log(format!("submitted {:?}", query));
                    },
                    on_change: move |value: String| log(format!("changed to {:?}", value)),
                    on_clear: move |()| log("cleared".to_string()),
                    SearchFieldLabel { text: "Search the library".to_string() }
                    SearchFieldInput { placeholder: "What are you looking for?".to_string() }
                    SearchFieldClearButton {}
                }
            }

            section {
                h2 { "SearchField, external submit button" }
                SearchField {
                    submit_button_location: SubmitButtonLocation::External,
                    on_submit: move |query: String| log(format!("external submit {:?}", query)),
                    SearchFieldLabel {}
                    SearchFieldInput {}
                    SearchFieldClearButton {}
                }
            }

            section {
                h2 { "Activity" }
                p { class: "showcase__last",
                    "Last submitted: "
                    strong { "{last_submitted}" }
                }
                ul { class: "showcase__log",
                    for (index, entry) in event_log.read().iter().enumerate().rev().take(8) {
                        li { key: "{index}", "{entry}" }
                    }
                }
            }
        }
    }
}
