//! Button components
//!
//! Rendering primitives the composite widgets build on:
//! - Button: labeled actions in three variants
//! - IconButton: compact glyph-only actions with a required accessible label

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Primary action button
    #[default]
    Primary,
    /// Secondary action
    Secondary,
    /// Subtle, borderless action
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "prism-btn--primary",
            ButtonVariant::Secondary => "prism-btn--secondary",
            ButtonVariant::Ghost => "prism-btn--ghost",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Mounted handler, for callers that need the element handle (e.g. to
    /// move focus programmatically)
    #[props(default)]
    pub onmounted: Option<EventHandler<MountedEvent>>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Primary,
///         onclick: move |_| run_search(),
///         "Search"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let base_class = props.variant.class();
    let extra_class = props.class.as_deref().unwrap_or("");
    let full_class = if extra_class.is_empty() {
        base_class.to_string()
    } else {
        format!("{} {}", base_class, extra_class)
    };
    let onmounted_handler = props.onmounted;

    rsx! {
        button {
            class: "{full_class}",
            r#type: "{props.button_type}",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            onmounted: move |event| {
                if let Some(handler) = &onmounted_handler {
                    handler.call(event);
                }
            },
            {props.children}
        }
    }
}

/// Icon button for compact actions (clear, close, etc.)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content (character or element)
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let extra_class = props.class.as_deref().unwrap_or("");
    let full_class = if extra_class.is_empty() {
        "prism-icon-btn".to_string()
    } else {
        format!("prism-icon-btn {}", extra_class)
    };

    rsx! {
        button {
            r#type: "button",
            class: "{full_class}",
            "aria-label": "{props.aria_label}",
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "prism-btn--primary");
        assert_eq!(ButtonVariant::Secondary.class(), "prism-btn--secondary");
        assert_eq!(ButtonVariant::Ghost.class(), "prism-btn--ghost");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }
}
