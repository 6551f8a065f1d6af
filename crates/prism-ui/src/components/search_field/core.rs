//! Headless state for the search field coordinator.
//!
//! All of the widget's coordination logic lives here, independent of the
//! rendering layer: the controlled text value, the visual focus flag, the
//! parent-driven reset rule, and the focus-movement requests that follow a
//! submit or a clear. The Dioxus components are thin shells over this
//! struct, which keeps the interaction rules unit-testable without a
//! renderer.

/// Where keyboard focus should move after an interaction.
///
/// Submitting returns focus to the submit control; clearing returns it to
/// the text input. The rendering layer consumes a pending request and
/// resolves it to a concrete element handle.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FocusTarget {
    /// The text input element.
    Input,
    /// The submit control (internal icon button or external button).
    SubmitButton,
}

/// Canonical state for one mounted search field.
///
/// Invariants:
/// - `value` always equals the last user entry, the last parent-supplied
///   value, or `""` after a clear - whichever happened most recently.
/// - Seeding at construction is not an edit: no change notification is
///   associated with the initial value.
#[derive(Clone, Debug)]
pub struct SearchFieldCore {
    value: String,
    has_focus: bool,
    /// The most recent externally supplied value, kept to tell a
    /// parent-driven reset apart from an ordinary re-render.
    external_value: String,
}

impl SearchFieldCore {
    /// Creates state seeded with the externally supplied initial value.
    pub fn new(initial: impl Into<String>) -> Self {
        let initial = initial.into();
        Self {
            value: initial.clone(),
            has_focus: false,
            external_value: initial,
        }
    }

    /// Current text value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether a descendant input currently has focus.
    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    /// Applies one user entry event and returns the value to report
    /// through the change callback. Exactly one notification per entry
    /// event; the initial seed never passes through here.
    pub fn input(&mut self, text: impl Into<String>) -> String {
        self.value = text.into();
        self.value.clone()
    }

    /// Resynchronizes to a newly supplied external value.
    ///
    /// One-way, parent-initiated reset: overwrites the internal value only
    /// when the supplied value differs from the one last supplied. Returns
    /// whether a resync happened. Never produces a change notification.
    pub fn sync_external(&mut self, supplied: impl Into<String>) -> bool {
        let supplied = supplied.into();
        if supplied == self.external_value {
            return false;
        }
        self.external_value = supplied.clone();
        self.value = supplied;
        true
    }

    /// Handles form submission: the value is left untouched and focus is
    /// requested on the submit control. Returns the value to submit.
    pub fn submit(&self) -> (String, FocusTarget) {
        (self.value.clone(), FocusTarget::SubmitButton)
    }

    /// Handles a clear action: blanks the value and requests focus back on
    /// the text input. The caller fires the clear callback, not the change
    /// callback.
    pub fn clear(&mut self) -> FocusTarget {
        self.value.clear();
        FocusTarget::Input
    }

    /// Records that the input gained focus.
    pub fn focus(&mut self) {
        self.has_focus = true;
    }

    /// Records that the input lost focus.
    pub fn blur(&mut self) {
        self.has_focus = false;
    }
}

impl Default for SearchFieldCore {
    fn default() -> Self {
        Self::new("")
    }
}
