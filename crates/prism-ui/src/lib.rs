//! Prism Design System UI Components
//!
//! This crate provides Dioxus components for the Prism Design System.
//! Components are styled entirely through the CSS custom properties that
//! the `prism-tokens` build emits, so consuming apps restyle them by
//! swapping token themes rather than overriding component internals.
//!
//! ## Composition model
//!
//! Composite widgets (currently [`SearchField`]) follow a coordinator /
//! sub-component split: the coordinator owns the shared state and provides
//! a statically typed context; sub-components read and mutate that state
//! exclusively through the context handle. There is no prop threading of
//! values into deeply nested children and no untyped ambient lookup.

pub mod components;

pub use components::*;
