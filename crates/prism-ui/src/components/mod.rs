//! Reusable UI components for the Prism Design System.
//!
//! All components render against the `--prism-*` custom properties
//! produced by the token build.

mod button;
mod search_field;

pub use button::*;
pub use search_field::*;
