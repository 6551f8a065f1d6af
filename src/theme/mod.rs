//! Global styling for the showcase app.

mod styles;

pub use styles::GLOBAL_STYLES;
