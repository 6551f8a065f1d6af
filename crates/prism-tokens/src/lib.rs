//! Prism design token build pipeline
//!
//! Compiles design-token JSON into CSS custom-property files. Token files
//! are nested JSON trees where a leaf carries a `"value"` (and optionally
//! a `"comment"` and `"utility"` metadata); values may reference other
//! tokens with `{dotted.path}` syntax.
//!
//! ## Flow
//!
//! 1. Load token sources ([`TokenSource`]): the embedded base set, plus
//!    optional overlay directories that shadow base tokens.
//! 2. Resolve references (cycle- and dangling-checked).
//! 3. Render the configured [`FileSpec`]s: variables, custom-media
//!    breakpoints, utility classes.
//! 4. Write `@import` index files for what was built.
//!
//! ## Example
//!
//! ```ignore
//! use prism_tokens::{base, BuildConfig, BuildPipeline, CssFormat, FileSpec};
//!
//! let config = BuildConfig {
//!     include: base::core_sources(),
//!     source: vec![],
//!     source_tokens_only: false,
//!     prefix: "prism".to_string(),
//!     build_path: "./build".into(),
//!     theme: None,
//!     files: vec![FileSpec {
//!         format: CssFormat::Variables,
//!         destination: "core/variables.css".into(),
//!         output_references: true,
//!     }],
//! };
//! BuildPipeline::new(config).build_all()?;
//! ```

pub mod base;
mod error;
mod format;
mod pipeline;
mod resolve;
mod token;

pub use error::{Result, TokenError};
pub use format::{css_name, CssDeclaration, MediaQueryToken, UtilityRule, FILE_HEADER};
pub use pipeline::{
    write_index_css, BuildConfig, BuildPipeline, CssFormat, FileSpec, IndexScope, TokenSource,
};
pub use resolve::resolve_all;
pub use token::{Token, TokenSet, UtilitySpec};
