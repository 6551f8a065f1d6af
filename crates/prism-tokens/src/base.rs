//! Base token set shipped with the crate.
//!
//! The JSON files under `tokens/` are compiled into the binary so the
//! build CLI works without a checkout of this repository. Overlay tokens
//! supplied at build time come from the filesystem instead.

use crate::pipeline::TokenSource;

/// Base core token sources (colors, spacing, typography, breakpoints).
pub fn core_sources() -> Vec<TokenSource> {
    vec![
        TokenSource::Embedded {
            name: "core/breakpoints.json",
            contents: include_str!("../tokens/core/breakpoints.json"),
        },
        TokenSource::Embedded {
            name: "core/color.json",
            contents: include_str!("../tokens/core/color.json"),
        },
        TokenSource::Embedded {
            name: "core/spacing.json",
            contents: include_str!("../tokens/core/spacing.json"),
        },
        TokenSource::Embedded {
            name: "core/typography.json",
            contents: include_str!("../tokens/core/typography.json"),
        },
    ]
}

/// Base token sources for a theme variant.
///
/// Only a light theme ships with the crate; other variants start empty
/// and are populated entirely from overlay sources.
pub fn theme_sources(theme: &str) -> Vec<TokenSource> {
    match theme {
        "light" => vec![
            TokenSource::Embedded {
                name: "themes/light/components.json",
                contents: include_str!("../tokens/themes/light/components.json"),
            },
            TokenSource::Embedded {
                name: "themes/light/semantic.json",
                contents: include_str!("../tokens/themes/light/semantic.json"),
            },
        ],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenSet;

    #[test]
    fn base_sources_parse() {
        let mut set = TokenSet::new();
        for source in core_sources().iter().chain(theme_sources("light").iter()) {
            match source {
                TokenSource::Embedded { name, contents } => {
                    set.merge_file(name, contents, false).unwrap();
                }
                TokenSource::Dir(_) => unreachable!(),
            }
        }
        assert!(!set.is_empty());
        assert!(set.get("color.brand.500").is_some());
        assert!(set.get("breakpoint.md").is_some());
        assert!(set.get("color.background").is_some());
    }

    #[test]
    fn unknown_theme_has_no_base_tokens() {
        assert!(theme_sources("dark").is_empty());
    }
}
