//! CSS output formats.
//!
//! Three formats are produced: custom-property blocks, `@custom-media`
//! breakpoint rules, and utility classes. Formatting is pure string
//! rendering; the pipeline decides which tokens feed each format.

/// Header prepended to every generated file.
pub const FILE_HEADER: &str = "/*\n * Generated by the Prism token build. Do not edit directly.\n */\n\n";

/// CSS custom property name for a token path, e.g.
/// `["color", "brand", "500"]` with prefix `prism` becomes
/// `--prism-color-brand-500`.
pub fn css_name(prefix: &str, path: &[String]) -> String {
    let mut name = format!("--{}", prefix);
    for segment in path {
        name.push('-');
        name.push_str(&kebab(segment));
    }
    name
}

fn kebab(segment: &str) -> String {
    segment
        .trim()
        .to_lowercase()
        .replace([' ', '_', '.'], "-")
}

/// One rendered custom-property declaration.
#[derive(Clone, Debug, PartialEq)]
pub struct CssDeclaration {
    /// Property name including leading dashes.
    pub name: String,
    /// Emission value: either the resolved token value or a `var(--...)`
    /// reference when references are preserved.
    pub value: String,
    pub comment: Option<String>,
}

/// Renders a block of custom properties under the given selector.
pub fn format_variables(selector: &str, declarations: &[CssDeclaration]) -> String {
    let mut out = String::from(FILE_HEADER);
    out.push_str(selector);
    out.push_str(" {\n");
    for declaration in declarations {
        if let Some(comment) = &declaration.comment {
            out.push_str(&format!("  /* {} */\n", comment));
        }
        out.push_str(&format!("  {}: {};\n", declaration.name, declaration.value));
    }
    out.push_str("}\n");
    out
}

/// A breakpoint token destined for an `@custom-media` rule.
#[derive(Clone, Debug, PartialEq)]
pub struct MediaQueryToken {
    /// Custom media name including leading dashes.
    pub name: String,
    /// Resolved minimum width, e.g. `768px`.
    pub min_width: String,
    pub comment: Option<String>,
}

/// Renders `@custom-media` rules for breakpoint tokens.
pub fn format_custom_media(tokens: &[MediaQueryToken]) -> String {
    let mut out = String::from(FILE_HEADER);
    for token in tokens {
        if let Some(comment) = &token.comment {
            out.push_str(&format!("/* {} */\n", comment));
        }
        out.push_str(&format!(
            "@custom-media {} (min-width: {});\n",
            token.name, token.min_width
        ));
    }
    out
}

/// One utility class generated from a token's utility metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct UtilityRule {
    /// Class name without the leading dot.
    pub class: String,
    pub property: String,
    /// The token's custom property name the rule points at.
    pub variable: String,
}

/// Renders utility classes referencing the token custom properties.
pub fn format_utility_classes(rules: &[UtilityRule]) -> String {
    let mut out = String::from(FILE_HEADER);
    for rule in rules {
        out.push_str(&format!(
            ".{} {{ {}: var({}); }}\n",
            rule.class, rule.property, rule.variable
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn css_name_joins_kebab_segments() {
        assert_eq!(
            css_name("prism", &path(&["color", "brand", "500"])),
            "--prism-color-brand-500"
        );
        assert_eq!(
            css_name("prism", &path(&["font", "Heading Large"])),
            "--prism-font-heading-large"
        );
    }

    #[test]
    fn variables_block_renders_selector_and_comments() {
        let css = format_variables(
            ":root",
            &[
                CssDeclaration {
                    name: "--prism-color-bg".to_string(),
                    value: "#f5f6f7".to_string(),
                    comment: Some("page background".to_string()),
                },
                CssDeclaration {
                    name: "--prism-color-primary".to_string(),
                    value: "var(--prism-color-brand-500)".to_string(),
                    comment: None,
                },
            ],
        );
        assert!(css.starts_with(FILE_HEADER));
        assert!(css.contains(":root {\n"));
        assert!(css.contains("  /* page background */\n"));
        assert!(css.contains("  --prism-color-bg: #f5f6f7;\n"));
        assert!(css.contains("  --prism-color-primary: var(--prism-color-brand-500);\n"));
        assert!(css.ends_with("}\n"));
    }

    #[test]
    fn custom_media_rules() {
        let css = format_custom_media(&[MediaQueryToken {
            name: "--prism-breakpoint-md".to_string(),
            min_width: "768px".to_string(),
            comment: None,
        }]);
        assert!(css.contains("@custom-media --prism-breakpoint-md (min-width: 768px);\n"));
    }

    #[test]
    fn utility_classes_point_at_variables() {
        let css = format_utility_classes(&[UtilityRule {
            class: "bg-primary".to_string(),
            property: "background-color".to_string(),
            variable: "--prism-color-primary".to_string(),
        }]);
        assert!(css.contains(".bg-primary { background-color: var(--prism-color-primary); }\n"));
    }
}
