//! Design token model and JSON parsing.
//!
//! Token files are nested JSON objects. A leaf is any object carrying a
//! `"value"` key; the path of keys down to the leaf names the token.
//! Leaves may also carry a `"comment"` string and a `"utility"` array of
//! `{ "class", "property" }` objects describing CSS utility classes to
//! generate from the token.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, TokenError};

/// A CSS utility class generated from a token.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UtilitySpec {
    /// Class name, without the leading dot.
    pub class: String,
    /// CSS property the class sets from the token's custom property.
    pub property: String,
}

/// One flattened design token.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// Path of JSON keys down to the leaf, e.g. `["color", "brand", "500"]`.
    pub path: Vec<String>,
    /// Raw value, possibly containing `{a.b.c}` references.
    pub value: String,
    pub comment: Option<String>,
    pub utilities: Vec<UtilitySpec>,
    /// Whether the token came from an overlay source (`--source`) rather
    /// than the base set.
    pub is_source: bool,
}

impl Token {
    /// Dotted path, the token's identity and reference key.
    pub fn key(&self) -> String {
        self.path.join(".")
    }
}

/// An ordered collection of tokens keyed by dotted path.
///
/// Later insertions override earlier ones at the same path, which is how
/// overlay sources shadow base tokens. BTreeMap ordering keeps output
/// deterministic.
#[derive(Clone, Debug, Default)]
pub struct TokenSet {
    tokens: BTreeMap<String, Token>,
}

impl TokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a token, replacing any existing token at the same path.
    pub fn insert(&mut self, token: Token) {
        self.tokens.insert(token.key(), token);
    }

    /// Parses one token file and merges its tokens into the set.
    pub fn merge_file(&mut self, file: &str, contents: &str, is_source: bool) -> Result<()> {
        let root: Value = serde_json::from_str(contents).map_err(|source| TokenError::Parse {
            file: file.to_string(),
            source,
        })?;
        let object = root.as_object().ok_or_else(|| TokenError::InvalidTokenFile {
            file: file.to_string(),
            reason: "top level must be an object".to_string(),
        })?;

        let mut path = Vec::new();
        for (key, node) in object {
            path.push(key.clone());
            self.collect(file, &mut path, node, is_source)?;
            path.pop();
        }
        Ok(())
    }

    fn collect(&mut self, file: &str, path: &mut Vec<String>, node: &Value, is_source: bool) -> Result<()> {
        let object = match node.as_object() {
            Some(object) => object,
            None => {
                return Err(TokenError::InvalidTokenFile {
                    file: file.to_string(),
                    reason: format!("{} is neither a group nor a token", path.join(".")),
                })
            }
        };

        if let Some(value) = object.get("value") {
            let value = scalar_to_string(value).ok_or_else(|| TokenError::InvalidTokenFile {
                file: file.to_string(),
                reason: format!("{} has a non-scalar value", path.join(".")),
            })?;
            let comment = object
                .get("comment")
                .and_then(Value::as_str)
                .map(str::to_string);
            let utilities = match object.get("utility") {
                Some(raw) => serde_json::from_value(raw.clone()).map_err(|source| {
                    TokenError::Parse {
                        file: file.to_string(),
                        source,
                    }
                })?,
                None => Vec::new(),
            };
            self.insert(Token {
                path: path.clone(),
                value,
                comment,
                utilities,
                is_source,
            });
            return Ok(());
        }

        for (key, child) in object {
            path.push(key.clone());
            self.collect(file, path, child, is_source)?;
            path.pop();
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Token> {
        self.tokens.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.values()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_groups() {
        let mut set = TokenSet::new();
        set.merge_file(
            "color.json",
            r##"{ "color": { "brand": { "500": { "value": "#0a3055" } } } }"##,
            false,
        )
        .unwrap();
        let token = set.get("color.brand.500").unwrap();
        assert_eq!(token.value, "#0a3055");
        assert!(!token.is_source);
    }

    #[test]
    fn parses_comment_and_utility_metadata() {
        let mut set = TokenSet::new();
        set.merge_file(
            "t.json",
            r#"{ "spacing": { "1": {
                "value": "0.25rem",
                "comment": "base unit",
                "utility": [ { "class": "p-1", "property": "padding" } ]
            } } }"#,
            false,
        )
        .unwrap();
        let token = set.get("spacing.1").unwrap();
        assert_eq!(token.comment.as_deref(), Some("base unit"));
        assert_eq!(token.utilities.len(), 1);
        assert_eq!(token.utilities[0].class, "p-1");
        assert_eq!(token.utilities[0].property, "padding");
    }

    #[test]
    fn later_files_override_same_path() {
        let mut set = TokenSet::new();
        set.merge_file("a.json", r##"{ "color": { "bg": { "value": "#fff" } } }"##, false)
            .unwrap();
        set.merge_file("b.json", r##"{ "color": { "bg": { "value": "#000" } } }"##, true)
            .unwrap();
        let token = set.get("color.bg").unwrap();
        assert_eq!(token.value, "#000");
        assert!(token.is_source);
    }

    #[test]
    fn numeric_values_are_stringified() {
        let mut set = TokenSet::new();
        set.merge_file("z.json", r#"{ "elevation": { "modal": { "value": 1050 } } }"#, false)
            .unwrap();
        assert_eq!(set.get("elevation.modal").unwrap().value, "1050");
    }

    #[test]
    fn rejects_scalar_group() {
        let mut set = TokenSet::new();
        let err = set
            .merge_file("bad.json", r##"{ "color": "#fff" }"##, false)
            .unwrap_err();
        assert!(matches!(err, TokenError::InvalidTokenFile { .. }));
    }

    #[test]
    fn rejects_invalid_json() {
        let mut set = TokenSet::new();
        let err = set.merge_file("bad.json", "{ nope", false).unwrap_err();
        assert!(matches!(err, TokenError::Parse { .. }));
    }
}
