//! Reference resolution.
//!
//! Token values may embed `{a.b.c}` references to other tokens, including
//! inside larger strings (`"1px solid {color.border}"`). Resolution
//! substitutes them recursively, failing on unknown paths and cycles.

use std::collections::BTreeMap;

use crate::error::{Result, TokenError};
use crate::token::TokenSet;

/// Resolves every token value in the set.
///
/// Returns a map from dotted token path to fully substituted value.
pub fn resolve_all(set: &TokenSet) -> Result<BTreeMap<String, String>> {
    let mut resolved = BTreeMap::new();
    for token in set.iter() {
        let mut stack = vec![token.key()];
        let value = resolve_value(&token.value, set, &mut stack)?;
        resolved.insert(token.key(), value);
    }
    Ok(resolved)
}

/// If the raw value is exactly one reference, returns the referenced path.
///
/// Used by the variables format to preserve references as `var(--...)`
/// instead of inlining the resolved value.
pub fn single_reference(raw: &str) -> Option<&str> {
    let inner = raw.strip_prefix('{')?.strip_suffix('}')?;
    if inner.contains(['{', '}']) {
        return None;
    }
    Some(inner)
}

fn resolve_value(raw: &str, set: &TokenSet, stack: &mut Vec<String>) -> Result<String> {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(open) = rest.find('{') {
        let (literal, tail) = rest.split_at(open);
        out.push_str(literal);
        let close = tail.find('}').ok_or_else(|| TokenError::InvalidTokenFile {
            file: stack.first().cloned().unwrap_or_default(),
            reason: format!("unterminated reference in value {:?}", raw),
        })?;
        let reference = &tail[1..close];
        let target = set.get(reference).ok_or_else(|| TokenError::UnresolvedReference {
            token: stack.first().cloned().unwrap_or_default(),
            reference: reference.to_string(),
        })?;
        if stack.iter().any(|seen| seen == reference) {
            return Err(TokenError::ReferenceCycle(reference.to_string()));
        }
        stack.push(reference.to_string());
        let substituted = resolve_value(&target.value, set, stack)?;
        stack.pop();
        out.push_str(&substituted);
        rest = &tail[close + 1..];
    }
    out.push_str(rest);
    Ok(out)
}
