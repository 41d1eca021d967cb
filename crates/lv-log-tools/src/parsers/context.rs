//! Split a record body into its message and trailing context payload.
//!
//! The payload is found syntactically: the body must end in `}` and the
//! payload is the last balanced `{...}` span at the tail. When that span is
//! not a JSON object (a string value holding a lone `{` ends the scan
//! early), the earliest `{` whose suffix parses as a JSON object wins.

use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

// Fallback when the tail never balances: first `{` through the final `}`
static RE_TRAILING_BRACES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\{.*\}\z").unwrap()
});

/// Returns `(message, context)`, both trimmed; `context` is empty if the
/// body has no trailing payload.
pub fn split_context(body: &str) -> (&str, &str) {
    let body = body.trim();
    match trailing_context_start(body) {
        Some(start) => (body[..start].trim_end(), &body[start..]),
        None => (body, ""),
    }
}

/// Byte offset of the `{` opening the trailing payload.
fn trailing_context_start(body: &str) -> Option<usize> {
    if !body.ends_with('}') {
        return None;
    }

    let balanced = balanced_tail_start(body);
    if let Some(start) = balanced
        && is_json_object(&body[start..])
    {
        return Some(start);
    }

    if let Some(start) = body
        .match_indices('{')
        .map(|(i, _)| i)
        .find(|&i| is_json_object(&body[i..]))
    {
        return Some(start);
    }

    balanced.or_else(|| RE_TRAILING_BRACES.find(body).map(|m| m.start()))
}

/// Backward bracket-depth scan from the final `}`.
fn balanced_tail_start(body: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, ch) in body.char_indices().rev() {
        match ch {
            '}' => depth += 1,
            '{' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

fn is_json_object(text: &str) -> bool {
    serde_json::from_str::<Map<String, Value>>(text).is_ok()
}
