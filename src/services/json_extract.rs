//! Best-effort extraction of a JSON document from free-form completion text.
//! Models are asked for bare JSON but routinely wrap it in commentary; the
//! scanner takes the first opening bracket and walks to its balanced close,
//! tracking string state so brackets inside literals don't end the span.

use serde_json::Value;

use crate::errors::{AppError, AppResult};

pub fn extract_array(text: &str) -> AppResult<Value> {
    extract(text, '[', ']')
}

pub fn extract_object(text: &str) -> AppResult<Value> {
    extract(text, '{', '}')
}

fn extract(text: &str, open: char, close: char) -> AppResult<Value> {
    let start = text.find(open).ok_or_else(|| {
        AppError::MalformedModelOutput(format!("no `{}` found in completion", open))
    })?;

    let span = balanced_span(&text[start..], open, close).ok_or_else(|| {
        AppError::MalformedModelOutput(format!("unterminated `{}` in completion", open))
    })?;

    serde_json::from_str(span).map_err(|err| AppError::MalformedModelOutput(err.to_string()))
}

/// Returns the prefix of `text` up to and including the bracket that closes
/// the one at position 0, or None if the text ends first.
fn balanced_span(text: &str, open: char, close: char) -> Option<&str> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, ch) in text.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        if ch == '"' {
            in_string = true;
        } else if ch == open {
            depth += 1;
        } else if ch == close {
            depth = depth.saturating_sub(1);
            if depth == 0 {
                // close is ASCII, so i + 1 is a char boundary
                return Some(&text[..=i]);
            }
        }
    }

    None
}
