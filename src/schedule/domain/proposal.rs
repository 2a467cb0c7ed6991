//! Decoding of raw generator text into candidate entries.
//!
//! Language models rarely return bare JSON. The decoder accepts:
//!
//! - a JSON array of entries;
//! - a JSON object holding the array under `schedule`, `entries` or `tasks`;
//! - either of the above inside a Markdown code fence;
//! - prose with the array embedded in it; the first balanced `[`…`]` span
//!   that parses as an array of entries wins.

use super::CandidateEntry;
use serde_json::Value;
use thiserror::Error;

const ARRAY_KEYS: [&str; 3] = ["schedule", "entries", "tasks"];

/// Errors returned while decoding a proposal.
#[derive(Debug, Error)]
pub enum ProposalError {
    /// The generator returned no text.
    #[error("proposal text is empty")]
    Empty,

    /// The text is valid JSON but contains no schedule array.
    #[error("proposal does not contain a schedule array")]
    NoSchedule,

    /// The text could not be parsed as JSON.
    #[error("proposal is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decodes generator output into candidate entries.
///
/// # Errors
///
/// Returns [`ProposalError::Empty`] for blank text,
/// [`ProposalError::NoSchedule`] when no entry array can be located, and
/// [`ProposalError::Json`] when the located text is not valid JSON.
///
/// # Examples
///
/// ```
/// use taskplan::schedule::domain::decode_proposal;
///
/// let text = "```json\n[{\"taskId\": 7, \"startTime\": \"11:30\"}]\n```";
/// let candidates = decode_proposal(text).expect("decodable proposal");
/// assert_eq!(candidates.len(), 1);
/// assert_eq!(candidates[0].task_id(), Some("7"));
/// ```
pub fn decode_proposal(text: &str) -> Result<Vec<CandidateEntry>, ProposalError> {
    let body = strip_code_fence(text.trim());
    if body.is_empty() {
        return Err(ProposalError::Empty);
    }

    let value = match serde_json::from_str::<Value>(body) {
        Ok(value) => value,
        Err(err) => embedded_array(body).ok_or(ProposalError::Json(err))?,
    };

    let items = schedule_items(&value).ok_or(ProposalError::NoSchedule)?;
    Ok(items.iter().map(CandidateEntry::from_value).collect())
}

pub(crate) fn schedule_items(value: &Value) -> Option<&Vec<Value>> {
    match value {
        Value::Array(items) => Some(items),
        Value::Object(object) => ARRAY_KEYS
            .iter()
            .find_map(|key| object.get(*key).and_then(Value::as_array)),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => None,
    }
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop the info string (`json`, `JSON`, ...) on the opening line.
    let body = rest.split_once('\n').map_or(rest, |(_, body)| body);
    body.trim_end()
        .strip_suffix("```")
        .unwrap_or(body)
        .trim()
}

fn embedded_array(text: &str) -> Option<Value> {
    let mut fallback = None;
    for (open, _) in text.match_indices('[') {
        let Some(Value::Array(items)) = balanced_span(text, open)
            .and_then(|span| serde_json::from_str::<Value>(span).ok())
        else {
            continue;
        };
        // Prefer an array of entry objects over bracketed prose like `[1]`.
        if items.iter().any(Value::is_object) {
            return Some(Value::Array(items));
        }
        fallback.get_or_insert(Value::Array(items));
    }
    fallback
}

/// Returns the bracketed span opening at byte `open`, skipping brackets
/// inside JSON strings.
fn balanced_span(text: &str, open: usize) -> Option<&str> {
    let tail = text.get(open..)?;
    let mut depth = 0_usize;
    let mut in_string = false;
    let mut escaped = false;
    for (offset, ch) in tail.char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '[' => depth += 1,
            ']' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return tail.get(..=offset);
                }
            }
            _ => {}
        }
    }
    None
}
