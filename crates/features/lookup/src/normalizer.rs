//! Turns an untyped request payload into a [`QueryVariant`].
//!
//! Two request forms are accepted:
//! * legacy: `{letters, minLength?, maxLength?}`, always a spellable query;
//! * typed: `{queryType, query: {...}}` with the variant's fields inside `query`.
//!
//! Rules run in a fixed order and the first failure wins: letter fields, then
//! `maxLength`, then `minLength`, then the relation between the two, then offsets.

use crate::error::LookupError;
use serde_json::{Map, Value};
use whub_domain::constants::{
    DEFAULT_SUBSTRING_END, DEFAULT_SUBSTRING_START, MAX_LETTERS, MAX_PREFIX, MAX_WORD_LENGTH,
    MIN_WORD_LENGTH,
};
use whub_domain::query::{Bounds, LetterSet, QueryType, QueryVariant};

const QUERY_TYPE: &str = "queryType";
const QUERY: &str = "query";
const LETTERS: &str = "letters";
const STARTS_WITH: &str = "startsWith";
const MIN_LENGTH: &str = "minLength";
const MAX_LENGTH: &str = "maxLength";

/// Validates and canonicalizes a request payload.
///
/// # Errors
/// Returns [`LookupError::InvalidQuery`] describing the first offending field, or a
/// generic message quoting the payload when its shape cannot be understood.
pub fn normalize(payload: &Value) -> Result<QueryVariant, LookupError> {
    let fields = payload.as_object().ok_or_else(|| malformed(payload))?;

    let Some(query_type) = fields.get(QUERY_TYPE) else {
        if fields.contains_key(LETTERS) {
            return spellable(fields, payload);
        }
        return Err(malformed(payload));
    };

    let query_type =
        query_type.as_str().and_then(QueryType::from_wire).ok_or_else(|| malformed(payload))?;
    let empty = Map::new();
    let query = match fields.get(QUERY) {
        None | Some(Value::Null) => &empty,
        Some(Value::Object(query)) => query,
        Some(_) => return Err(malformed(payload)),
    };

    match query_type {
        QueryType::Spellable => spellable(query, payload),
        QueryType::StartsWith => starts_with(query, payload),
        QueryType::MatchSubstring => match_substring(query),
    }
}

fn spellable(fields: &Map<String, Value>, payload: &Value) -> Result<QueryVariant, LookupError> {
    let raw = required_str(fields, LETTERS, payload)?;
    let letters = letter_set(LETTERS, raw, MAX_LETTERS)?;
    let length = length_bounds(fields)?;
    Ok(QueryVariant::Spellable { letters, length })
}

fn starts_with(fields: &Map<String, Value>, payload: &Value) -> Result<QueryVariant, LookupError> {
    let raw = required_str(fields, STARTS_WITH, payload)?;
    let prefix = letter_set(STARTS_WITH, raw, MAX_PREFIX)?;
    let length = length_bounds(fields)?;
    Ok(QueryVariant::StartsWith { prefix, length })
}

fn match_substring(fields: &Map<String, Value>) -> Result<QueryVariant, LookupError> {
    let length = length_bounds(fields)?;

    let start = offset(fields, "start", "startLength").unwrap_or(DEFAULT_SUBSTRING_START);
    let end = offset(fields, "end", "endLength").unwrap_or(DEFAULT_SUBSTRING_END);
    if end <= start {
        return Err(LookupError::invalid(format!(
            "Invalid end arg, end must be greater than start ({start})"
        )));
    }

    Ok(QueryVariant::MatchSubstring { length, offset: Bounds::new(start, end) })
}

fn required_str<'a>(
    fields: &'a Map<String, Value>,
    key: &str,
    payload: &Value,
) -> Result<&'a str, LookupError> {
    fields.get(key).and_then(Value::as_str).ok_or_else(|| malformed(payload))
}

/// Accepts 1 to `max` ASCII letters and returns them in canonical form.
fn letter_set(field: &str, raw: &str, max: usize) -> Result<LetterSet, LookupError> {
    let valid = !raw.is_empty() && raw.len() <= max && raw.bytes().all(|b| b.is_ascii_alphabetic());
    if !valid {
        return Err(LookupError::invalid(format!(
            "Invalid arg {field}: {raw}. Letters must be a member of the english alphabet. \
             Max {max} letters allowed"
        )));
    }
    Ok(LetterSet::canonical(raw))
}

fn length_bounds(fields: &Map<String, Value>) -> Result<Bounds, LookupError> {
    let max = fields.get(MAX_LENGTH).and_then(parse_count).unwrap_or(MAX_WORD_LENGTH);
    let min = fields.get(MIN_LENGTH).and_then(parse_count).unwrap_or(MIN_WORD_LENGTH);

    let allowed = MIN_WORD_LENGTH..=MAX_WORD_LENGTH;
    if !allowed.contains(&max) {
        return Err(out_of_range(MAX_LENGTH));
    }
    if !allowed.contains(&min) {
        return Err(out_of_range(MIN_LENGTH));
    }
    if min > max {
        return Err(LookupError::invalid(format!(
            "Invalid {MIN_LENGTH} arg, {MIN_LENGTH} must not exceed {MAX_LENGTH}"
        )));
    }
    Ok(Bounds::new(min, max))
}

fn offset(fields: &Map<String, Value>, key: &str, alias: &str) -> Option<u32> {
    fields.get(key).and_then(parse_count).or_else(|| fields.get(alias).and_then(parse_count))
}

/// Reads a non-negative integer from a JSON number or a string of ASCII digits.
///
/// Anything else yields `None` so the caller's default applies. Values beyond
/// `u32` saturate, which keeps them out of every accepted range.
fn parse_count(value: &Value) -> Option<u32> {
    let wide = match value {
        Value::Number(number) => number.as_u64()?,
        Value::String(digits)
            if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) =>
        {
            digits.parse::<u64>().unwrap_or(u64::MAX)
        }
        _ => return None,
    };
    Some(u32::try_from(wide).unwrap_or(u32::MAX))
}

fn out_of_range(field: &str) -> LookupError {
    LookupError::invalid(format!(
        "Invalid {field} arg, {field} must be between {MIN_WORD_LENGTH} and {MAX_WORD_LENGTH}"
    ))
}

fn malformed(payload: &Value) -> LookupError {
    LookupError::invalid(format!("Error parsing event payload {payload}."))
}
