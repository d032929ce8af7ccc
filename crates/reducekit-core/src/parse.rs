use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use tracing::debug;

use crate::error::{ReduceError, Result};

const LIST_SEPARATOR: char = ',';
const PAIR_SEPARATOR: char = '=';

pub fn parse_int(raw: &str) -> Result<i64> {
    let token = raw.trim();
    token
        .parse::<i64>()
        .map_err(|_| ReduceError::MalformedInput(format!("invalid integer '{token}'")))
}

/// Comma-separated integers. A blank input is an empty list; a blank token
/// between separators is malformed.
pub fn parse_int_list(raw: &str) -> Result<Vec<i64>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    let values = raw
        .split(LIST_SEPARATOR)
        .enumerate()
        .map(|(index, token)| {
            if token.trim().is_empty() {
                return Err(ReduceError::MalformedInput(format!(
                    "empty integer at position {}",
                    index + 1
                )));
            }
            parse_int(token)
        })
        .collect::<Result<Vec<_>>>()?;
    debug!(count = values.len(), "parsed integer list");
    Ok(values)
}

/// Comma-separated `key=value` pairs. Keys are unique and non-empty; the
/// first `=` splits key from value.
pub fn parse_key_values(raw: &str) -> Result<BTreeMap<String, i64>> {
    let mut out = BTreeMap::new();
    if raw.trim().is_empty() {
        return Ok(out);
    }

    for pair in raw.split(LIST_SEPARATOR) {
        let Some((key, value)) = pair.split_once(PAIR_SEPARATOR) else {
            return Err(ReduceError::MalformedInput(format!(
                "expected key=value, got '{}'",
                pair.trim()
            )));
        };
        let key = key.trim();
        if key.is_empty() {
            return Err(ReduceError::MalformedInput(format!(
                "missing key in '{}'",
                pair.trim()
            )));
        }
        let value = parse_int(value)?;
        match out.entry(key.to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
            Entry::Occupied(_) => {
                return Err(ReduceError::MalformedInput(format!("duplicate key '{key}'")));
            }
        }
    }
    debug!(count = out.len(), "parsed key-value pairs");
    Ok(out)
}
