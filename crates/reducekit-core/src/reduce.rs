//! Collection reductions over integer sequences and string-keyed mappings.
//!
//! Every function here is pure: inputs are borrowed or consumed by value and
//! nothing outside the call is read or written.

use tracing::trace;

use crate::arith::OverflowPolicy;
use crate::error::{ReduceError, Result};

/// Prefix matched by `filtered_sum` callers that want the historical behavior.
pub const DEFAULT_PREFIX: &str = "data";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilteredSum {
    pub total: i64,
    pub matched: usize,
}

/// Largest element of `values`.
///
/// An empty sequence has no maximum and yields [`ReduceError::EmptyInput`]
/// rather than an in-band sentinel.
pub fn maximum_of<I>(values: I) -> Result<i64>
where
    I: IntoIterator<Item = i64>,
{
    let max = values
        .into_iter()
        .max()
        .ok_or_else(|| ReduceError::EmptyInput("maximum of an empty sequence".to_string()))?;
    trace!(max, "maximum_of");
    Ok(max)
}

/// Sum of values whose key starts with `prefix`, with checked addition.
pub fn filtered_sum<'a, I, K>(entries: I, prefix: &str) -> Result<i64>
where
    I: IntoIterator<Item = (K, &'a i64)>,
    K: AsRef<str>,
{
    filtered_sum_with(entries, prefix, OverflowPolicy::Checked)
}

pub fn filtered_sum_with<'a, I, K>(entries: I, prefix: &str, policy: OverflowPolicy) -> Result<i64>
where
    I: IntoIterator<Item = (K, &'a i64)>,
    K: AsRef<str>,
{
    let sum = filtered_sum_by(entries, |key| key.starts_with(prefix), policy)?;
    trace!(prefix, matched = sum.matched, total = sum.total, "filtered_sum");
    Ok(sum.total)
}

/// Sum of values whose key satisfies `predicate`, with the number of entries
/// that contributed.
pub fn filtered_sum_by<'a, I, K, P>(
    entries: I,
    predicate: P,
    policy: OverflowPolicy,
) -> Result<FilteredSum>
where
    I: IntoIterator<Item = (K, &'a i64)>,
    K: AsRef<str>,
    P: Fn(&str) -> bool,
{
    let mut acc = FilteredSum::default();
    for (key, value) in entries {
        if !predicate(key.as_ref()) {
            continue;
        }
        acc.total = policy.add(acc.total, *value)?;
        acc.matched += 1;
    }
    Ok(acc)
}
