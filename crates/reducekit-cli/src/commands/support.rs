use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::io::{self, Write};

use anyhow::Result;
use reducekit_core::ReduceError;
use serde::Serializer as _;
use reducekit_core::parse::{parse_int_list, parse_key_values};

pub(super) fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

pub(super) fn eprint_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let mut stderr = io::stderr().lock();
    serde_json::to_writer_pretty(&mut stderr, value)?;
    writeln!(stderr)?;
    Ok(())
}

/// Pretty JSON array written element by element; the sequence is never
/// collected.
pub(super) fn write_json_seq<W, I>(writer: &mut W, values: I) -> Result<()>
where
    W: Write,
    I: IntoIterator,
    I::Item: serde::Serialize,
{
    let mut serializer = serde_json::Serializer::pretty(&mut *writer);
    (&mut serializer).collect_seq(values)?;
    writeln!(writer)?;
    Ok(())
}

/// Integers from every argument, in argument order.
pub(super) fn collect_values(raw_args: &[String]) -> reducekit_core::Result<Vec<i64>> {
    let mut values = Vec::new();
    for raw in raw_args {
        values.extend(parse_int_list(raw)?);
    }
    Ok(values)
}

/// Pairs from every argument; a key repeated across arguments is malformed.
pub(super) fn collect_entries(raw_args: &[String]) -> reducekit_core::Result<BTreeMap<String, i64>> {
    let mut entries = BTreeMap::new();
    for raw in raw_args {
        for (key, value) in parse_key_values(raw)? {
            match entries.entry(key) {
                Entry::Vacant(slot) => {
                    slot.insert(value);
                }
                Entry::Occupied(slot) => {
                    return Err(ReduceError::MalformedInput(format!(
                        "duplicate key '{}'",
                        slot.key()
                    )));
                }
            }
        }
    }
    Ok(entries)
}
