//! Fallible primitives that raise built-in categories.
//!
//! These are the small operations guarded runs are usually built from:
//! integer division, string-to-integer conversion, positional and keyed
//! access, and reading a file.

use crate::error::{Failure, Outcome};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::path::Path;

/// Integer division; `Arithmetic` on a zero divisor or overflow.
pub fn checked_div(dividend: i64, divisor: i64) -> Outcome<i64> {
    if divisor == 0 {
        return Err(Failure::arithmetic("division by zero"));
    }
    dividend
        .checked_div(divisor)
        .ok_or_else(|| Failure::arithmetic(format!("{dividend} / {divisor} overflows")))
}

/// Parse a base-10 integer; `Conversion` when the text is not one.
pub fn parse_int(text: &str) -> Outcome<i64> {
    text.trim().parse::<i64>().map_err(|err| {
        Failure::conversion(format!("invalid literal for integer: '{text}'"))
            .with_payload(serde_json::json!({ "reason": err.to_string() }))
    })
}

/// Positional access; `Bounds` past the end.
pub fn element_at<T: Clone>(items: &[T], index: usize) -> Outcome<T> {
    items.get(index).cloned().ok_or_else(|| {
        Failure::bounds(format!("index {index} out of range"))
            .with_payload(serde_json::json!({ "index": index, "len": items.len() }))
    })
}

/// Keyed access; `Lookup` when the key is missing.
pub fn lookup<K, Q, V>(map: &HashMap<K, V>, key: &Q) -> Outcome<V>
where
    K: Eq + Hash + Borrow<Q>,
    Q: Eq + Hash + Debug + ?Sized,
    V: Clone,
{
    map.get(key)
        .cloned()
        .ok_or_else(|| Failure::lookup(format!("key not found: {key:?}")))
}

/// Read a whole file to a string; `Io` on any filesystem failure.
pub fn read_to_string(path: impl AsRef<Path>) -> Outcome<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|err| Failure::from_io(err, Some(path)))
}
