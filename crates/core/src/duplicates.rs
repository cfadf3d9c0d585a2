//! Duplicate detection over identifying keys.
//!
//! A key appearing more than once across fetched records is a data-quality
//! anomaly (typically two machines reporting under the same identity), so
//! both reports surface the offending keys.

use std::collections::{HashMap, HashSet};

/// Return every distinct value occurring more than once in `values`, in
/// first-seen order.
///
/// One counting pass and one emission pass over the input; O(n) in the
/// length of `values`.
pub fn duplicate_values<S: AsRef<str>>(values: &[S]) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::with_capacity(values.len());
    for value in values {
        *counts.entry(value.as_ref()).or_insert(0) += 1;
    }

    let mut emitted: HashSet<&str> = HashSet::new();
    let mut duplicates = Vec::new();
    for value in values {
        let value = value.as_ref();
        if counts[value] > 1 && emitted.insert(value) {
            duplicates.push(value.to_string());
        }
    }
    duplicates
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
