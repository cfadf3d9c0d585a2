//! Safe-list handling, safe/unknown partitioning, and per-partition stats.

use std::collections::{BTreeMap, HashSet};

use crate::record::{Record, UNKNOWN_LABEL};

/// Parse the known-safe identifier list from its line-delimited text form.
///
/// Each line is whitespace-trimmed; no other normalization is applied. A
/// key that differs from a list entry in case or interior whitespace will
/// not match; the list is the source of truth exactly as written.
pub fn parse_safelist(contents: &str) -> Vec<String> {
    contents.lines().map(|line| line.trim().to_string()).collect()
}

/// Records partitioned by membership of their key in the safe list.
#[derive(Debug)]
pub struct Classified {
    /// Records whose key appears in the safe list.
    pub safe: Vec<Record>,
    /// Records whose key does not.
    pub unknown: Vec<Record>,
}

impl Classified {
    /// Keys of the safe records, in input order.
    pub fn safe_names(&self) -> Vec<String> {
        self.safe.iter().map(|r| r.key.clone()).collect()
    }

    /// Keys of the unknown records, in input order.
    pub fn unknown_names(&self) -> Vec<String> {
        self.unknown.iter().map(|r| r.key.clone()).collect()
    }
}

/// Partition `records` by exact key membership in `safelist`.
///
/// Every input record lands in exactly one partition, so
/// `safe.len() + unknown.len()` always equals the input length.
pub fn partition_by_safelist(records: Vec<Record>, safelist: &[String]) -> Classified {
    let safe_keys: HashSet<&str> = safelist.iter().map(String::as_str).collect();
    let (safe, unknown) = records
        .into_iter()
        .partition(|record| safe_keys.contains(record.key.as_str()));
    Classified { safe, unknown }
}

/// Aggregate statistics over the safe partition.
#[derive(Debug, Default, PartialEq)]
pub struct SafeStats {
    /// Count of safe records per reported operating system. Records with
    /// no `os` field are bucketed under [`UNKNOWN_LABEL`].
    pub os_distribution: BTreeMap<String, usize>,
    /// Sum of safe record balances; a missing balance counts as zero.
    pub total_balance: f64,
    /// Safe records flagged as programmatically set up.
    pub programmatic: usize,
}

/// Collect [`SafeStats`] over the safe partition.
pub fn collect_safe_stats(safe: &[Record]) -> SafeStats {
    let mut stats = SafeStats::default();
    for record in safe {
        let os = record.os.as_deref().unwrap_or(UNKNOWN_LABEL);
        *stats.os_distribution.entry(os.to_string()).or_insert(0) += 1;
        stats.total_balance += record.balance.unwrap_or(0.0);
        if record.programmatic {
            stats.programmatic += 1;
        }
    }
    stats
}

/// Count records per reported agent version, across all records.
pub fn version_distribution(records: &[Record]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        *counts
            .entry(record.version_or_unknown().to_string())
            .or_insert(0) += 1;
    }
    counts
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
