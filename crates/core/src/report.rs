//! Wire-format reports for the mining and ping endpoints.
//!
//! Field names are the exact strings existing consumers parse; they are
//! pinned with serde renames so the contract lives on the struct itself
//! instead of scattered string literals.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::classify::{collect_safe_stats, partition_by_safelist, version_distribution};
use crate::duplicates::duplicate_values;
use crate::record::Record;

/// Response body for `GET /mining`.
///
/// Totals (`Total machines`, `Total balance`, `Programmatic`, `Manual`)
/// cover the safe partition only, as does the `OS` distribution.
/// `Versions` spans every fetched record, and `Double entries` is computed
/// over the raw key sequence before the safe/unknown split.
#[derive(Debug, Serialize)]
pub struct MiningReport {
    #[serde(rename = "Database")]
    pub database: String,
    #[serde(rename = "Total machines")]
    pub total_machines: usize,
    #[serde(rename = "Total balance")]
    pub total_balance: f64,
    #[serde(rename = "Safe machines nr")]
    pub safe_machines_nr: usize,
    #[serde(rename = "Safe machine names")]
    pub safe_machine_names: Vec<String>,
    #[serde(rename = "Unknown machines nr")]
    pub unknown_machines_nr: usize,
    #[serde(rename = "Unknown machine names")]
    pub unknown_machine_names: Vec<String>,
    #[serde(rename = "Double entries nr")]
    pub double_entries_nr: usize,
    #[serde(rename = "Double entries")]
    pub double_entries: Vec<String>,
    #[serde(rename = "OS")]
    pub os: BTreeMap<String, usize>,
    #[serde(rename = "Versions")]
    pub versions: BTreeMap<String, usize>,
    #[serde(rename = "Programmatic")]
    pub programmatic: usize,
    #[serde(rename = "Manual")]
    pub manual: usize,
}

impl MiningReport {
    /// Build the mining report from corrected records and the safe list.
    pub fn build(database: &str, records: Vec<Record>, safelist: &[String]) -> Self {
        let keys: Vec<&str> = records.iter().map(|r| r.key.as_str()).collect();
        let double_entries = duplicate_values(&keys);
        let versions = version_distribution(&records);

        let classified = partition_by_safelist(records, safelist);
        let safe_machine_names = classified.safe_names();
        let unknown_machine_names = classified.unknown_names();
        let stats = collect_safe_stats(&classified.safe);

        let total_machines = classified.safe.len();
        MiningReport {
            database: database.to_string(),
            total_machines,
            total_balance: stats.total_balance,
            safe_machines_nr: classified.safe.len(),
            safe_machine_names,
            unknown_machines_nr: classified.unknown.len(),
            unknown_machine_names,
            double_entries_nr: double_entries.len(),
            double_entries,
            os: stats.os_distribution,
            versions,
            programmatic: stats.programmatic,
            manual: total_machines - stats.programmatic,
        }
    }
}

/// Response body for `GET /ping`.
///
/// Deliberately a subset of [`MiningReport`]: consumers of the ping
/// endpoint only ever received these four fields.
#[derive(Debug, Serialize)]
pub struct PingReport {
    #[serde(rename = "Database")]
    pub database: String,
    #[serde(rename = "Double entries nr")]
    pub double_entries_nr: usize,
    #[serde(rename = "Double entries")]
    pub double_entries: Vec<String>,
    #[serde(rename = "Versions")]
    pub versions: BTreeMap<String, usize>,
}

impl PingReport {
    /// Build the ping report from corrected records.
    pub fn build(database: &str, records: &[Record]) -> Self {
        let keys: Vec<&str> = records.iter().map(|r| r.key.as_str()).collect();
        let double_entries = duplicate_values(&keys);

        PingReport {
            database: database.to_string(),
            double_entries_nr: double_entries.len(),
            double_entries,
            versions: version_distribution(records),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
