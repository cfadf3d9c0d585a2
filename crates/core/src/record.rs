//! The record type shared by the mining and ping collections.

use serde::{Deserialize, Deserializer};

/// Bucket label for records missing an optional attribute (`version`, `os`).
pub const UNKNOWN_LABEL: &str = "unknown";

/// One machine entry as stored in a Deta Base collection.
///
/// Every field except the identifying `key` is optional: ping records carry
/// little more than `key` and `version`, while mining records add balance
/// and block bookkeeping. Several field names contain embedded spaces; that
/// is how the reporting agents store them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Record {
    /// Identifying key, unique per machine.
    pub key: String,
    /// Operating system reported by the machine.
    pub os: Option<String>,
    /// Wallet balance at the time of the report.
    pub balance: Option<f64>,
    /// Whether the machine was set up programmatically. Older agents report
    /// this as `0`/`1`, newer ones as a boolean.
    #[serde(default, deserialize_with = "flag_from_bool_or_number")]
    pub programmatic: bool,
    /// Reporting agent version.
    pub version: Option<String>,
    /// Last observed block height.
    pub block: Option<i64>,
    /// Blocks attributed to the machine since its previous report.
    #[serde(rename = "block difference")]
    pub block_difference: Option<i64>,
    /// Block height recorded at the last balance update.
    #[serde(rename = "update block difference")]
    pub update_block_difference: Option<i64>,
    /// Balance recorded at the last balance update. Compared for equality
    /// against `balance` by the correction pass, hence the same numeric type.
    #[serde(rename = "update amount")]
    pub update_amount: Option<f64>,
}

impl Record {
    /// Reported agent version, defaulting to [`UNKNOWN_LABEL`].
    pub fn version_or_unknown(&self) -> &str {
        self.version.as_deref().unwrap_or(UNKNOWN_LABEL)
    }
}

/// Accept `true`/`false` or a number (nonzero = set) as a flag value.
fn flag_from_bool_or_number<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Number(f64),
    }

    Ok(match Option::<Flag>::deserialize(deserializer)? {
        Some(Flag::Bool(b)) => b,
        Some(Flag::Number(n)) => n != 0.0,
        None => false,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
