//! Correction pass for the restart bookkeeping artifact.
//!
//! A monitored machine that restarts re-reports its last known state as if
//! it were fresh progress: `update block difference` lands exactly on the
//! current block and `update amount` on the current balance, which reads as
//! a stale duplicate of the previous observation rather than new work.

use crate::record::Record;

/// Block heights at or below this count as a genuinely first observation
/// rather than a stale duplicate of the last one.
pub const FIRST_BLOCKS_WINDOW: i64 = 256;

/// Zero the stale `block difference` / `update amount` counters left behind
/// by a machine restart.
///
/// A record is corrected when all of the following hold:
///
/// - `update block difference == block`
/// - `block > FIRST_BLOCKS_WINDOW`
/// - `update amount == balance`
///
/// Records missing any of the involved fields are left untouched, so a
/// batch without update bookkeeping passes through unchanged. The pass
/// mutates in memory only; nothing is written back to the store. Applying
/// it twice yields the same result as applying it once.
pub fn zero_stale_counters(records: &mut [Record]) {
    for record in records.iter_mut() {
        let (Some(update_block), Some(block), Some(update_amount), Some(balance)) = (
            record.update_block_difference,
            record.block,
            record.update_amount,
            record.balance,
        ) else {
            continue;
        };

        if update_block == block && block > FIRST_BLOCKS_WINDOW && update_amount == balance {
            record.block_difference = Some(0);
            record.update_amount = Some(0.0);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// A record exhibiting the restart artifact: the update bookkeeping
    /// mirrors the current observation exactly.
    fn stale_record() -> Record {
        Record {
            key: "rig-01".to_string(),
            balance: Some(10.0),
            block: Some(300),
            block_difference: Some(5),
            update_block_difference: Some(300),
            update_amount: Some(10.0),
            ..Record::default()
        }
    }

    #[test]
    fn zeroes_counters_on_restart_artifact() {
        let mut records = vec![stale_record()];
        zero_stale_counters(&mut records);

        assert_eq!(records[0].block_difference, Some(0));
        assert_eq!(records[0].update_amount, Some(0.0));
        // The observation itself is untouched.
        assert_eq!(records[0].block, Some(300));
        assert_eq!(records[0].balance, Some(10.0));
    }

    #[test]
    fn first_blocks_are_not_corrected() {
        // A low block height means this really is the first observation.
        let mut records = vec![Record {
            block: Some(200),
            update_block_difference: Some(200),
            ..stale_record()
        }];
        let before = records.clone();
        zero_stale_counters(&mut records);
        assert_eq!(records, before);
    }

    #[test]
    fn window_boundary_is_exclusive() {
        let mut records = vec![Record {
            block: Some(FIRST_BLOCKS_WINDOW),
            update_block_difference: Some(FIRST_BLOCKS_WINDOW),
            ..stale_record()
        }];
        let before = records.clone();
        zero_stale_counters(&mut records);
        assert_eq!(records, before);
    }

    #[test]
    fn block_mismatch_is_not_corrected() {
        let mut records = vec![Record {
            update_block_difference: Some(299),
            ..stale_record()
        }];
        let before = records.clone();
        zero_stale_counters(&mut records);
        assert_eq!(records, before);
    }

    #[test]
    fn amount_mismatch_is_not_corrected() {
        let mut records = vec![Record {
            update_amount: Some(9.5),
            ..stale_record()
        }];
        let before = records.clone();
        zero_stale_counters(&mut records);
        assert_eq!(records, before);
    }

    #[test]
    fn records_without_update_bookkeeping_pass_through() {
        let mut records = vec![Record {
            key: "rig-02".to_string(),
            balance: Some(3.0),
            block: Some(500),
            block_difference: Some(7),
            ..Record::default()
        }];
        let before = records.clone();
        zero_stale_counters(&mut records);
        assert_eq!(records, before);
    }

    #[test]
    fn empty_batch_is_a_noop() {
        let mut records: Vec<Record> = Vec::new();
        zero_stale_counters(&mut records);
        assert!(records.is_empty());
    }

    #[test]
    fn correction_is_idempotent() {
        let mut once = vec![stale_record(), stale_record()];
        zero_stale_counters(&mut once);

        let mut twice = once.clone();
        zero_stale_counters(&mut twice);

        assert_eq!(once, twice);
    }
}
