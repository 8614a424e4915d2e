//! End-to-end planner for bulk delete-metadata instructions.
//!
//! Given raw token identifiers (`ticker-randomSequence-serialHex`) and a
//! per-bulk capacity, produce the ordered instruction strings an external
//! transaction builder turns into outgoing transactions, one per bulk.
//! Submission order must match planning order (transactions are
//! nonce-sequenced downstream), which is why every stage of this pipeline
//! is deterministic: token families are walked in ascending key order, each
//! family's ranges in ascending start order.
//!
//! The planner holds no state and performs no I/O; sourcing the identifier
//! list and submitting the instructions belong to the caller.

pub mod summary;

use metaprune_encode::encode_bulk;
use metaprune_error::Result;
use metaprune_plan::{compress_serials, group_serials, pack};
use metaprune_types::TokenRangeEntry;
use tracing::debug;

pub use metaprune_encode::{ARG_SEPARATOR, DELETE_METADATA_PREFIX};
pub use metaprune_error::PruneError;
pub use metaprune_types::{Bulk, BulkGroup, NonceRange, TokenKey};
pub use summary::PlanSummary;

/// Plan the full instruction set for one batch of raw identifiers.
///
/// Each returned string is the payload of one outgoing instruction, in
/// submission order.
pub fn plan_instructions<I, S>(identifiers: I, capacity: u64) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let bulks = plan_bulks(identifiers, capacity)?;
    Ok(bulks.iter().map(encode_bulk).collect())
}

/// Plan without encoding, for callers that want to inspect or summarize the
/// packed bulks before rendering them.
pub fn plan_bulks<I, S>(identifiers: I, capacity: u64) -> Result<Vec<Bulk>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let grouped = group_serials(identifiers)?;

    let mut entries = Vec::new();
    for (token, serials) in grouped {
        for range in compress_serials(&serials) {
            entries.push(TokenRangeEntry {
                token: token.clone(),
                range,
            });
        }
    }

    let bulks = pack(&entries, capacity)?;
    debug!(
        entries = entries.len(),
        bulks = bulks.len(),
        "planned delete-metadata bulks"
    );
    Ok(bulks)
}
