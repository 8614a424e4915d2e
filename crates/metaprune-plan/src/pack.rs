//! Bulk packing: the central batch-partitioning algorithm.
//!
//! A greedy single pass over the ordered entry stream. Each bulk references
//! at most `capacity` serial numbers; a range longer than the bulk's
//! remaining capacity is split at the boundary and its tail carries over to
//! the next bulk. Fragments of the same token landing in the same bulk
//! coalesce into one group.

use metaprune_error::{PruneError, Result};
use metaprune_types::{Bulk, NonceRange, TokenRangeEntry};
use tracing::debug;

/// Progress hook invoked as bulks are closed. Purely informational: it has
/// no effect on the computed plan.
pub trait PackObserver {
    /// Called once per emitted bulk, with its position and the number of
    /// serial numbers it references.
    fn bulk_closed(&mut self, index: usize, nonce_count: u64) {
        let _ = (index, nonce_count);
    }
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl PackObserver for NullObserver {}

/// Partition the ordered entry stream into capacity-bounded bulks.
///
/// Every bulk except the last references exactly `capacity` serial numbers;
/// the last references at least one and at most `capacity`. Empty input
/// yields no bulks. The pass is fully deterministic: same entries and
/// capacity, same output.
pub fn pack(entries: &[TokenRangeEntry], capacity: u64) -> Result<Vec<Bulk>> {
    pack_with_observer(entries, capacity, &mut NullObserver)
}

/// [`pack`], reporting each closed bulk through `observer`.
pub fn pack_with_observer(
    entries: &[TokenRangeEntry],
    capacity: u64,
    observer: &mut dyn PackObserver,
) -> Result<Vec<Bulk>> {
    if capacity == 0 {
        return Err(PruneError::InvalidCapacity);
    }

    let mut bulks = Vec::new();
    let mut current = Bulk::default();
    let mut remaining = capacity;

    for entry in entries {
        let mut lo = entry.range.start;
        let hi = entry.range.end;
        loop {
            // `hi - lo` is the fragment length minus one, so this never
            // overflows even for a range covering the full u64 domain.
            let take = if hi - lo >= remaining {
                remaining
            } else {
                hi - lo + 1
            };

            // take >= 1 and lo + (take - 1) <= hi, so the sub-range end
            // stays in bounds even when hi == u64::MAX.
            current.push_fragment(&entry.token, NonceRange::new(lo, lo + (take - 1)));
            remaining -= take;

            if remaining == 0 {
                observer.bulk_closed(bulks.len(), capacity);
                bulks.push(std::mem::take(&mut current));
                remaining = capacity;
            }

            if take - 1 == hi - lo {
                break; // fragment fully consumed
            }
            lo += take;
        }
    }

    if !current.is_empty() {
        observer.bulk_closed(bulks.len(), current.nonce_count());
        bulks.push(current);
    }

    debug!(bulks = bulks.len(), capacity, "packed entries into bulks");
    Ok(bulks)
}
