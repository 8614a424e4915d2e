//! Interval compression: sorted serial lists into minimal contiguous ranges.

use metaprune_types::NonceRange;

/// Compress one token's ascending, duplicate-free serial list into its
/// minimal ordered list of closed ranges.
///
/// Single linear pass: extend the current range while the next serial is
/// exactly `end + 1`, close it on any gap. A singleton run yields a range
/// with `start == end`; an empty list yields no ranges.
#[must_use]
pub fn compress_serials(serials: &[u64]) -> Vec<NonceRange> {
    let Some((&first, rest)) = serials.split_first() else {
        return Vec::new();
    };

    let mut ranges = Vec::new();
    let mut start = first;
    let mut end = first;
    for &serial in rest {
        if serial == end + 1 {
            end = serial;
        } else {
            ranges.push(NonceRange::new(start, end));
            start = serial;
            end = serial;
        }
    }
    ranges.push(NonceRange::new(start, end));

    ranges
}
