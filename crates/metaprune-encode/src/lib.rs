//! Wire encoding of packed bulks into delete-metadata instruction strings.
//!
//! Pure formatting: encoding never reorders ranges or performs packing
//! logic, and the same bulk value always renders to the same byte string.
//!
//! The format is the conventional smart-contract call encoding of the target
//! protocol: a fixed function-name prefix, then `@`-separated arguments.
//! Each argument is the lowercase hex of a byte string; numbers use their
//! minimal big-endian byte form with at least one byte, so zero renders as
//! `00` and 256 as `0100`.

use std::fmt::Write as _;

use metaprune_types::Bulk;

/// Builtin-function name prefixing every instruction.
pub const DELETE_METADATA_PREFIX: &str = "ESDTDeleteMetadata";

/// Argument separator of the wire format.
pub const ARG_SEPARATOR: char = '@';

/// Render one bulk as a single instruction string.
///
/// Groups are walked in ascending token-key order. For each group: the
/// token key's raw bytes hex-encoded, the range count, then each range's
/// start and end.
#[must_use]
pub fn encode_bulk(bulk: &Bulk) -> String {
    let mut out = String::from(DELETE_METADATA_PREFIX);
    for group in bulk.sorted_groups() {
        push_bytes_arg(&mut out, group.token.as_bytes());
        push_u64_arg(&mut out, group.ranges.len() as u64);
        for range in &group.ranges {
            push_u64_arg(&mut out, range.start);
            push_u64_arg(&mut out, range.end);
        }
    }
    out
}

/// Append `@` plus the lowercase hex of `bytes`.
fn push_bytes_arg(out: &mut String, bytes: &[u8]) {
    out.push(ARG_SEPARATOR);
    for byte in bytes {
        let _ = write!(out, "{byte:02x}");
    }
}

/// Append `@` plus the minimal big-endian byte encoding of `value`.
fn push_u64_arg(out: &mut String, value: u64) {
    let bytes = value.to_be_bytes();
    let first = bytes
        .iter()
        .position(|&byte| byte != 0)
        .unwrap_or(bytes.len() - 1);
    push_bytes_arg(out, &bytes[first..]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use metaprune_types::{NonceRange, TokenKey};

    fn arg_u64(value: u64) -> String {
        let mut out = String::new();
        push_u64_arg(&mut out, value);
        out.split_off(1)
    }

    #[test]
    fn test_u64_arg_minimal_big_endian() {
        assert_eq!(arg_u64(0), "00");
        assert_eq!(arg_u64(4), "04");
        assert_eq!(arg_u64(10), "0a");
        assert_eq!(arg_u64(255), "ff");
        assert_eq!(arg_u64(256), "0100");
        assert_eq!(arg_u64(0x0123_4567_89ab_cdef), "0123456789abcdef");
        assert_eq!(arg_u64(u64::MAX), "ffffffffffffffff");
    }

    #[test]
    fn test_encode_single_group() {
        let mut bulk = Bulk::default();
        bulk.push_fragment(&TokenKey::from("token1"), NonceRange::new(4, 8));
        assert_eq!(encode_bulk(&bulk), "ESDTDeleteMetadata@746f6b656e31@01@04@08");
    }

    #[test]
    fn test_encode_orders_groups_by_token_key() {
        let mut bulk = Bulk::default();
        bulk.push_fragment(&TokenKey::from("token3"), NonceRange::new(1, 4));
        bulk.push_fragment(&TokenKey::from("token1"), NonceRange::single(2));
        assert_eq!(
            encode_bulk(&bulk),
            "ESDTDeleteMetadata@746f6b656e31@01@02@02@746f6b656e33@01@01@04"
        );
    }

    #[test]
    fn test_encode_multi_range_group_keeps_stored_order() {
        let mut bulk = Bulk::default();
        bulk.push_fragment(&TokenKey::from("token1"), NonceRange::single(3));
        bulk.push_fragment(&TokenKey::from("token1"), NonceRange::single(0));
        bulk.push_fragment(&TokenKey::from("token1"), NonceRange::single(1));
        assert_eq!(
            encode_bulk(&bulk),
            "ESDTDeleteMetadata@746f6b656e31@03@03@03@00@00@01@01"
        );
    }

    #[test]
    fn test_encode_empty_bulk_is_bare_prefix() {
        assert_eq!(encode_bulk(&Bulk::default()), DELETE_METADATA_PREFIX);
    }

    #[test]
    fn test_encode_is_idempotent() {
        let mut bulk = Bulk::default();
        bulk.push_fragment(&TokenKey::from("TKN-00ff00"), NonceRange::new(250, 260));
        let first = encode_bulk(&bulk);
        assert_eq!(first, encode_bulk(&bulk));
        assert_eq!(
            first,
            "ESDTDeleteMetadata@544b4e2d303066663030@01@fa@0104"
        );
    }
}
