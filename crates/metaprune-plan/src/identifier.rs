//! Raw token identifier parsing.

use metaprune_error::{PruneError, Result};
use metaprune_types::TokenKey;

/// A raw identifier is `ticker-randomSequence-serialHex`.
const IDENTIFIER_PARTS: usize = 3;

/// Split a raw identifier into its token family key and serial number.
///
/// The key is the identifier minus the serial suffix; the suffix is parsed
/// as an unsigned base-16 integer. `"MYTOKEN-abcdef-0a"` parses to
/// (`"MYTOKEN-abcdef"`, `10`).
///
/// A single malformed identifier aborts the whole planning run: downstream
/// range indices would be wrong if it were silently dropped.
pub fn parse_identifier(raw: &str) -> Result<(TokenKey, u64)> {
    let parts: Vec<&str> = raw.split('-').collect();
    if parts.len() != IDENTIFIER_PARTS {
        return Err(PruneError::InvalidTokenFormat {
            identifier: raw.to_owned(),
        });
    }

    let serial = u64::from_str_radix(parts[2], 16).map_err(|_| PruneError::InvalidSerial {
        identifier: raw.to_owned(),
    })?;

    Ok((TokenKey::new(format!("{}-{}", parts[0], parts[1])), serial))
}
