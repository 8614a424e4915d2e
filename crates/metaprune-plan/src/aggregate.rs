//! Serial aggregation: group raw identifiers by token family.

use std::collections::{BTreeMap, BTreeSet};

use metaprune_error::Result;
use metaprune_types::TokenKey;
use tracing::debug;

use crate::identifier::parse_identifier;

/// Group serial numbers by token family key.
///
/// Token groups come back in ascending key order and each serial list is
/// ascending and duplicate-free. BTree collections make the ordering an
/// explicit property of the result rather than an accident of hash-map
/// iteration, which is what the packer's determinism rests on.
///
/// The first malformed identifier aborts the run.
pub fn group_serials<I, S>(identifiers: I) -> Result<Vec<(TokenKey, Vec<u64>)>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut grouped: BTreeMap<TokenKey, BTreeSet<u64>> = BTreeMap::new();
    let mut seen = 0_usize;
    for raw in identifiers {
        let (token, serial) = parse_identifier(raw.as_ref())?;
        grouped.entry(token).or_default().insert(serial);
        seen += 1;
    }

    debug!(
        identifiers = seen,
        tokens = grouped.len(),
        "grouped serial numbers by token family"
    );

    Ok(grouped
        .into_iter()
        .map(|(token, serials)| (token, serials.into_iter().collect()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use metaprune_error::PruneError;

    #[test]
    fn test_group_serials_sorts_keys_and_serials() {
        let identifiers = [
            "ZED-cafe01-05",
            "ABC-beef00-0a",
            "ZED-cafe01-01",
            "ABC-beef00-03",
        ];
        let grouped = group_serials(identifiers).expect("should group");

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].0.as_str(), "ABC-beef00");
        assert_eq!(grouped[0].1, vec![3, 10]);
        assert_eq!(grouped[1].0.as_str(), "ZED-cafe01");
        assert_eq!(grouped[1].1, vec![1, 5]);
    }

    #[test]
    fn test_group_serials_deduplicates() {
        let identifiers = ["ABC-beef00-01", "ABC-beef00-01", "ABC-beef00-02"];
        let grouped = group_serials(identifiers).expect("should group");
        assert_eq!(grouped[0].1, vec![1, 2]);
    }

    #[test]
    fn test_group_serials_empty_input() {
        let grouped = group_serials(std::iter::empty::<&str>()).expect("should group");
        assert!(grouped.is_empty());
    }

    #[test]
    fn test_group_serials_propagates_parse_error() {
        let identifiers = ["ABC-beef00-01", "not-an-identifier-at-all"];
        let err = group_serials(identifiers).expect_err("should fail");
        assert!(matches!(err, PruneError::InvalidTokenFormat { .. }));
    }
}
