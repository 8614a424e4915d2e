//! Aggregate facts about one planned run, for operator-facing reporting.

use metaprune_types::Bulk;
use serde::Serialize;

/// What a caller logs before handing the instructions to its transaction
/// sender: how many bulks, how many serial numbers in total, and how full
/// each bulk is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanSummary {
    /// Number of instructions that will be submitted.
    pub bulk_count: usize,
    /// Total serial numbers referenced across all bulks.
    pub total_nonces: u64,
    /// Serial numbers referenced per bulk, in submission order.
    pub nonces_per_bulk: Vec<u64>,
}

impl PlanSummary {
    /// Summarize a packed plan.
    #[must_use]
    pub fn from_bulks(bulks: &[Bulk]) -> Self {
        let nonces_per_bulk: Vec<u64> = bulks.iter().map(Bulk::nonce_count).collect();
        Self {
            bulk_count: bulks.len(),
            total_nonces: nonces_per_bulk.iter().sum(),
            nonces_per_bulk,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan_bulks;

    #[test]
    fn test_summary_counts() {
        let identifiers = [
            "TKN1-beef00-00",
            "TKN1-beef00-01",
            "TKN1-beef00-02",
            "TKN2-cafe01-0a",
        ];
        let bulks = plan_bulks(identifiers, 3).expect("should plan");
        let summary = PlanSummary::from_bulks(&bulks);

        assert_eq!(summary.bulk_count, 2);
        assert_eq!(summary.total_nonces, 4);
        assert_eq!(summary.nonces_per_bulk, vec![3, 1]);
    }

    #[test]
    fn test_summary_empty_plan() {
        let summary = PlanSummary::from_bulks(&[]);
        assert_eq!(summary.bulk_count, 0);
        assert_eq!(summary.total_nonces, 0);
        assert!(summary.nonces_per_bulk.is_empty());
    }

    #[test]
    fn test_summary_serializes_to_stable_json() {
        let bulks = plan_bulks(["TKN1-beef00-01"], 2).expect("should plan");
        let summary = PlanSummary::from_bulks(&bulks);
        let json = serde_json::to_string(&summary).expect("serializes");
        assert_eq!(
            json,
            r#"{"bulk_count":1,"total_nonces":1,"nonces_per_bulk":[1]}"#
        );
    }
}
