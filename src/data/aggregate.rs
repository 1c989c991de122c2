use std::fmt;

use super::filter::SiteSelection;
use super::model::{LaunchDataset, Outcome};

// ---------------------------------------------------------------------------
// Group counts for the pie chart
// ---------------------------------------------------------------------------

/// The grouping key of a pie slice. Which variant appears depends on the
/// site selection: site labels when every site is shown, outcome values
/// when a single site is picked (so the pie flips from "successes per
/// site" to "success vs failure at this site").
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupKey {
    Site(String),
    Outcome(Outcome),
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::Site(s) => write!(f, "{s}"),
            GroupKey::Outcome(o) => write!(f, "{o}"),
        }
    }
}

/// Ordered slice counts: one entry per group, in first-appearance order
/// of the key in the dataset (stable legends across recomputations).
pub type GroupCounts = Vec<(GroupKey, u64)>;

// ---------------------------------------------------------------------------
// Aggregator
// ---------------------------------------------------------------------------

/// Compute the pie-chart counts for the current site selection.
///
/// * `All`: one entry per distinct site counting its successful launches.
///   Sites with zero successes still get an entry (count 0).
/// * `Site(s)`: rows of that site grouped by outcome, one entry per
///   outcome value observed there.
///
/// A selection matching zero rows returns an empty vec; the chart layer
/// renders "no data" for it.
pub fn success_counts(dataset: &LaunchDataset, site: &SiteSelection) -> GroupCounts {
    let mut counts: GroupCounts = Vec::new();

    match site {
        SiteSelection::All => {
            for rec in dataset.records() {
                let key = GroupKey::Site(rec.site.clone());
                let i = match counts.iter().position(|(k, _)| *k == key) {
                    Some(i) => i,
                    None => {
                        counts.push((key, 0));
                        counts.len() - 1
                    }
                };
                if rec.outcome.is_success() {
                    counts[i].1 += 1;
                }
            }
        }
        SiteSelection::Site(_) => {
            for rec in dataset.records().iter().filter(|r| site.matches(&r.site)) {
                let key = GroupKey::Outcome(rec.outcome);
                match counts.iter().position(|(k, _)| *k == key) {
                    Some(i) => counts[i].1 += 1,
                    None => counts.push((key, 1)),
                }
            }
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::LaunchRecord;

    fn rec(site: &str, flag: i64, payload: f64) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            outcome: Outcome::from_flag(flag),
            payload_kg: payload,
            booster: "B4".to_string(),
        }
    }

    /// X: 3 rows (2 success), Y: 2 rows (0 success).
    fn dataset() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            rec("X", 1, 100.0),
            rec("X", 0, 200.0),
            rec("Y", 0, 300.0),
            rec("X", 1, 400.0),
            rec("Y", 0, 500.0),
        ])
    }

    #[test]
    fn all_sites_counts_successes_per_site() {
        let counts = success_counts(&dataset(), &SiteSelection::All);
        assert_eq!(
            counts,
            vec![
                (GroupKey::Site("X".to_string()), 2),
                (GroupKey::Site("Y".to_string()), 0),
            ]
        );
    }

    #[test]
    fn single_site_counts_by_outcome() {
        let counts = success_counts(&dataset(), &SiteSelection::Site("X".to_string()));
        // First X row is a success, so Success appears first.
        assert_eq!(
            counts,
            vec![
                (GroupKey::Outcome(Outcome::Success), 2),
                (GroupKey::Outcome(Outcome::Failure), 1),
            ]
        );
    }

    #[test]
    fn groups_follow_first_appearance_order() {
        let ds = LaunchDataset::from_records(vec![
            rec("B", 1, 1.0),
            rec("A", 1, 2.0),
            rec("B", 1, 3.0),
        ]);
        let counts = success_counts(&ds, &SiteSelection::All);
        // Row order, not alphabetical: B before A.
        assert_eq!(
            counts,
            vec![
                (GroupKey::Site("B".to_string()), 2),
                (GroupKey::Site("A".to_string()), 1),
            ]
        );
    }

    #[test]
    fn all_sites_total_equals_dataset_success_count() {
        let ds = dataset();
        let total: u64 = success_counts(&ds, &SiteSelection::All)
            .iter()
            .map(|(_, n)| n)
            .sum();
        let expected = ds.records().iter().filter(|r| r.outcome.is_success()).count() as u64;
        assert_eq!(total, expected);
    }

    #[test]
    fn single_site_counts_partition_the_site_rows() {
        let ds = dataset();
        let total: u64 = success_counts(&ds, &SiteSelection::Site("X".to_string()))
            .iter()
            .map(|(_, n)| n)
            .sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn unknown_site_yields_empty_counts() {
        let counts = success_counts(&dataset(), &SiteSelection::Site("Z".to_string()));
        assert!(counts.is_empty());
    }

    #[test]
    fn empty_dataset_yields_empty_counts() {
        let ds = LaunchDataset::from_records(Vec::new());
        assert!(success_counts(&ds, &SiteSelection::All).is_empty());
    }

    #[test]
    fn aggregation_is_idempotent() {
        let ds = dataset();
        let a = success_counts(&ds, &SiteSelection::All);
        let b = success_counts(&ds, &SiteSelection::All);
        assert_eq!(a, b);
    }
}
