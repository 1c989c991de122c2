use std::fmt;

// ---------------------------------------------------------------------------
// Outcome – the binary success flag of a launch
// ---------------------------------------------------------------------------

/// Launch outcome, coerced from the source's 0/1 `class` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Coerce a 0/1 flag into an outcome. Any non-zero value counts as success.
    pub fn from_flag(flag: i64) -> Self {
        if flag == 0 {
            Outcome::Failure
        } else {
            Outcome::Success
        }
    }

    /// Numeric value for scatter positioning (failure = 0, success = 1).
    pub fn as_f64(self) -> f64 {
        match self {
            Outcome::Failure => 0.0,
            Outcome::Success => 1.0,
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Failure => write!(f, "Failure"),
            Outcome::Success => write!(f, "Success"),
        }
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single launch record (one row of the source CSV).
#[derive(Debug, Clone)]
pub struct LaunchRecord {
    /// Launch site label – the primary grouping dimension.
    pub site: String,
    /// Success/failure flag.
    pub outcome: Outcome,
    /// Payload mass in kg – used for range filtering and scatter x position.
    pub payload_kg: f64,
    /// Booster version category – display-only colour dimension.
    pub booster: String,
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset, immutable after construction.
///
/// Distinct site labels and the observed payload bounds are computed once
/// here and never recomputed; they seed the selector widgets.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
    /// Distinct site labels, sorted.
    sites: Vec<String>,
    /// Distinct booster categories, in first-appearance order.
    boosters: Vec<String>,
    /// Observed (min, max) payload mass; (0, 0) for an empty dataset.
    payload_bounds: (f64, f64),
}

impl LaunchDataset {
    /// Build the dataset and its precomputed indices from loaded records.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut sites: Vec<String> = Vec::new();
        let mut boosters: Vec<String> = Vec::new();
        for rec in &records {
            if !sites.iter().any(|s| s == &rec.site) {
                sites.push(rec.site.clone());
            }
            if !boosters.iter().any(|b| b == &rec.booster) {
                boosters.push(rec.booster.clone());
            }
        }
        sites.sort();

        let payload_bounds = records
            .iter()
            .map(|r| r.payload_kg)
            .fold(None, |acc: Option<(f64, f64)>, p| match acc {
                None => Some((p, p)),
                Some((lo, hi)) => Some((lo.min(p), hi.max(p))),
            })
            .unwrap_or((0.0, 0.0));

        LaunchDataset {
            records,
            sites,
            boosters,
            payload_bounds,
        }
    }

    /// All records in original row order.
    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// One record by row index.
    pub fn record(&self, idx: usize) -> &LaunchRecord {
        &self.records[idx]
    }

    /// Distinct site labels, sorted (for the site selector).
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    /// Distinct booster categories in first-appearance order (for the
    /// scatter colour legend).
    pub fn boosters(&self) -> &[String] {
        &self.boosters
    }

    /// Smallest observed payload mass.
    pub fn min_payload(&self) -> f64 {
        self.payload_bounds.0
    }

    /// Largest observed payload mass.
    pub fn max_payload(&self) -> f64 {
        self.payload_bounds.1
    }

    /// Number of launch records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(site: &str, flag: i64, payload: f64) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            outcome: Outcome::from_flag(flag),
            payload_kg: payload,
            booster: "v1.0".to_string(),
        }
    }

    #[test]
    fn sites_are_distinct_and_sorted() {
        let ds = LaunchDataset::from_records(vec![
            rec("KSC LC-39A", 1, 500.0),
            rec("CCAFS LC-40", 0, 1000.0),
            rec("KSC LC-39A", 1, 2000.0),
        ]);
        assert_eq!(ds.sites(), ["CCAFS LC-40", "KSC LC-39A"]);
    }

    #[test]
    fn payload_bounds_cover_observed_range() {
        let ds = LaunchDataset::from_records(vec![
            rec("A", 1, 4000.0),
            rec("A", 0, 500.0),
            rec("B", 1, 9000.0),
        ]);
        assert_eq!(ds.min_payload(), 500.0);
        assert_eq!(ds.max_payload(), 9000.0);
    }

    #[test]
    fn empty_dataset_has_degenerate_bounds() {
        let ds = LaunchDataset::from_records(Vec::new());
        assert!(ds.is_empty());
        assert_eq!(ds.min_payload(), 0.0);
        assert_eq!(ds.max_payload(), 0.0);
        assert!(ds.sites().is_empty());
    }

    #[test]
    fn outcome_coercion() {
        assert_eq!(Outcome::from_flag(0), Outcome::Failure);
        assert_eq!(Outcome::from_flag(1), Outcome::Success);
        assert_eq!(Outcome::from_flag(1).as_f64(), 1.0);
        assert_eq!(Outcome::from_flag(0).as_f64(), 0.0);
    }
}
