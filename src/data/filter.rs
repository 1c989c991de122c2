use super::model::LaunchDataset;

// ---------------------------------------------------------------------------
// Selection state: which site and which payload interval
// ---------------------------------------------------------------------------

/// The site selector value: every site, or one specific site label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelection {
    All,
    Site(String),
}

impl SiteSelection {
    /// Whether a record with the given site label passes this selection.
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(s) => s == site,
        }
    }

    /// Label shown in the selector widget.
    pub fn label(&self) -> &str {
        match self {
            SiteSelection::All => "All Sites",
            SiteSelection::Site(s) => s,
        }
    }
}

/// Closed payload-mass interval `[lo, hi]`, bounded by the dataset's
/// observed min/max at load time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub lo: f64,
    pub hi: f64,
}

impl PayloadRange {
    pub fn new(lo: f64, hi: f64) -> Self {
        PayloadRange { lo, hi }
    }

    /// The full observed range of a dataset (degenerate [0, 0] when empty).
    pub fn full(dataset: &LaunchDataset) -> Self {
        PayloadRange {
            lo: dataset.min_payload(),
            hi: dataset.max_payload(),
        }
    }

    /// Closed-interval membership test.
    pub fn contains(&self, payload: f64) -> bool {
        self.lo <= payload && payload <= self.hi
    }
}

// ---------------------------------------------------------------------------
// Range filter
// ---------------------------------------------------------------------------

/// Return indices of records passing both the site selection and the
/// payload range, in original row order.
///
/// An empty result is valid data (nothing matched), never an error; a
/// site label absent from the dataset simply matches zero rows.
pub fn filtered_indices(
    dataset: &LaunchDataset,
    site: &SiteSelection,
    range: &PayloadRange,
) -> Vec<usize> {
    dataset
        .records()
        .iter()
        .enumerate()
        .filter(|(_, rec)| site.matches(&rec.site) && range.contains(rec.payload_kg))
        .map(|(i, _)| i)
        .collect()
}
