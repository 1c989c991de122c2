use crate::color::ColorMap;
use crate::data::aggregate::{success_counts, GroupCounts};
use crate::data::filter::{filtered_indices, PayloadRange, SiteSelection};
use crate::data::model::LaunchDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// This is the reactive controller: it owns the two selection inputs
/// (site, payload range) and the two derived output slots (pie counts,
/// visible row indices). Any input change goes through
/// [`AppState::on_input_changed`], which recomputes both outputs
/// synchronously before the next event is handled.
pub struct AppState {
    /// Loaded dataset (None until a file is loaded). Read-only after load.
    pub dataset: Option<LaunchDataset>,

    /// Selected launch site.
    pub site: SiteSelection,

    /// Selected payload interval, bounded by the dataset's payload range.
    pub payload_range: PayloadRange,

    /// Derived: pie-chart counts for the current site selection.
    pub pie_counts: GroupCounts,

    /// Derived: indices of records passing site + range filters.
    pub visible_indices: Vec<usize>,

    /// Booster category → colour, for the scatter legend.
    pub color_map: Option<ColorMap>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            site: SiteSelection::All,
            payload_range: PayloadRange::new(0.0, 0.0),
            pie_counts: Vec::new(),
            visible_indices: Vec::new(),
            color_map: None,
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Build a controller around an already-loaded dataset.
    pub fn with_dataset(dataset: LaunchDataset) -> Self {
        let mut state = Self::default();
        state.set_dataset(dataset);
        state
    }

    /// Ingest a newly loaded dataset, reset selections to their initial
    /// value (all sites, full payload range) and derive both views.
    pub fn set_dataset(&mut self, dataset: LaunchDataset) {
        self.site = SiteSelection::All;
        self.payload_range = PayloadRange::full(&dataset);
        self.color_map = Some(ColorMap::new(dataset.boosters().iter().cloned()));
        self.dataset = Some(dataset);
        self.status_message = None;
        self.loading = false;
        self.on_input_changed();
    }

    /// Recompute both derived views from the current selections.
    ///
    /// Single entry point for the UI layer: whichever widget changed,
    /// both the pie counts and the visible indices are rebuilt.
    pub fn on_input_changed(&mut self) {
        if let Some(ds) = &self.dataset {
            self.pie_counts = success_counts(ds, &self.site);
            self.visible_indices = filtered_indices(ds, &self.site, &self.payload_range);
        } else {
            self.pie_counts = Vec::new();
            self.visible_indices = Vec::new();
        }
    }

    /// Change the selected site.
    pub fn set_site(&mut self, site: SiteSelection) {
        self.site = site;
        self.on_input_changed();
    }

    /// Change the selected payload interval, keeping `lo <= hi`.
    pub fn set_payload_range(&mut self, lo: f64, hi: f64) {
        self.payload_range = PayloadRange::new(lo.min(hi), lo.max(hi));
        self.on_input_changed();
    }

    /// Reset the payload interval to the dataset's full observed range.
    pub fn reset_payload_range(&mut self) {
        if let Some(ds) = &self.dataset {
            self.payload_range = PayloadRange::full(ds);
        }
        self.on_input_changed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::aggregate::GroupKey;
    use crate::data::model::{LaunchRecord, Outcome};

    fn rec(site: &str, flag: i64, payload: f64) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            outcome: Outcome::from_flag(flag),
            payload_kg: payload,
            booster: "FT".to_string(),
        }
    }

    fn dataset() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            rec("X", 1, 500.0),
            rec("Y", 0, 4000.0),
            rec("X", 0, 9000.0),
        ])
    }

    #[test]
    fn initial_state_is_all_sites_over_full_range() {
        let state = AppState::with_dataset(dataset());
        assert_eq!(state.site, SiteSelection::All);
        assert_eq!(state.payload_range, PayloadRange::new(500.0, 9000.0));
        // Both outputs derived immediately.
        assert_eq!(state.visible_indices, vec![0, 1, 2]);
        assert_eq!(state.pie_counts.len(), 2);
    }

    #[test]
    fn site_change_recomputes_both_outputs() {
        let mut state = AppState::with_dataset(dataset());
        state.set_site(SiteSelection::Site("X".to_string()));
        assert_eq!(state.visible_indices, vec![0, 2]);
        assert_eq!(
            state.pie_counts,
            vec![
                (GroupKey::Outcome(Outcome::Success), 1),
                (GroupKey::Outcome(Outcome::Failure), 1),
            ]
        );
    }

    #[test]
    fn range_change_recomputes_visible_indices() {
        let mut state = AppState::with_dataset(dataset());
        state.set_payload_range(1000.0, 5000.0);
        assert_eq!(state.visible_indices, vec![1]);
        // Pie counts depend only on the site selection.
        assert_eq!(state.pie_counts.len(), 2);
    }

    #[test]
    fn inverted_range_input_is_normalised() {
        let mut state = AppState::with_dataset(dataset());
        state.set_payload_range(5000.0, 1000.0);
        assert_eq!(state.payload_range, PayloadRange::new(1000.0, 5000.0));
    }

    #[test]
    fn stale_site_selection_yields_empty_views() {
        let mut state = AppState::with_dataset(dataset());
        state.set_site(SiteSelection::Site("gone".to_string()));
        assert!(state.pie_counts.is_empty());
        assert!(state.visible_indices.is_empty());
    }

    #[test]
    fn reset_restores_full_range() {
        let mut state = AppState::with_dataset(dataset());
        state.set_payload_range(1000.0, 2000.0);
        state.reset_payload_range();
        assert_eq!(state.payload_range, PayloadRange::new(500.0, 9000.0));
        assert_eq!(state.visible_indices, vec![0, 1, 2]);
    }

    #[test]
    fn new_dataset_resets_selection_state() {
        let mut state = AppState::with_dataset(dataset());
        state.set_site(SiteSelection::Site("X".to_string()));
        state.set_dataset(LaunchDataset::from_records(vec![rec("Z", 1, 100.0)]));
        assert_eq!(state.site, SiteSelection::All);
        assert_eq!(state.payload_range, PayloadRange::new(100.0, 100.0));
        assert_eq!(state.visible_indices, vec![0]);
    }
}
