use std::collections::BTreeSet;

use crate::data::filter::{apply, FilterColumn, FilterSelection};
use crate::data::model::{DerivedDataset, FilteredDataset};
use crate::data::report::Report;

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Overview,
    Trends,
    AtRisk,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Overview, Tab::Trends, Tab::AtRisk];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Overview => "🏠 Overview",
            Tab::Trends => "📊 Trends & Visuals",
            Tab::AtRisk => "⚠ At-Risk Students",
        }
    }
}

// ---------------------------------------------------------------------------
// Session state
// ---------------------------------------------------------------------------

/// One user's session: the immutable derived dataset plus everything the
/// user can change, independent of rendering.
pub struct Session {
    /// Derived rows, fixed for the whole session.
    dataset: DerivedDataset,

    /// Every distinct value per filter column, for the filter widgets.
    choices: FilterSelection,

    /// Current filter selections. Only changed through methods that refilter.
    filters: FilterSelection,

    /// Rows passing the current filters (cached).
    filtered: FilteredDataset,

    /// Aggregates over `filtered` (cached).
    report: Report,

    /// Whether the rows came from the seeded sample instead of a file.
    pub synthetic: bool,

    pub tab: Tab,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Session {
    /// Start a session with every value selected.
    pub fn new(dataset: DerivedDataset, synthetic: bool) -> Self {
        let choices = FilterSelection::all(&dataset);
        let mut session = Session {
            filters: choices.clone(),
            choices,
            filtered: FilteredDataset::default(),
            report: Report::default(),
            dataset,
            synthetic,
            tab: Tab::default(),
            status_message: None,
        };
        session.refilter();
        session
    }

    pub fn dataset(&self) -> &DerivedDataset {
        &self.dataset
    }

    pub fn filtered(&self) -> &FilteredDataset {
        &self.filtered
    }

    pub fn report(&self) -> &Report {
        &self.report
    }

    pub fn filters(&self) -> &FilterSelection {
        &self.filters
    }

    pub fn choices(&self, column: FilterColumn) -> &BTreeSet<String> {
        self.choices.get(column)
    }

    /// Recompute the filtered rows and every aggregate after a filter change.
    pub fn refilter(&mut self) {
        self.filtered = apply(&self.dataset, &self.filters);
        self.report = Report::build(&self.filtered);
        log::debug!(
            "Filter applied: {} of {} rows, {} at risk",
            self.filtered.len(),
            self.dataset.len(),
            self.report.at_risk.len()
        );
    }

    /// Toggle a single value in a column's filter.
    pub fn toggle_filter_value(&mut self, column: FilterColumn, value: &str) {
        self.filters.toggle(column, value);
        self.refilter();
    }

    /// Select all values in a column.
    pub fn select_all(&mut self, column: FilterColumn) {
        *self.filters.get_mut(column) = self.choices.get(column).clone();
        self.refilter();
    }

    /// Deselect all values in a column.
    pub fn select_none(&mut self, column: FilterColumn) {
        self.filters.get_mut(column).clear();
        self.refilter();
    }
}
