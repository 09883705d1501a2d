use std::collections::BTreeSet;
use std::fmt;

use super::model::{DerivedDataset, DerivedRecord, FilteredDataset};

// ---------------------------------------------------------------------------
// Filterable columns
// ---------------------------------------------------------------------------

/// The categorical columns a user can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FilterColumn {
    Gender,
    ParentalEducation,
    TestPrepCourse,
}

impl FilterColumn {
    pub const ALL: [FilterColumn; 3] = [
        FilterColumn::Gender,
        FilterColumn::ParentalEducation,
        FilterColumn::TestPrepCourse,
    ];

    /// The record's value for this column.
    pub fn value_of(self, record: &DerivedRecord) -> &str {
        match self {
            FilterColumn::Gender => &record.gender,
            FilterColumn::ParentalEducation => &record.parental_education,
            FilterColumn::TestPrepCourse => &record.test_prep_course,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterColumn::Gender => "Gender",
            FilterColumn::ParentalEducation => "Parental Education",
            FilterColumn::TestPrepCourse => "Test Prep Course",
        }
    }
}

impl fmt::Display for FilterColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Filter predicate: which values are accepted per column
// ---------------------------------------------------------------------------

/// Accepted values per filter column.
///
/// An empty set accepts nothing; there is no implicit "select all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub genders: BTreeSet<String>,
    pub parental_education: BTreeSet<String>,
    pub test_prep_course: BTreeSet<String>,
}

impl FilterSelection {
    /// Every value observed in `dataset` selected, i.e. no filtering.
    pub fn all(dataset: &DerivedDataset) -> Self {
        let mut selection = FilterSelection::default();
        for col in FilterColumn::ALL {
            *selection.get_mut(col) = dataset.distinct(|r| col.value_of(r));
        }
        selection
    }

    pub fn get(&self, column: FilterColumn) -> &BTreeSet<String> {
        match column {
            FilterColumn::Gender => &self.genders,
            FilterColumn::ParentalEducation => &self.parental_education,
            FilterColumn::TestPrepCourse => &self.test_prep_course,
        }
    }

    pub fn get_mut(&mut self, column: FilterColumn) -> &mut BTreeSet<String> {
        match column {
            FilterColumn::Gender => &mut self.genders,
            FilterColumn::ParentalEducation => &mut self.parental_education,
            FilterColumn::TestPrepCourse => &mut self.test_prep_course,
        }
    }

    /// Toggle a single value in a column's selection.
    pub fn toggle(&mut self, column: FilterColumn, value: &str) {
        let selected = self.get_mut(column);
        if !selected.remove(value) {
            selected.insert(value.to_string());
        }
    }

    /// A record passes when every column's value is selected.
    pub fn accepts(&self, record: &DerivedRecord) -> bool {
        FilterColumn::ALL
            .iter()
            .all(|&col| self.get(col).contains(col.value_of(record)))
    }
}

/// Keep the rows accepted by `selection`, preserving order.
pub fn apply(dataset: &DerivedDataset, selection: &FilterSelection) -> FilteredDataset {
    let records = dataset
        .iter()
        .filter(|r| selection.accepts(r))
        .cloned()
        .collect();
    FilteredDataset::new(records)
}
