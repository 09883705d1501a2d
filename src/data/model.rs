use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A subject score at or below this value fails the student overall.
pub const FAIL_THRESHOLD: i64 = 40;

/// CSV header names, in the order the source file lists them.
pub const COL_GENDER: &str = "gender";
pub const COL_PARENTAL_EDUCATION: &str = "parental level of education";
pub const COL_LUNCH: &str = "lunch";
pub const COL_TEST_PREP: &str = "test preparation course";
pub const COL_MATH: &str = "math score";
pub const COL_READING: &str = "reading score";
pub const COL_WRITING: &str = "writing score";
pub const COL_MIN: &str = "min score";

pub const REQUIRED_COLUMNS: [&str; 7] = [
    COL_GENDER,
    COL_PARENTAL_EDUCATION,
    COL_LUNCH,
    COL_TEST_PREP,
    COL_MATH,
    COL_READING,
    COL_WRITING,
];

// ---------------------------------------------------------------------------
// StudentRecord – one row of the input CSV
// ---------------------------------------------------------------------------

/// A single student as read from the dataset.
///
/// Scores are optional so an empty cell survives loading and is reported
/// by the derivation step instead of aborting the parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    #[serde(rename = "gender")]
    pub gender: String,
    #[serde(rename = "parental level of education")]
    pub parental_education: String,
    #[serde(rename = "lunch")]
    pub lunch: String,
    #[serde(rename = "test preparation course")]
    pub test_prep_course: String,
    #[serde(rename = "math score")]
    pub math_score: Option<i64>,
    #[serde(rename = "reading score")]
    pub reading_score: Option<i64>,
    #[serde(rename = "writing score")]
    pub writing_score: Option<i64>,
}

// ---------------------------------------------------------------------------
// Scores – the three checked subject scores
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    Math,
    Reading,
    Writing,
}

impl Subject {
    pub const ALL: [Subject; 3] = [Subject::Math, Subject::Reading, Subject::Writing];

    pub fn column(self) -> &'static str {
        match self {
            Subject::Math => COL_MATH,
            Subject::Reading => COL_READING,
            Subject::Writing => COL_WRITING,
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scores {
    pub math: i64,
    pub reading: i64,
    pub writing: i64,
}

impl Scores {
    pub fn get(&self, subject: Subject) -> i64 {
        match subject {
            Subject::Math => self.math,
            Subject::Reading => self.reading,
            Subject::Writing => self.writing,
        }
    }

    /// Sum of the three scores, saturating at the `i64` bounds.
    pub fn total(&self) -> i64 {
        self.math
            .saturating_add(self.reading)
            .saturating_add(self.writing)
    }

    /// Sum of the three scores, `None` on overflow.
    pub fn checked_total(&self) -> Option<i64> {
        self.math
            .checked_add(self.reading)?
            .checked_add(self.writing)
    }

    pub fn min(&self) -> i64 {
        self.math.min(self.reading).min(self.writing)
    }

    pub fn max(&self) -> i64 {
        self.math.max(self.reading).max(self.writing)
    }
}

// ---------------------------------------------------------------------------
// PassFail
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PassFail {
    Pass,
    Fail,
}

impl PassFail {
    /// `Fail` iff the lowest subject score is at or below [`FAIL_THRESHOLD`].
    pub fn classify(min_score: i64) -> Self {
        if min_score <= FAIL_THRESHOLD {
            PassFail::Fail
        } else {
            PassFail::Pass
        }
    }
}

impl fmt::Display for PassFail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PassFail::Pass => f.write_str("Pass"),
            PassFail::Fail => f.write_str("Fail"),
        }
    }
}

// ---------------------------------------------------------------------------
// DerivedRecord – a record plus its summary metrics
// ---------------------------------------------------------------------------

/// A student together with the metrics computed from its three scores.
///
/// The metric fields are private and only set by [`DerivedRecord::new`], so
/// they can never drift from the scores they were computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedRecord {
    pub gender: String,
    pub parental_education: String,
    pub lunch: String,
    pub test_prep_course: String,
    scores: Scores,
    total_score: i64,
    average_score: f64,
    min_score: i64,
    pass_fail: PassFail,
}

impl DerivedRecord {
    pub fn new(
        gender: String,
        parental_education: String,
        lunch: String,
        test_prep_course: String,
        scores: Scores,
    ) -> Self {
        let total_score = scores.total();
        let min_score = scores.min();
        DerivedRecord {
            gender,
            parental_education,
            lunch,
            test_prep_course,
            scores,
            total_score,
            average_score: total_score as f64 / 3.0,
            min_score,
            pass_fail: PassFail::classify(min_score),
        }
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    pub fn math_score(&self) -> i64 {
        self.scores.math
    }

    pub fn reading_score(&self) -> i64 {
        self.scores.reading
    }

    pub fn writing_score(&self) -> i64 {
        self.scores.writing
    }

    pub fn total_score(&self) -> i64 {
        self.total_score
    }

    pub fn average_score(&self) -> f64 {
        self.average_score
    }

    pub fn min_score(&self) -> i64 {
        self.min_score
    }

    pub fn pass_fail(&self) -> PassFail {
        self.pass_fail
    }

    pub fn is_at_risk(&self) -> bool {
        self.pass_fail == PassFail::Fail
    }
}

// ---------------------------------------------------------------------------
// Dataset / DerivedDataset
// ---------------------------------------------------------------------------

/// The loaded rows, immutable after loading.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub records: Vec<StudentRecord>,
}

impl Dataset {
    pub fn new(records: Vec<StudentRecord>) -> Self {
        Dataset { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Derived rows. Filtering produces another `DerivedDataset`, so a filtered
/// view can be filtered again.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DerivedDataset {
    pub records: Vec<DerivedRecord>,
}

pub type FilteredDataset = DerivedDataset;

impl DerivedDataset {
    pub fn new(records: Vec<DerivedRecord>) -> Self {
        DerivedDataset { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DerivedRecord> {
        self.records.iter()
    }

    /// Sorted set of distinct values taken by `f` over all rows.
    pub fn distinct<F>(&self, f: F) -> BTreeSet<String>
    where
        F: Fn(&DerivedRecord) -> &str,
    {
        self.records.iter().map(|r| f(r).to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(math: i64, reading: i64, writing: i64) -> DerivedRecord {
        DerivedRecord::new(
            "male".into(),
            "bachelor".into(),
            "standard".into(),
            "none".into(),
            Scores {
                math,
                reading,
                writing,
            },
        )
    }

    #[test]
    fn test_single_record_metrics() {
        let r = record(30, 50, 60);
        assert_eq!(r.total_score(), 140);
        assert!((r.average_score() - 46.67).abs() < 0.01);
        assert_eq!(r.min_score(), 30);
        assert_eq!(r.pass_fail(), PassFail::Fail);
    }

    #[test]
    fn test_threshold_boundary() {
        assert_eq!(record(40, 90, 90).pass_fail(), PassFail::Fail);
        assert_eq!(record(41, 90, 90).pass_fail(), PassFail::Pass);
        assert_eq!(record(90, 90, 0).pass_fail(), PassFail::Fail);
    }

    #[test]
    fn test_average_between_min_and_max() {
        for (m, r, w) in [(0, 0, 0), (100, 0, 50), (33, 34, 35), (100, 100, 100)] {
            let rec = record(m, r, w);
            assert!(rec.min_score() as f64 <= rec.average_score());
            assert!(rec.average_score() <= rec.scores().max() as f64);
            assert_eq!(rec.total_score(), m + r + w);
        }
    }

    #[test]
    fn test_pass_fail_display() {
        assert_eq!(PassFail::Pass.to_string(), "Pass");
        assert_eq!(PassFail::Fail.to_string(), "Fail");
    }
}
