use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::model::{
    DerivedDataset, DerivedRecord, PassFail, Subject, COL_GENDER, COL_LUNCH, COL_MATH, COL_MIN,
    COL_PARENTAL_EDUCATION, COL_READING, COL_TEST_PREP, COL_WRITING,
};

// ---------------------------------------------------------------------------
// KPI summary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct KpiSummary {
    pub total: usize,
    pub pass_count: usize,
    pub fail_count: usize,
    pub pass_percent: f64,
    pub fail_percent: f64,
}

/// Pass/fail counts and percentages. Percentages are 0 for an empty dataset.
pub fn kpi_summary(dataset: &DerivedDataset) -> KpiSummary {
    let total = dataset.len();
    let fail_count = dataset.iter().filter(|r| r.pass_fail() == PassFail::Fail).count();
    let pass_count = total - fail_count;

    let percent = |count: usize| {
        if total > 0 {
            count as f64 / total as f64 * 100.0
        } else {
            0.0
        }
    };

    KpiSummary {
        total,
        pass_count,
        fail_count,
        pass_percent: percent(pass_count),
        fail_percent: percent(fail_count),
    }
}

// ---------------------------------------------------------------------------
// Subject averages
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubjectAverages {
    pub math: f64,
    pub reading: f64,
    pub writing: f64,
}

impl SubjectAverages {
    pub fn get(&self, subject: Subject) -> f64 {
        match subject {
            Subject::Math => self.math,
            Subject::Reading => self.reading,
            Subject::Writing => self.writing,
        }
    }

    fn of<'a, I>(records: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a DerivedRecord>,
    {
        let mut n = 0usize;
        // i128 so sums of many large scores cannot overflow
        let (mut math, mut reading, mut writing) = (0i128, 0i128, 0i128);
        for r in records {
            n += 1;
            math += i128::from(r.math_score());
            reading += i128::from(r.reading_score());
            writing += i128::from(r.writing_score());
        }
        if n == 0 {
            return None;
        }
        let n = n as f64;
        Some(SubjectAverages {
            math: math as f64 / n,
            reading: reading as f64 / n,
            writing: writing as f64 / n,
        })
    }

    /// Each mean rounded to two decimals, as shown in the heatmap.
    pub fn rounded(&self) -> Self {
        let r = |v: f64| (v * 100.0).round() / 100.0;
        SubjectAverages {
            math: r(self.math),
            reading: r(self.reading),
            writing: r(self.writing),
        }
    }
}

/// Mean of each subject, or `None` when there are no rows.
pub fn subject_averages(dataset: &DerivedDataset) -> Option<SubjectAverages> {
    SubjectAverages::of(dataset.iter())
}

// ---------------------------------------------------------------------------
// Group aggregates
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    Gender,
    ParentalEducation,
}

impl GroupBy {
    fn key(self, record: &DerivedRecord) -> &str {
        match self {
            GroupBy::Gender => &record.gender,
            GroupBy::ParentalEducation => &record.parental_education,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupAverages {
    pub group: String,
    pub count: usize,
    pub averages: SubjectAverages,
}

/// Subject means per distinct group value, ordered by group value.
pub fn group_averages(dataset: &DerivedDataset, by: GroupBy) -> Vec<GroupAverages> {
    let mut groups: BTreeMap<&str, Vec<&DerivedRecord>> = BTreeMap::new();
    for r in dataset.iter() {
        groups.entry(by.key(r)).or_default().push(r);
    }

    groups
        .into_iter()
        .filter_map(|(group, rows)| {
            let count = rows.len();
            SubjectAverages::of(rows).map(|averages| GroupAverages {
                group: group.to_string(),
                count,
                averages,
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// At-risk extract
// ---------------------------------------------------------------------------

/// The columns exported for an at-risk student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtRiskRow {
    #[serde(rename = "gender")]
    pub gender: String,
    #[serde(rename = "parental level of education")]
    pub parental_education: String,
    #[serde(rename = "lunch")]
    pub lunch: String,
    #[serde(rename = "test preparation course")]
    pub test_prep_course: String,
    #[serde(rename = "math score")]
    pub math_score: i64,
    #[serde(rename = "reading score")]
    pub reading_score: i64,
    #[serde(rename = "writing score")]
    pub writing_score: i64,
    #[serde(rename = "min score")]
    pub min_score: i64,
}

pub const AT_RISK_COLUMNS: [&str; 8] = [
    COL_GENDER,
    COL_PARENTAL_EDUCATION,
    COL_LUNCH,
    COL_TEST_PREP,
    COL_MATH,
    COL_READING,
    COL_WRITING,
    COL_MIN,
];

impl From<&DerivedRecord> for AtRiskRow {
    fn from(r: &DerivedRecord) -> Self {
        AtRiskRow {
            gender: r.gender.clone(),
            parental_education: r.parental_education.clone(),
            lunch: r.lunch.clone(),
            test_prep_course: r.test_prep_course.clone(),
            math_score: r.math_score(),
            reading_score: r.reading_score(),
            writing_score: r.writing_score(),
            min_score: r.min_score(),
        }
    }
}

/// Failing students, lowest minimum score first. Ties keep dataset order.
pub fn at_risk(dataset: &DerivedDataset) -> Vec<AtRiskRow> {
    let mut rows: Vec<AtRiskRow> = dataset
        .iter()
        .filter(|r| r.is_at_risk())
        .map(AtRiskRow::from)
        .collect();
    // sort_by_key is stable
    rows.sort_by_key(|r| r.min_score);
    rows
}

/// UTF-8 CSV text: a header row, then one line per row. No index column.
pub fn at_risk_csv(rows: &[AtRiskRow]) -> Result<Vec<u8>> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    wtr.write_record(AT_RISK_COLUMNS)
        .context("writing at-risk header")?;
    for row in rows {
        wtr.serialize(row).context("writing at-risk row")?;
    }
    wtr.into_inner().context("flushing at-risk CSV")
}

/// Write the at-risk report to `path`.
pub fn save_at_risk_csv(path: &Path, rows: &[AtRiskRow]) -> Result<()> {
    let bytes = at_risk_csv(rows)?;
    std::fs::write(path, bytes)
        .with_context(|| format!("Failed to write at-risk report: {}", path.display()))?;
    log::info!("Exported {} at-risk rows to {}", rows.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Scores;

    fn rec(gender: &str, edu: &str, math: i64, reading: i64, writing: i64) -> DerivedRecord {
        DerivedRecord::new(
            gender.into(),
            edu.into(),
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
    fn test_kpi_empty_is_zero() {
        let kpi = kpi_summary(&DerivedDataset::default());
        assert_eq!(kpi, KpiSummary::default());
    }

    #[test]
    fn test_kpi_percentages() {
        let ds = DerivedDataset::new(vec![
            rec("male", "master", 30, 90, 90),
            rec("male", "master", 80, 90, 90),
            rec("female", "master", 80, 90, 90),
            rec("female", "master", 80, 90, 90),
        ]);
        let kpi = kpi_summary(&ds);
        assert_eq!(kpi.total, 4);
        assert_eq!(kpi.fail_count, 1);
        assert_eq!(kpi.pass_count, 3);
        assert!((kpi.pass_percent - 75.0).abs() < 1e-9);
        assert!((kpi.pass_percent + kpi.fail_percent - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_subject_averages() {
        let ds = DerivedDataset::new(vec![
            rec("male", "master", 10, 20, 30),
            rec("female", "master", 20, 40, 60),
        ]);
        let avg = subject_averages(&ds).unwrap();
        assert_eq!(avg.math, 15.0);
        assert_eq!(avg.get(Subject::Reading), 30.0);
        assert_eq!(avg.writing, 45.0);
        assert!(subject_averages(&DerivedDataset::default()).is_none());
    }

    #[test]
    fn test_subject_averages_of_large_scores() {
        let big = i64::MAX / 3;
        let ds = DerivedDataset::new(vec![
            rec("male", "master", big, 0, 0),
            rec("male", "master", big, 0, 0),
            rec("male", "master", big, 0, 0),
            rec("male", "master", big, 0, 0),
        ]);
        let avg = subject_averages(&ds).unwrap();
        assert!((avg.math - big as f64).abs() / (big as f64) < 1e-9);
    }

    #[test]
    fn test_group_averages_by_gender() {
        let ds = DerivedDataset::new(vec![
            rec("male", "master", 10, 20, 30),
            rec("female", "bachelor", 50, 50, 50),
            rec("male", "bachelor", 30, 40, 50),
        ]);
        let groups = group_averages(&ds, GroupBy::Gender);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].group, "female");
        assert_eq!(groups[1].group, "male");
        assert_eq!(groups[1].count, 2);
        assert_eq!(groups[1].averages.math, 20.0);

        let by_edu = group_averages(&ds, GroupBy::ParentalEducation);
        assert_eq!(by_edu[0].group, "bachelor");
        assert_eq!(by_edu[0].averages.writing, 50.0);
        assert!(group_averages(&DerivedDataset::default(), GroupBy::Gender).is_empty());
    }

    #[test]
    fn test_rounded() {
        let avg = SubjectAverages {
            math: 46.666,
            reading: 50.0,
            writing: 0.005,
        }
        .rounded();
        assert_eq!(avg.math, 46.67);
        assert_eq!(avg.reading, 50.0);
    }

    #[test]
    fn test_at_risk_sorted_and_stable() {
        let ds = DerivedDataset::new(vec![
            rec("male", "a", 35, 90, 90),
            rec("female", "b", 90, 90, 90),
            rec("female", "c", 10, 90, 90),
            rec("male", "d", 90, 35, 90),
        ]);
        let rows = at_risk(&ds);
        let order: Vec<&str> = rows.iter().map(|r| r.parental_education.as_str()).collect();
        assert_eq!(order, vec!["c", "a", "d"]);
    }

    #[test]
    fn test_at_risk_csv_header_only_when_empty() {
        let bytes = at_risk_csv(&[]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(
            text,
            "gender,parental level of education,lunch,test preparation course,math score,reading score,writing score,min score\n"
        );
    }
}
