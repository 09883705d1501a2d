use super::error::DerivationError;
use super::model::{Dataset, DerivedDataset, DerivedRecord, Scores, StudentRecord, Subject};

/// Compute total, average, minimum and pass/fail for every record.
///
/// Any record with a missing score fails the whole derivation so the
/// aggregates are never computed over a silently shortened dataset. Row
/// numbers in errors are 1-based.
pub fn derive(dataset: &Dataset) -> Result<DerivedDataset, DerivationError> {
    let records = dataset
        .records
        .iter()
        .enumerate()
        .map(|(i, rec)| derive_record(i + 1, rec))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(DerivedDataset::new(records))
}

fn derive_record(row: usize, rec: &StudentRecord) -> Result<DerivedRecord, DerivationError> {
    let score = |value: Option<i64>, subject: Subject| -> Result<i64, DerivationError> {
        let v = value.ok_or(DerivationError::MissingScore { row, subject })?;
        if !(0..=100).contains(&v) {
            log::warn!("row {row}: {subject} = {v} is outside 0-100");
        }
        Ok(v)
    };

    let scores = Scores {
        math: score(rec.math_score, Subject::Math)?,
        reading: score(rec.reading_score, Subject::Reading)?,
        writing: score(rec.writing_score, Subject::Writing)?,
    };
    if scores.checked_total().is_none() {
        return Err(DerivationError::ScoreOverflow { row });
    }

    Ok(DerivedRecord::new(
        rec.gender.clone(),
        rec.parental_education.clone(),
        rec.lunch.clone(),
        rec.test_prep_course.clone(),
        scores,
    ))
}
