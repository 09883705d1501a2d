//! Shared test utilities and fixture generators

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;

use student_dashboard::data::derive::derive;
use student_dashboard::data::model::{Dataset, DerivedDataset, StudentRecord};
use tempfile::TempDir;

pub const HEADER: &str = "gender,parental level of education,lunch,test preparation course,math score,reading score,writing score";

/// Build a record with the given categorical values and scores.
pub fn student(gender: &str, education: &str, prep: &str, scores: [i64; 3]) -> StudentRecord {
    StudentRecord {
        gender: gender.to_string(),
        parental_education: education.to_string(),
        lunch: "standard".to_string(),
        test_prep_course: prep.to_string(),
        math_score: Some(scores[0]),
        reading_score: Some(scores[1]),
        writing_score: Some(scores[2]),
    }
}

/// A small dataset with known pass/fail outcomes.
///
/// - rows 0, 2, 4 fail (min score 35, 12, 35)
/// - rows 1, 3, 5 pass
pub fn create_test_dataset() -> Dataset {
    Dataset::new(vec![
        student("male", "master", "none", [35, 80, 90]),
        student("female", "bachelor", "completed", [70, 75, 80]),
        student("female", "high school", "none", [55, 12, 60]),
        student("male", "associate degree", "completed", [41, 41, 41]),
        student("female", "master", "none", [90, 35, 88]),
        student("male", "bachelor", "none", [95, 99, 100]),
    ])
}

pub fn create_derived_dataset() -> DerivedDataset {
    derive(&create_test_dataset()).unwrap()
}

/// Write `lines` (header included) into a CSV inside a fresh temp dir.
pub fn write_csv(lines: &[&str]) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("StudentsPerformance.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    (temp_dir, path)
}
