//! Integration tests for derivation, filtering and aggregates

use std::collections::BTreeSet;

use student_dashboard::data::derive::derive;
use student_dashboard::data::error::DerivationError;
use student_dashboard::data::filter::{apply, FilterColumn, FilterSelection};
use student_dashboard::data::loader::load_csv_reader;
use student_dashboard::data::model::{Dataset, PassFail, Subject, FAIL_THRESHOLD};
use student_dashboard::data::report::Report;
use student_dashboard::data::sample::default_sample;
use student_dashboard::data::summary::{group_averages, kpi_summary, subject_averages, GroupBy};

mod common;
use common::{create_derived_dataset, student};

#[test]
fn test_derived_metric_bounds_on_sample() {
    let derived = derive(&default_sample()).unwrap();

    for r in derived.iter() {
        let s = r.scores();
        assert_eq!(r.total_score(), s.math + s.reading + s.writing);
        assert!(r.min_score() as f64 <= r.average_score());
        assert!(r.average_score() <= s.max() as f64);
        assert_eq!(
            r.pass_fail() == PassFail::Fail,
            r.min_score() <= FAIL_THRESHOLD
        );
    }
}

#[test]
fn test_single_record_example() {
    let ds = Dataset::new(vec![student("male", "master", "none", [30, 50, 60])]);

    let derived = derive(&ds).unwrap();
    let r = &derived.records[0];

    assert_eq!(r.total_score(), 140);
    assert!((r.average_score() - 46.67).abs() < 0.005);
    assert_eq!(r.min_score(), 30);
    assert_eq!(r.pass_fail(), PassFail::Fail);
}

#[test]
fn test_boundary_forty_fails_forty_one_passes() {
    let ds = Dataset::new(vec![
        student("male", "master", "none", [40, 100, 100]),
        student("male", "master", "none", [41, 100, 100]),
    ]);

    let derived = derive(&ds).unwrap();

    assert_eq!(derived.records[0].pass_fail(), PassFail::Fail);
    assert_eq!(derived.records[1].pass_fail(), PassFail::Pass);
}

#[test]
fn test_missing_score_is_derivation_error() {
    let mut ds = Dataset::new(vec![student("male", "master", "none", [40, 100, 100])]);
    ds.records[0].writing_score = None;

    assert_eq!(
        derive(&ds).unwrap_err(),
        DerivationError::MissingScore {
            row: 1,
            subject: Subject::Writing
        }
    );
}

#[test]
fn test_huge_loaded_score_is_derivation_error() {
    let text = format!(
        "{}\nfemale,bachelor,standard,none,60,60,60\nmale,master,standard,none,{},1,1\n",
        common::HEADER,
        i64::MAX
    );
    let ds = load_csv_reader(text.as_bytes()).unwrap();

    assert_eq!(
        derive(&ds).unwrap_err(),
        DerivationError::ScoreOverflow { row: 2 }
    );
}

#[test]
fn test_full_selection_returns_dataset_unchanged() {
    let derived = create_derived_dataset();

    let filtered = apply(&derived, &FilterSelection::all(&derived));

    assert_eq!(filtered, derived);
}

#[test]
fn test_filtering_is_idempotent() {
    let derived = create_derived_dataset();
    let mut selection = FilterSelection::all(&derived);
    selection.toggle(FilterColumn::ParentalEducation, "master");
    selection.toggle(FilterColumn::TestPrepCourse, "completed");

    let once = apply(&derived, &selection);
    let twice = apply(&once, &selection);

    assert_eq!(once.len(), 2);
    assert_eq!(once, twice);
}

#[test]
fn test_empty_selection_for_any_column_is_empty_result() {
    let derived = create_derived_dataset();

    for column in FilterColumn::ALL {
        let mut selection = FilterSelection::all(&derived);
        selection.get_mut(column).clear();
        assert!(
            apply(&derived, &selection).is_empty(),
            "emptying {column} should match nothing"
        );
    }
}

#[test]
fn test_excluding_female_keeps_only_male() {
    let ds = Dataset::new(vec![
        student("male", "master", "none", [60, 60, 60]),
        student("female", "master", "none", [70, 70, 70]),
    ]);
    let derived = derive(&ds).unwrap();
    let mut selection = FilterSelection::all(&derived);
    selection.genders = BTreeSet::from(["male".to_string()]);

    let filtered = apply(&derived, &selection);

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered.records[0].gender, "male");
    assert_eq!(filtered.records[0].math_score(), 60);
}

#[test]
fn test_kpi_percentages_sum_to_hundred() {
    let derived = create_derived_dataset();

    let kpi = kpi_summary(&derived);

    assert_eq!(kpi.total, 6);
    assert_eq!(kpi.fail_count, 3);
    assert_eq!(kpi.pass_count, 3);
    assert!((kpi.pass_percent + kpi.fail_percent - 100.0).abs() < 1e-9);
}

#[test]
fn test_empty_filtered_dataset_degrades_to_zero() {
    let derived = create_derived_dataset();
    let mut selection = FilterSelection::all(&derived);
    selection.genders.clear();

    let report = Report::build(&apply(&derived, &selection));

    assert_eq!(report.kpi.total, 0);
    assert_eq!(report.kpi.pass_percent, 0.0);
    assert_eq!(report.kpi.fail_percent, 0.0);
    assert!(report.subject_averages.is_none());
    assert!(report.by_gender.is_empty());
    assert!(report.by_parental_education.is_empty());
    assert!(report.at_risk.is_empty());
}

#[test]
fn test_subject_and_group_averages() {
    let derived = create_derived_dataset();

    let avg = subject_averages(&derived).unwrap();
    assert!((avg.math - (35 + 70 + 55 + 41 + 90 + 95) as f64 / 6.0).abs() < 1e-9);

    let by_gender = group_averages(&derived, GroupBy::Gender);
    let groups: Vec<&str> = by_gender.iter().map(|g| g.group.as_str()).collect();
    assert_eq!(groups, vec!["female", "male"]);
    assert_eq!(by_gender[0].count, 3);
    assert!((by_gender[0].averages.reading - (75 + 12 + 35) as f64 / 3.0).abs() < 1e-9);

    let by_edu = group_averages(&derived, GroupBy::ParentalEducation);
    assert_eq!(by_edu.len(), 4);
    let master = by_edu.iter().find(|g| g.group == "master").unwrap();
    assert_eq!(master.averages.writing, 89.0);
}
