use std::collections::BTreeSet;
use std::path::PathBuf;

use clap::Parser;

use crate::data::filter::{FilterColumn, FilterSelection};

pub const DEFAULT_DATA_FILE: &str = "StudentsPerformance.csv";
pub const EXPORT_FILE_NAME: &str = "smit_at_risk_report.csv";

/// Student exam results dashboard
#[derive(Parser, Debug)]
#[command(name = "student-dashboard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Dataset CSV. A seeded sample is generated when the file does not exist.
    #[arg(short, long, default_value = DEFAULT_DATA_FILE)]
    pub data: PathBuf,

    /// Write the at-risk report to this file and exit without opening a window
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Keep only these genders (repeatable; headless export only)
    #[arg(long, value_name = "VALUE")]
    pub gender: Vec<String>,

    /// Keep only these parental education levels (repeatable; headless export only)
    #[arg(long, value_name = "VALUE")]
    pub education: Vec<String>,

    /// Keep only these test preparation values (repeatable; headless export only)
    #[arg(long = "test-prep", value_name = "VALUE")]
    pub test_prep: Vec<String>,
}

impl Cli {
    /// Start from `all` and narrow every column the user named on the
    /// command line.
    pub fn selection(&self, all: &FilterSelection) -> FilterSelection {
        let mut selection = all.clone();
        for (column, values) in [
            (FilterColumn::Gender, &self.gender),
            (FilterColumn::ParentalEducation, &self.education),
            (FilterColumn::TestPrepCourse, &self.test_prep),
        ] {
            if !values.is_empty() {
                *selection.get_mut(column) = values.iter().cloned().collect::<BTreeSet<_>>();
            }
        }
        selection
    }
}
