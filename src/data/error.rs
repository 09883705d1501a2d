use std::path::PathBuf;

use thiserror::Error;

use super::model::Subject;

/// A data file was present but could not be turned into a dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("cannot read CSV header: {0}")]
    Header(#[source] csv::Error),

    #[error("missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("CSV row {row}: {source}")]
    Parse {
        row: usize,
        #[source]
        source: csv::Error,
    },
}

/// A loaded record could not be derived.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DerivationError {
    #[error("row {row}: missing value for '{subject}'")]
    MissingScore { row: usize, subject: Subject },

    #[error("row {row}: score total does not fit in a 64-bit integer")]
    ScoreOverflow { row: usize },
}
