use std::io::Read;
use std::path::Path;

use super::error::LoadError;
use super::model::{Dataset, StudentRecord, REQUIRED_COLUMNS};
use super::sample;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Where the dataset came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    File,
    Synthetic,
}

#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub dataset: Dataset,
    pub source: DataSource,
}

impl LoadedDataset {
    pub fn is_synthetic(&self) -> bool {
        self.source == DataSource::Synthetic
    }
}

/// Load the dataset at `path`, or fall back to the seeded sample if the file
/// does not exist.
///
/// A file that exists but is malformed is an error; there is no fallback once
/// a file is present.
pub fn load_or_generate(path: &Path) -> Result<LoadedDataset, LoadError> {
    if !path.exists() {
        log::warn!(
            "{} not found, generating {} synthetic records (seed {})",
            path.display(),
            sample::SAMPLE_SIZE,
            sample::SAMPLE_SEED
        );
        return Ok(LoadedDataset {
            dataset: sample::default_sample(),
            source: DataSource::Synthetic,
        });
    }

    let dataset = load_csv(path)?;
    log::info!("Loaded {} records from {}", dataset.len(), path.display());
    Ok(LoadedDataset {
        dataset,
        source: DataSource::File,
    })
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row naming at least the seven required columns, in any
/// order. Extra columns are ignored. Whitespace around every field is trimmed.
pub fn load_csv(path: &Path) -> Result<Dataset, LoadError> {
    let reader = reader_builder()
        .from_path(path)
        .map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    read_records(reader)
}

/// Same as [`load_csv`] for an in-memory or streamed source.
pub fn load_csv_reader<R: Read>(rdr: R) -> Result<Dataset, LoadError> {
    read_records(reader_builder().from_reader(rdr))
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.trim(csv::Trim::All);
    builder
}

fn read_records<R: Read>(mut reader: csv::Reader<R>) -> Result<Dataset, LoadError> {
    let headers = reader.headers().map_err(LoadError::Header)?.clone();

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(|col| col.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(LoadError::MissingColumns(missing));
    }

    let mut records = Vec::new();
    for (i, result) in reader.deserialize::<StudentRecord>().enumerate() {
        let record = result.map_err(|source| LoadError::Parse { row: i + 1, source })?;
        records.push(record);
    }

    Ok(Dataset::new(records))
}
