/// Data layer: core types, loading, derivation, filtering and aggregates.
///
/// Architecture:
/// ```text
///  StudentsPerformance.csv        (absent → seeded sample)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  derive   │  total / average / min / pass-fail → DerivedDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  FilterSelection → FilteredDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  report   │  KPIs, subject + group means, at-risk extract
///   └──────────┘
/// ```

pub mod derive;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod report;
pub mod sample;
pub mod summary;
