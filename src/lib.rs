//! Student exam results dashboard.
//!
//! Loads a CSV of exam scores (or a seeded sample), derives per-student
//! metrics, filters by categorical attributes and renders KPI, chart and
//! at-risk views.

pub mod app;
pub mod cli;
pub mod color;
pub mod data;
pub mod state;
pub mod ui;
