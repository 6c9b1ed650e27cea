/// AppLens Core -- dataset loading, the filter-aggregate engine, and chart data.
///
/// This crate contains all business logic with zero UI dependencies.
/// It is designed to be reusable across different frontends (GUI, CLI, web).
///
/// # Modules
///
/// - [`model`] -- App records, the immutable dataset, display formatting.
/// - [`loader`] -- One-shot CSV ingestion with schema validation.
/// - [`engine`] -- Filter, summarize and aggregate; the shared core of every view.
/// - [`analysis`] -- Chart-ready structures (histogram, scatter, box, bars).
/// - [`export`] -- CSV / JSON export of the current result.
pub mod analysis;
pub mod engine;
pub mod error;
pub mod export;
pub mod loader;
pub mod model;

pub use error::DatasetError;
