//! Processing services for the ingestion-to-summary pipeline.
//!
//! `csv` validates uploads and parses rows, `rate` enforces the
//! one-rate-per-employee-per-file invariant, `ingest` drives a file from
//! PENDING to LOADED inside one transaction, `summary` aggregates billing
//! records into the invoice summary and finishes at PROCESSED, and `decimal`
//! renders every monetary value as a fixed two-decimal string.

pub mod csv;
pub mod decimal;
pub mod ingest;
pub mod rate;
pub mod summary;
