//! Billable hours backend.
//!
//! This crate ingests uploaded employee timesheet CSV files into billing
//! records and computes per-project, per-employee invoice summaries. It
//! provides the HTTP upload/status/summary endpoints, the database access
//! layer, the background worker that runs ingestion and summary computation,
//! and the processing services themselves.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod worker;
