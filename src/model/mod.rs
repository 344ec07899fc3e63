//! Shared server data structures: application state, API DTOs, worker jobs.

pub mod api;
pub mod app;
pub mod worker;
