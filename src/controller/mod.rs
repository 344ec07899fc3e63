//! HTTP controller endpoints for the billhours API.
//!
//! Controllers handle HTTP requests, validate inputs, hand work to the
//! repositories and the job queue, and return appropriate HTTP responses.
//! Every endpoint carries a utoipa annotation for OpenAPI documentation.

pub mod timesheet;
