//! Shared test fixtures and database setup for billhours tests.

pub mod error;
pub mod fixtures;
pub mod setup;

pub use error::TestError;
pub use setup::{TestAppState, TestSetup};
