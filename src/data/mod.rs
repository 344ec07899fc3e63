//! Data access layer repositories.
//!
//! One repository per table. Repositories are generic over
//! [`sea_orm::ConnectionTrait`] so the same code runs against the pooled
//! connection and against the single transaction that brackets a file's
//! ingestion.

pub mod billable_rate;
pub mod employee;
pub mod invoice_summary;
pub mod project;
pub mod timesheet_file;
pub mod timesheet_invoice;
