//! Database entities for the billhours workspace.

pub mod billable_rate;
pub mod employee;
pub mod invoice_summary;
pub mod prelude;
pub mod project;
pub mod timesheet_file;
pub mod timesheet_invoice;
