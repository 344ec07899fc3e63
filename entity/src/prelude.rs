pub use super::billable_rate::Entity as BillableRate;
pub use super::employee::Entity as Employee;
pub use super::invoice_summary::Entity as InvoiceSummary;
pub use super::project::Entity as Project;
pub use super::timesheet_file::Entity as TimesheetFile;
pub use super::timesheet_invoice::Entity as TimesheetInvoice;
