//! CSV upload validation and row parsing.

pub mod row;
pub mod validator;

/// The header every timesheet upload must carry, in exact column order.
pub static EXPECTED_HEADER: [&str; 6] = [
    "Employee ID",
    "Billable Rate (per hour)",
    "Project",
    "Date",
    "Start Time",
    "End Time",
];
