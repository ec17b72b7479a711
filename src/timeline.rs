pub mod cuts;
pub mod timesheet;
