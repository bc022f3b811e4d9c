pub mod load;
pub mod routine;
pub mod sheet_report_routine;
