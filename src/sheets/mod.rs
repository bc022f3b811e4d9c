pub mod auth;
pub mod http_client;
pub mod into;
pub mod ranges;
pub mod spreadsheet_manager;
pub mod spreadsheet_read;

pub use into::Grid;
