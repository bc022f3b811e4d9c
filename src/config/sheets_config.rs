#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
pub struct SpreadsheetConfig {
    pub priv_key: Box<str>,
    pub spreadsheet_id: Box<str>,
    pub range: Box<str>,
}

impl SpreadsheetConfig {
    pub const DEFAULT_PRIV_KEY: &'static str = "service_account.json";
    pub const DEFAULT_SPREADSHEET_ID: &'static str = "1LaA8MP9YlOYZJXb5S7JHlNidl88V5OxQMQ1BuNRTCLE";
    pub const DEFAULT_RANGE: &'static str = crate::sheets::ranges::RO_DATA;
}
