use error_stack::Result;
use google_sheets4::Sheets;
use std::fmt::Debug;
use thiserror::Error;

use crate::config::sheets_config::SpreadsheetConfig;

use super::{
    auth,
    http_client::{self, HttpsConnector},
};

pub struct SpreadsheetManager {
    pub config: SpreadsheetConfig,
    pub(super) hub: Sheets<HttpsConnector>,
}

impl Debug for SpreadsheetManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SpreadsheetManager {{ config: {:?} }}", self.config)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpreadsheetManagerError {
    #[error("Could not read service account credentials")]
    CredentialsUnreadable,
    #[error("Could not authenticate with the service account")]
    AuthenticationFailed,
    #[error("Failed to fetch range")]
    FailedToFetchRange,
    #[error("No data found in the spreadsheet")]
    EmptyRange,
}

impl SpreadsheetManager {
    pub async fn new(config: SpreadsheetConfig) -> Result<Self, SpreadsheetManagerError> {
        let client = http_client::http_client();
        let auth = auth::auth(&config, client.clone()).await?;
        let hub = Sheets::new(client, auth);

        Ok(SpreadsheetManager { config, hub })
    }
}
