use error_stack::{Result, ResultExt};
use google_sheets4::hyper;
use google_sheets4::oauth2::{self, authenticator::Authenticator};

use crate::config::sheets_config::SpreadsheetConfig;

use super::{http_client::HttpsConnector, spreadsheet_manager::SpreadsheetManagerError};

pub async fn auth(
    config: &SpreadsheetConfig,
    client: hyper::Client<HttpsConnector>,
) -> Result<Authenticator<HttpsConnector>, SpreadsheetManagerError> {
    let priv_key_path = config.priv_key.as_ref();
    let secret: oauth2::ServiceAccountKey = oauth2::read_service_account_key(priv_key_path)
        .await
        .change_context(SpreadsheetManagerError::CredentialsUnreadable)
        .attach_printable_lazy(|| {
            format!(
                "Could not read service account private key at '{}'",
                priv_key_path
            )
        })?;

    log::debug!("Authenticating as {}", secret.client_email);

    oauth2::ServiceAccountAuthenticator::with_client(secret, client)
        .build()
        .await
        .change_context(SpreadsheetManagerError::AuthenticationFailed)
        .attach_printable("could not create an authenticator")
}
