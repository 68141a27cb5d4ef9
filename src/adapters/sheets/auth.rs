use error_stack::ResultExt;
use google_sheets4::hyper;
use google_sheets4::oauth2::{self, authenticator::Authenticator};
use tracing::instrument;

use crate::{
    adapters::config::sheets_config::SpreadsheetConfig,
    ports::sync_error::{SyncError, SyncResult},
};

use super::http_client::HttpsConnector;

#[instrument(skip(client))]
pub async fn auth(
    config: &SpreadsheetConfig,
    client: hyper::Client<HttpsConnector>,
) -> SyncResult<Authenticator<HttpsConnector>> {
    let priv_key_path = config.priv_key.as_ref();
    let secret: oauth2::ServiceAccountKey = oauth2::read_service_account_key(priv_key_path)
        .await
        .change_context(SyncError::Auth)
        .attach_printable_lazy(|| {
            format!("could not read service account private key at '{priv_key_path}'")
        })?;

    oauth2::ServiceAccountAuthenticator::with_client(secret, client)
        .build()
        .await
        .change_context(SyncError::Auth)
        .attach_printable("could not create an authenticator")
}
