use error_stack::ResultExt;
use google_sheets4::hyper;
use google_sheets4::oauth2::{self, authenticator::Authenticator};

use super::http_client::HttpsConnector;
use crate::ports::sheet_source::{ServiceAccountCredentials, SheetSourceError};

const GOOGLE_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

pub async fn auth(
    credentials: &ServiceAccountCredentials,
    client: hyper::Client<HttpsConnector>,
) -> error_stack::Result<Authenticator<HttpsConnector>, SheetSourceError> {
    let secret = service_account_key(credentials)?;

    oauth2::ServiceAccountAuthenticator::with_client(secret, client)
        .build()
        .await
        .change_context(SheetSourceError::Authentication)
        .attach_printable("could not create an authenticator")
}

/// Builds the key from individual values, the same document a downloaded key file holds.
pub fn service_account_key(
    credentials: &ServiceAccountCredentials,
) -> error_stack::Result<oauth2::ServiceAccountKey, SheetSourceError> {
    let document = serde_json::json!({
        "type": "service_account",
        "client_email": credentials.client_email,
        "private_key": credentials.private_key,
        "token_uri": GOOGLE_TOKEN_URI,
    });

    oauth2::parse_service_account_key(document.to_string())
        .change_context(SheetSourceError::Authentication)
        .attach_printable_lazy(|| {
            format!(
                "invalid service account key for '{}'",
                credentials.client_email
            )
        })
}
