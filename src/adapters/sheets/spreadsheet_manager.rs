use google_sheets4::Sheets;
use std::fmt::Debug;
use tracing::instrument;

use super::{
    auth,
    http_client::{self, HttpsConnector},
};
use crate::ports::sheet_source::{ServiceAccountCredentials, SheetSourceError};

pub struct SpreadsheetManager {
    pub spreadsheet_id: String,
    pub(super) hub: Sheets<HttpsConnector>,
}

impl Debug for SpreadsheetManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SpreadsheetManager {{ spreadsheet_id: {:?} }}",
            self.spreadsheet_id
        )
    }
}

impl SpreadsheetManager {
    #[instrument(name = "SpreadsheetManager::new")]
    pub async fn new(
        credentials: ServiceAccountCredentials,
    ) -> error_stack::Result<Self, SheetSourceError> {
        let client = http_client::http_client()?;
        let auth = auth::auth(&credentials, client.clone()).await?;
        let hub: Sheets<HttpsConnector> = Sheets::new(client, auth);

        Ok(SpreadsheetManager {
            spreadsheet_id: credentials.spreadsheet_id,
            hub,
        })
    }
}
