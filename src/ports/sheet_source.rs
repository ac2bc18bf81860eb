use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

use crate::domain::sheets::a1_notation::A1Notation;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SheetSourceError {
    #[error("Spreadsheet API rejected the request ({code:?}): {message}")]
    Upstream { code: Option<u16>, message: String },
    #[error("Failed to authenticate against the spreadsheet API")]
    Authentication,
    #[error("Failed to set up the HTTPS connector")]
    Connector,
    #[error("Failed to fetch range")]
    FailedToFetchRange,
}

/// Service account identity used to open the vote sheet.
#[derive(Clone, PartialEq, Eq)]
pub struct ServiceAccountCredentials {
    pub client_email: String,
    pub private_key: String,
    pub spreadsheet_id: String,
}

impl std::fmt::Debug for ServiceAccountCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceAccountCredentials")
            .field("client_email", &self.client_email)
            .field("private_key", &"<redacted>")
            .field("spreadsheet_id", &self.spreadsheet_id)
            .finish()
    }
}

#[async_trait::async_trait]
pub trait SheetValues: Send + Sync {
    /// Rows of `range`, empty when the range holds no values.
    async fn read_range(
        &self,
        range: &A1Notation,
    ) -> error_stack::Result<Vec<Vec<Value>>, SheetSourceError>;
}

#[async_trait::async_trait]
pub trait SheetConnector: Send + Sync {
    async fn connect(
        &self,
        credentials: ServiceAccountCredentials,
    ) -> error_stack::Result<Arc<dyn SheetValues>, SheetSourceError>;
}
