use std::sync::Arc;

use tracing::instrument;

use super::spreadsheet_manager::SpreadsheetManager;
use crate::ports::sheet_source::{
    ServiceAccountCredentials, SheetConnector, SheetSourceError, SheetValues,
};

/// Opens the vote sheet through the Google Sheets v4 API.
#[derive(Debug, Default, Clone, Copy)]
pub struct GoogleSheetsConnector;

#[async_trait::async_trait]
impl SheetConnector for GoogleSheetsConnector {
    #[instrument(skip(self))]
    async fn connect(
        &self,
        credentials: ServiceAccountCredentials,
    ) -> error_stack::Result<Arc<dyn SheetValues>, SheetSourceError> {
        let manager = SpreadsheetManager::new(credentials).await?;
        Ok(Arc::new(manager))
    }
}
