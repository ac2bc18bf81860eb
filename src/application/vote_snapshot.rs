use std::sync::Arc;

use error_stack::{report, Report};
use thiserror::Error;
use tracing::{error, info, instrument, warn};

use crate::{
    adapters::config::sheets_config::SheetsConfig,
    domain::{
        sheets::cell::FirstRow,
        votes::{candidate_vote::VoteSnapshot, extraction::extract_candidate_votes},
    },
    ports::sheet_source::{SheetConnector, SheetSourceError},
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VoteSnapshotError {
    #[error("Server configuration error.")]
    Configuration,
    #[error("Google API Error: {message}")]
    Upstream { status_code: u16, message: String },
    #[error("Internal server error fetching initial votes.")]
    Internal,
}

impl VoteSnapshotError {
    pub fn status_code(&self) -> u16 {
        match self {
            VoteSnapshotError::Upstream { status_code, .. } => *status_code,
            VoteSnapshotError::Configuration | VoteSnapshotError::Internal => 500,
        }
    }
}

/// Reads the current tallies from the vote sheet. Every call is a fresh, independent read.
pub struct VoteSnapshotReader {
    config: SheetsConfig,
    connector: Arc<dyn SheetConnector>,
}

impl std::fmt::Debug for VoteSnapshotReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VoteSnapshotReader")
            .field("config", &self.config)
            .field("connector", &"<SheetConnector>")
            .finish()
    }
}

impl VoteSnapshotReader {
    pub fn new(config: SheetsConfig, connector: Arc<dyn SheetConnector>) -> Self {
        Self { config, connector }
    }

    #[instrument(skip(self))]
    pub async fn read_snapshot(&self) -> error_stack::Result<VoteSnapshot, VoteSnapshotError> {
        let credentials = self.config.service_account().ok_or_else(|| {
            error!("Missing Google Sheets config");
            report!(VoteSnapshotError::Configuration)
        })?;

        let sheet = self
            .connector
            .connect(credentials)
            .await
            .map_err(into_snapshot_error)?;

        let header_range = self.config.header_range();
        let count_range = self.config.count_range();
        let (headers, counts) = futures::future::try_join(
            sheet.read_range(&header_range),
            sheet.read_range(&count_range),
        )
        .await
        .map_err(into_snapshot_error)?;

        let headers: Vec<String> = headers.first_row();
        let counts: Vec<String> = counts.first_row();

        if headers.is_empty() || counts.is_empty() {
            warn!(
                headers = headers.len(),
                counts = counts.len(),
                "Headers/counts missing or empty"
            );
            return Ok(VoteSnapshot::default());
        }

        let votes = extract_candidate_votes(&headers, &counts);
        info!("Successfully processed {} candidates", votes.len());

        Ok(VoteSnapshot::new(votes))
    }
}

fn into_snapshot_error(report: Report<SheetSourceError>) -> Report<VoteSnapshotError> {
    let context = match report.current_context() {
        SheetSourceError::Upstream { code, message } => {
            error!(?code, %message, "Google API error");
            VoteSnapshotError::Upstream {
                status_code: code.unwrap_or(500),
                message: message.clone(),
            }
        }
        _ => {
            error!(?report, "Failed processing vote snapshot");
            VoteSnapshotError::Internal
        }
    };

    report.change_context(context)
}
