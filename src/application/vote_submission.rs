use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::{
    domain::submission::{
        error_body_message, VoteOutcome, VoteReply, CANDIDATE_REQUIRED, SUBMISSION_FAILED,
        TOKEN_NOT_FOUND,
    },
    ports::{
        credential_provider::CredentialProvider,
        vote_gateway::{VoteGateway, VoteGatewayError, VoteRequest},
    },
};

/// Sends a single vote to the voting backend. Never retries.
pub struct VoteSubmitter {
    gateway: Arc<dyn VoteGateway>,
}

impl VoteSubmitter {
    pub fn new(gateway: Arc<dyn VoteGateway>) -> Self {
        Self { gateway }
    }

    #[instrument(skip(self, credentials))]
    pub async fn submit_vote(
        &self,
        candidate: &str,
        credentials: &dyn CredentialProvider,
    ) -> VoteOutcome {
        if candidate.is_empty() {
            return VoteOutcome::failure(CANDIDATE_REQUIRED, None);
        }

        let Some(token) = credentials.bearer_token().filter(|token| !token.is_empty()) else {
            return VoteOutcome::failure(TOKEN_NOT_FOUND, None);
        };

        let request = VoteRequest {
            name: candidate.to_string(),
        };

        let outcome = match self.gateway.post_vote(&token, &request).await {
            Ok(body) => VoteReply::classify(candidate, &body).into(),
            Err(report) => {
                warn!(?report, "Vote submission failed");
                failure_from_gateway(report.current_context())
            }
        };

        info!(success = outcome.is_success(), message = outcome.message(), "Vote submitted");
        outcome
    }
}

fn failure_from_gateway(error: &VoteGatewayError) -> VoteOutcome {
    match error {
        VoteGatewayError::HttpStatus {
            status,
            reason,
            body,
        } => {
            let message = error_body_message(body)
                .or_else(|| reason.clone())
                .unwrap_or_else(|| SUBMISSION_FAILED.to_string());
            VoteOutcome::failure(message, Some(*status))
        }
        VoteGatewayError::Transport { status, details } => {
            let message = if details.is_empty() {
                SUBMISSION_FAILED.to_string()
            } else {
                details.clone()
            };
            VoteOutcome::failure(message, *status)
        }
    }
}
