use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoteRequest {
    pub name: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VoteGatewayError {
    #[error("Vote endpoint answered with HTTP {status}")]
    HttpStatus {
        status: u16,
        reason: Option<String>,
        body: String,
    },
    #[error("Vote request failed: {details}")]
    Transport { status: Option<u16>, details: String },
}

#[async_trait::async_trait]
pub trait VoteGateway: Send + Sync {
    /// Sends one vote and returns the raw reply body of a successful response.
    async fn post_vote(
        &self,
        token: &str,
        request: &VoteRequest,
    ) -> error_stack::Result<String, VoteGatewayError>;
}
