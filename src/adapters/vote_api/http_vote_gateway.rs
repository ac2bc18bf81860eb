use error_stack::report;
use reqwest::Client;
use tracing::instrument;

use crate::{
    adapters::config::vote_api_config::VoteApiConfig,
    ports::vote_gateway::{VoteGateway, VoteGatewayError, VoteRequest},
};

/// Posts votes to the voting backend over HTTP.
#[derive(Debug, Clone)]
pub struct HttpVoteGateway {
    client: Client,
    vote_url: String,
}

impl HttpVoteGateway {
    pub fn new(config: &VoteApiConfig) -> Self {
        Self {
            client: Client::new(),
            vote_url: config.vote_url(),
        }
    }
}

fn transport_error(err: reqwest::Error) -> error_stack::Report<VoteGatewayError> {
    report!(VoteGatewayError::Transport {
        status: err.status().map(|status| status.as_u16()),
        details: err.to_string(),
    })
}

#[async_trait::async_trait]
impl VoteGateway for HttpVoteGateway {
    #[instrument(skip(self, token))]
    async fn post_vote(
        &self,
        token: &str,
        request: &VoteRequest,
    ) -> error_stack::Result<String, VoteGatewayError> {
        let response = self
            .client
            .post(&self.vote_url)
            .bearer_auth(token)
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await;

        if !status.is_success() {
            // A body that cannot be read still leaves the status to report
            return Err(report!(VoteGatewayError::HttpStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().map(str::to_string),
                body: body.unwrap_or_default(),
            }));
        }

        let body = body.map_err(|err| {
            report!(VoteGatewayError::Transport {
                status: Some(status.as_u16()),
                details: err.to_string(),
            })
        })?;

        tracing::debug!(response = body, "Vote endpoint replied");

        Ok(body)
    }
}
