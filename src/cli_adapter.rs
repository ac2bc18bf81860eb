use std::sync::Arc;

use error_stack::{report, ResultExt};
use thiserror::Error;
use tracing::instrument;
use vote_snapshot::{
    adapters::{
        config::app_config::AppConfig,
        credentials::{
            env_token::EnvTokenProvider, static_token::FirstAvailable,
            token_store::TokenFileStore,
        },
        http::{server::start_server, state::AppState},
        sheets::google_connector::GoogleSheetsConnector,
        vote_api::http_vote_gateway::HttpVoteGateway,
    },
    application::{vote_snapshot::VoteSnapshotReader, vote_submission::VoteSubmitter},
    domain::submission::VoteOutcome,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Serve,
    Vote { candidate: String },
    Login { token: String },
    Logout,
    Snapshot,
}

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Invalid command: {details}")]
    InvalidCommand { details: String },
    #[error("Command execution failed: {details}")]
    ExecutionFailed { details: String },
}

pub struct CliAdapter {
    config: AppConfig,
    env_token: EnvTokenProvider,
}

impl std::fmt::Debug for CliAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CliAdapter").finish_non_exhaustive()
    }
}

impl CliAdapter {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            env_token: EnvTokenProvider::default(),
        }
    }

    pub fn with_env_token(mut self, env_token: EnvTokenProvider) -> Self {
        self.env_token = env_token;
        self
    }

    pub fn parse_args(args: &[String]) -> Result<Command, CommandError> {
        match args.get(1).map(|s| s.as_str()) {
            None | Some("serve") => Ok(Command::Serve),
            Some("vote") => Ok(Command::Vote {
                candidate: args.get(2).cloned().unwrap_or_default(),
            }),
            Some("login") => {
                let token = args
                    .get(2)
                    .filter(|token| !token.is_empty())
                    .ok_or_else(|| CommandError::InvalidCommand {
                        details: "Token required".to_string(),
                    })?
                    .clone();
                Ok(Command::Login { token })
            }
            Some("logout") => Ok(Command::Logout),
            Some("snapshot") => Ok(Command::Snapshot),
            Some(other) => Err(CommandError::InvalidCommand {
                details: format!(
                    "unknown command '{}', expected serve | vote <candidate> | login <token> | logout | snapshot",
                    other
                ),
            }),
        }
    }

    fn token_store(&self) -> TokenFileStore {
        TokenFileStore::new(self.config.vote_api.token_store.clone())
    }

    /// The environment token (`VOTE_AUTH_TOKEN` by default) wins over the token file.
    fn credentials(&self) -> FirstAvailable {
        FirstAvailable(vec![
            Box::new(self.env_token.clone()),
            Box::new(self.token_store()),
        ])
    }

    fn snapshot_reader(&self) -> VoteSnapshotReader {
        VoteSnapshotReader::new(self.config.sheets.clone(), Arc::new(GoogleSheetsConnector))
    }

    #[instrument]
    pub async fn run(&self, command: Command) -> error_stack::Result<String, CommandError> {
        match command {
            Command::Serve => {
                let state = AppState::new(self.snapshot_reader());
                start_server(&self.config.server, state)
                    .await
                    .change_context(CommandError::ExecutionFailed {
                        details: "HTTP server failed".to_string(),
                    })?;
                Ok(String::new())
            }
            Command::Vote { candidate } => {
                let submitter =
                    VoteSubmitter::new(Arc::new(HttpVoteGateway::new(&self.config.vote_api)));
                match submitter.submit_vote(&candidate, &self.credentials()).await {
                    VoteOutcome::Success { message } => Ok(format!("✅ {}", message)),
                    failure => Err(report!(CommandError::ExecutionFailed {
                        details: failure.to_string(),
                    })),
                }
            }
            Command::Login { token } => {
                let store = self.token_store();
                store
                    .set(&token)
                    .change_context(CommandError::ExecutionFailed {
                        details: "could not save token".to_string(),
                    })?;
                Ok(format!("Token saved to {}", store.path().display()))
            }
            Command::Logout => {
                let removed = self
                    .token_store()
                    .remove()
                    .change_context(CommandError::ExecutionFailed {
                        details: "could not remove token".to_string(),
                    })?;
                Ok(if removed {
                    "Token removed".to_string()
                } else {
                    "No token stored".to_string()
                })
            }
            Command::Snapshot => {
                let snapshot = self.snapshot_reader().read_snapshot().await.map_err(|report| {
                    let details = report.current_context().to_string();
                    report.change_context(CommandError::ExecutionFailed { details })
                })?;
                serde_json::to_string_pretty(&snapshot).change_context(
                    CommandError::ExecutionFailed {
                        details: "could not encode snapshot".to_string(),
                    },
                )
            }
        }
    }
}
