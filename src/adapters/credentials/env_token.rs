use crate::ports::credential_provider::CredentialProvider;

pub const AUTH_TOKEN_VAR: &str = "VOTE_AUTH_TOKEN";

/// Reads the bearer token from an environment variable, `VOTE_AUTH_TOKEN` by default.
#[derive(Debug, Clone)]
pub struct EnvTokenProvider {
    variable: String,
}

impl EnvTokenProvider {
    pub fn new<S: Into<String>>(variable: S) -> Self {
        Self {
            variable: variable.into(),
        }
    }
}

impl Default for EnvTokenProvider {
    fn default() -> Self {
        Self::new(AUTH_TOKEN_VAR)
    }
}

impl CredentialProvider for EnvTokenProvider {
    fn bearer_token(&self) -> Option<String> {
        std::env::var(&self.variable).ok()
    }
}
