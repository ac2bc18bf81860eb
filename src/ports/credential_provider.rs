/// Source of the bearer token sent along with a vote.
pub trait CredentialProvider: Send + Sync {
    fn bearer_token(&self) -> Option<String>;
}
