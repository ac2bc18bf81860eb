use std::path::PathBuf;

#[derive(serde::Deserialize, Debug, Clone)]
pub struct VoteApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Appended verbatim to `base_url`; the backend listens on its root by default.
    #[serde(default)]
    pub endpoint: String,
    #[serde(default = "default_token_store")]
    pub token_store: PathBuf,
}

fn default_base_url() -> String {
    "http://localhost:4040".to_string()
}

fn default_token_store() -> PathBuf {
    PathBuf::from("auth_token.json")
}

impl VoteApiConfig {
    pub fn vote_url(&self) -> String {
        format!("{}{}", self.base_url, self.endpoint)
    }
}

impl Default for VoteApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            endpoint: String::new(),
            token_store: default_token_store(),
        }
    }
}
