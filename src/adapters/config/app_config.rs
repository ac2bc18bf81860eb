use config::Config;
use error_stack::{report, ResultExt};
use thiserror::Error;

use super::{
    server_config::ServerConfig, sheets_config::SheetsConfig, vote_api_config::VoteApiConfig,
};

/// Environment variables layered on top of the config file, keyed by config path.
const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("sheets.client_email", "GOOGLE_SHEETS_CLIENT_EMAIL"),
    ("sheets.private_key", "GOOGLE_SHEETS_PRIVATE_KEY"),
    ("sheets.sheet_id", "GOOGLE_SHEET_ID"),
    ("webhook_secret_token", "WEBHOOK_SECRET_TOKEN"),
    ("vote_api.base_url", "VOTE_API_BASE_URL"),
    ("server.port", "RUST_PORT"),
];

#[derive(serde::Deserialize, Debug, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub sheets: SheetsConfig,
    #[serde(default)]
    pub vote_api: VoteApiConfig,
    /// Shared secret of the form webhook. Loaded so deployments can keep one env file.
    #[serde(default)]
    pub webhook_secret_token: Option<String>,
}

#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("[CONFIG ERROR] Error reading config file '{0}'")]
    Read(String),
    #[error("[CONFIG ERROR] Failed to deserialize config file '{file}' at field path '{path}'")]
    Deserialize { file: String, path: String },
}

impl AppConfig {
    /// Reads the file named by `CONFIG_PATH` (default `Config`) and the process environment.
    pub fn load() -> error_stack::Result<Self, ConfigLoadError> {
        let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "Config".to_string());
        Self::load_from(&config_path, |key| std::env::var(key).ok())
    }

    pub fn load_from<F>(config_path: &str, env: F) -> error_stack::Result<Self, ConfigLoadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder =
            Config::builder().add_source(config::File::with_name(config_path).required(false));

        for (key, variable) in ENV_OVERRIDES {
            builder = builder
                .set_override_option(*key, env(variable))
                .change_context_lazy(|| ConfigLoadError::Read(config_path.to_string()))?;
        }

        let config = builder
            .build()
            .change_context_lazy(|| ConfigLoadError::Read(config_path.to_string()))?;

        let app_config: Result<AppConfig, _> = serde_path_to_error::deserialize(config);
        app_config.map_err(|e| {
            let path = e.path().to_string();
            report!(ConfigLoadError::Deserialize {
                file: config_path.to_string(),
                path,
            })
            .attach_printable(e.into_inner().to_string())
            .attach_printable("Make sure all fields in the configuration file have the right type.")
        })
    }
}
