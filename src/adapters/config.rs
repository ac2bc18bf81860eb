pub mod app_config;
pub mod server_config;
pub mod sheets_config;
pub mod vote_api_config;
