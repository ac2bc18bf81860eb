pub mod env_token;
pub mod static_token;
pub mod token_store;
