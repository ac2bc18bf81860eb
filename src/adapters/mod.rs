pub mod config;
pub mod credentials;
pub mod http;
pub mod sheets;
pub mod vote_api;
