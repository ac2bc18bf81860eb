pub mod auth;
pub mod google_connector;
pub mod http_client;
pub mod spreadsheet_manager;
pub mod spreadsheet_read;
