pub mod credential_provider;
pub mod sheet_source;
pub mod vote_gateway;
