pub mod sheets;
pub mod submission;
pub mod votes;
