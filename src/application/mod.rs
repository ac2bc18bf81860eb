pub mod vote_snapshot;
pub mod vote_submission;
