use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateVote {
    pub name: String,
    pub votes: u64,
    pub list: String,
}

/// Every candidate's tally as of one read of the sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteSnapshot {
    pub votes: Vec<CandidateVote>,
}

impl VoteSnapshot {
    pub fn new(votes: Vec<CandidateVote>) -> Self {
        Self { votes }
    }

    pub fn is_empty(&self) -> bool {
        self.votes.is_empty()
    }
}
