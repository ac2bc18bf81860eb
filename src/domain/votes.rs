pub mod candidate_list;
pub mod candidate_vote;
pub mod extraction;
