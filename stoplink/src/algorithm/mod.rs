pub mod candidate_builder;
pub mod link_candidate_creator;
pub mod link_search;
pub mod manual_merge;

pub use link_candidate_creator::{create_link_candidates, LinkCandidateOutput};
