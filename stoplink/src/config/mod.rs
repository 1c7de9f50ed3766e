mod link_candidate_configuration;
mod link_candidate_params;
mod manual_link_candidates;

pub use link_candidate_configuration::LinkCandidateConfiguration;
pub use link_candidate_params::LinkCandidateParams;
pub use manual_link_candidates::ManualLinkCandidates;
