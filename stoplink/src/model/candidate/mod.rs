mod link_candidate;
mod link_candidate_store;
mod mapping_diagnostic;

pub use link_candidate::LinkCandidate;
pub use link_candidate_store::{CandidateSet, LinkCandidateStore};
pub use mapping_diagnostic::MappingDiagnostic;
