pub mod candidate;
pub mod cost;
mod link_candidate_error;
pub mod schedule;
mod stoplink_cli_error;

pub use link_candidate_error::LinkCandidateError;
pub use stoplink_cli_error::StoplinkCliError;
