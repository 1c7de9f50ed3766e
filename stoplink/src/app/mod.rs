mod candidate_writer;
mod stoplink_app;

pub use candidate_writer::{ArtificialLinkRow, CandidateWriter, LinkCandidateRow};
pub use stoplink_app::{run, App};
