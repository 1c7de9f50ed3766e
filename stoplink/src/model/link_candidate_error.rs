use stoplink_core::model::network::{LinkId, NetworkError};
use thiserror::Error;

use super::schedule::{ScheduleError, StopFacilityId};

#[derive(Error, Debug)]
pub enum LinkCandidateError {
    #[error("no link candidate parameters defined for schedule mode '{0}'")]
    MissingConfiguration(String),
    #[error("stop facility '{0}' references link '{1}' not found in network")]
    MissingReferencedLink(StopFacilityId, LinkId),
    #[error("invalid link candidate configuration: {0}")]
    ConfigurationError(String),
    #[error(transparent)]
    NetworkError(#[from] NetworkError),
    #[error(transparent)]
    ScheduleError(#[from] ScheduleError),
    #[error("{0}")]
    InternalError(String),
}
