use thiserror::Error;

use super::{StopFacilityId, TransitLineId, TransitRouteId, TripId};

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("stop facility '{0}' appears more than once in schedule")]
    DuplicateStopFacilityId(StopFacilityId),
    #[error("transit line '{0}' appears more than once in schedule")]
    DuplicateTransitLineId(TransitLineId),
    #[error("transit route '{1}' appears more than once on line '{0}'")]
    DuplicateTransitRouteId(TransitLineId, TransitRouteId),
    #[error("route '{1}' of line '{0}' references stop facility '{2}' not in schedule")]
    MissingStopFacility(TransitLineId, TransitRouteId, StopFacilityId),
    #[error("attempting to get stop facility '{0}' not in schedule")]
    StopFacilityNotFound(StopFacilityId),
    #[error("trip '{0}' at stop facility '{1}': departure time {2} plus offset {3} exceeds the time range")]
    TimeOverflow(TripId, StopFacilityId, u32, u32),
    #[error("failure reading schedule file {0}: {1}")]
    ReadError(String, String),
}
