use serde::Serialize;
use std::fmt::Display;
use stoplink_core::model::network::LinkId;

use crate::model::schedule::StopFacilityId;

/// a non-fatal finding from applying manual link candidates. diagnostics are
/// returned with the link candidates so callers decide how to report them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum MappingDiagnostic {
    /// a manual entry names a stop facility that is not in the schedule. the entry was skipped.
    UnresolvedStopFacility { stop_facility_id: StopFacilityId },
    /// a manual entry names a link that is not in the network. the link was skipped.
    UnresolvedLink {
        schedule_mode: String,
        stop_facility_id: StopFacilityId,
        link_id: LinkId,
    },
    /// a manual link lies farther from its stop facility than the mode allows.
    /// the link is still used.
    ThresholdExceeded {
        schedule_mode: String,
        stop_facility_id: StopFacilityId,
        link_id: LinkId,
        distance: f64,
        max_distance: f64,
    },
    /// a replacing manual entry resolved no links, leaving the pair without candidates.
    EmptyOverride {
        schedule_mode: String,
        stop_facility_id: StopFacilityId,
    },
}

impl MappingDiagnostic {
    pub fn is_unresolved_reference(&self) -> bool {
        matches!(
            self,
            MappingDiagnostic::UnresolvedStopFacility { .. }
                | MappingDiagnostic::UnresolvedLink { .. }
        )
    }
}

impl Display for MappingDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use MappingDiagnostic as D;
        match self {
            D::UnresolvedStopFacility { stop_facility_id } => write!(
                f,
                "stop facility {stop_facility_id} not available in schedule, manual link candidates for this facility are ignored"
            ),
            D::UnresolvedLink {
                schedule_mode,
                stop_facility_id,
                link_id,
            } => write!(
                f,
                "link {link_id} not found in network, ignored as {schedule_mode} candidate for stop facility {stop_facility_id}"
            ),
            D::ThresholdExceeded {
                schedule_mode,
                stop_facility_id,
                link_id,
                distance,
                max_distance,
            } => write!(
                f,
                "distance from manual {schedule_mode} link candidate {link_id} to stop facility {stop_facility_id} is more than {max_distance} ({distance:.2}), manual link candidate will still be used"
            ),
            D::EmptyOverride {
                schedule_mode,
                stop_facility_id,
            } => write!(
                f,
                "no manual {schedule_mode} link candidates resolved for stop facility {stop_facility_id}, which now has no link candidates"
            ),
        }
    }
}
