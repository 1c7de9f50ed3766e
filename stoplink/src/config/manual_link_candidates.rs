use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use stoplink_core::model::network::LinkId;

use crate::model::schedule::StopFacilityId;

/// user-declared link candidates that extend or replace the automatically
/// found ones.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct ManualLinkCandidates {
    /// target stop facility. when absent, the links are applied to every stop
    /// facility that already has candidates for each target mode.
    #[serde(default)]
    pub stop_facility_id: Option<StopFacilityId>,
    /// target schedule modes. when empty, every mode with candidates is targeted.
    #[serde(default)]
    pub schedule_modes: BTreeSet<String>,
    pub link_ids: Vec<LinkId>,
    /// discard the existing candidates instead of appending to them.
    #[serde(default)]
    pub replace: bool,
}
