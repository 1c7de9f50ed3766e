use geo::Coord;
use serde::{Deserialize, Serialize};
use stoplink_core::model::network::LinkId;

use super::StopFacilityId;

/// a location where vehicles stop, in the same projected coordinate system as the network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopFacility {
    pub id: StopFacilityId,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub name: Option<String>,
    /// a network link assigned to this stop ahead of time. when present it is
    /// the only link candidate for this stop.
    #[serde(default)]
    pub link_id: Option<LinkId>,
}

impl StopFacility {
    pub fn new(id: StopFacilityId, coord: Coord<f64>) -> StopFacility {
        StopFacility {
            id,
            x: coord.x,
            y: coord.y,
            name: None,
            link_id: None,
        }
    }

    pub fn with_link_id(mut self, link_id: LinkId) -> StopFacility {
        self.link_id = Some(link_id);
        self
    }

    pub fn coord(&self) -> Coord<f64> {
        Coord {
            x: self.x,
            y: self.y,
        }
    }
}
