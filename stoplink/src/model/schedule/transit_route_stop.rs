use serde::{Deserialize, Serialize};

use super::StopFacilityId;

/// a stop visit along a route. offsets are seconds after the route departure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitRouteStop {
    pub stop_facility_id: StopFacilityId,
    #[serde(default)]
    pub arrival_offset: Option<u32>,
    #[serde(default)]
    pub departure_offset: Option<u32>,
}

impl TransitRouteStop {
    pub fn new(stop_facility_id: StopFacilityId) -> TransitRouteStop {
        TransitRouteStop {
            stop_facility_id,
            arrival_offset: None,
            departure_offset: None,
        }
    }

    pub fn with_offsets(mut self, arrival_offset: u32, departure_offset: u32) -> TransitRouteStop {
        self.arrival_offset = Some(arrival_offset);
        self.departure_offset = Some(departure_offset);
        self
    }

    /// arrival offset, falling back to the departure offset and then zero.
    pub fn get_arrival_offset(&self) -> u32 {
        self.arrival_offset.or(self.departure_offset).unwrap_or(0)
    }

    /// departure offset, falling back to the arrival offset and then zero.
    pub fn get_departure_offset(&self) -> u32 {
        self.departure_offset.or(self.arrival_offset).unwrap_or(0)
    }
}
