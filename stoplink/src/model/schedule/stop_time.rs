use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt::Display};

use super::{StopFacilityId, TripId};

/// the visit of one trip at one stop. times are seconds after midnight of the
/// service day and may exceed 24 hours for trips running past midnight.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StopTime {
    sequence_position: u32,
    arrival_time: u32,
    departure_time: u32,
    stop_facility_id: StopFacilityId,
    trip_id: TripId,
}

impl StopTime {
    pub fn new(
        sequence_position: u32,
        arrival_time: u32,
        departure_time: u32,
        stop_facility_id: StopFacilityId,
        trip_id: TripId,
    ) -> StopTime {
        StopTime {
            sequence_position,
            arrival_time,
            departure_time,
            stop_facility_id,
            trip_id,
        }
    }

    /// the position of this stop time within its trip's stop sequence
    pub fn sequence_position(&self) -> u32 {
        self.sequence_position
    }

    pub fn arrival_time(&self) -> u32 {
        self.arrival_time
    }

    pub fn departure_time(&self) -> u32 {
        self.departure_time
    }

    pub fn stop_facility_id(&self) -> &StopFacilityId {
        &self.stop_facility_id
    }

    pub fn trip_id(&self) -> &TripId {
        &self.trip_id
    }
}

/// stop times sort by departure time, then by position in the stop sequence. the
/// remaining fields only break ties so that the ordering agrees with equality.
impl Ord for StopTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.departure_time
            .cmp(&other.departure_time)
            .then_with(|| self.sequence_position.cmp(&other.sequence_position))
            .then_with(|| self.trip_id.cmp(&other.trip_id))
            .then_with(|| self.arrival_time.cmp(&other.arrival_time))
            .then_with(|| self.stop_facility_id.cmp(&other.stop_facility_id))
    }
}

impl PartialOrd for StopTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for StopTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}[pos:{}, arrivalTime:{}, departureTime:{}]{}",
            self.stop_facility_id,
            self.sequence_position,
            write_time(self.arrival_time),
            write_time(self.departure_time),
            self.trip_id
        )
    }
}

/// formats seconds after midnight as HH:MM:SS, allowing hours past 23.
pub fn write_time(seconds: u32) -> String {
    let h = seconds / 3600;
    let m = (seconds % 3600) / 60;
    let s = seconds % 60;
    format!("{h:02}:{m:02}:{s:02}")
}
