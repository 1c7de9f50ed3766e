use serde::{Deserialize, Serialize};
use std::{
    collections::{HashMap, HashSet},
    path::Path,
};

use super::{ScheduleError, StopFacility, StopFacilityId, TransitLine};

/// serialized form of a [`TransitSchedule`], as read from a schedule file.
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct TransitScheduleRecords {
    pub stop_facilities: Vec<StopFacility>,
    pub transit_lines: Vec<TransitLine>,
}

/// stop facilities and the transit lines that visit them. lines keep the order
/// in which they were provided, which fixes the order of schedule traversal.
#[derive(Default, Debug, Clone)]
pub struct TransitSchedule {
    facilities: HashMap<StopFacilityId, StopFacility>,
    lines: Vec<TransitLine>,
}

impl TransitSchedule {
    /// builds a schedule, confirming that ids are unique and that every route
    /// only visits known stop facilities.
    pub fn new(
        facilities: Vec<StopFacility>,
        lines: Vec<TransitLine>,
    ) -> Result<TransitSchedule, ScheduleError> {
        let mut facility_lookup: HashMap<StopFacilityId, StopFacility> = HashMap::new();
        for facility in facilities.into_iter() {
            if facility_lookup.contains_key(&facility.id) {
                return Err(ScheduleError::DuplicateStopFacilityId(facility.id));
            }
            facility_lookup.insert(facility.id.clone(), facility);
        }

        let mut line_ids = HashSet::new();
        for line in lines.iter() {
            if !line_ids.insert(&line.id) {
                return Err(ScheduleError::DuplicateTransitLineId(line.id.clone()));
            }
            let mut route_ids = HashSet::new();
            for route in line.routes.iter() {
                if !route_ids.insert(&route.id) {
                    return Err(ScheduleError::DuplicateTransitRouteId(
                        line.id.clone(),
                        route.id.clone(),
                    ));
                }
                for stop in route.stops.iter() {
                    if !facility_lookup.contains_key(&stop.stop_facility_id) {
                        return Err(ScheduleError::MissingStopFacility(
                            line.id.clone(),
                            route.id.clone(),
                            stop.stop_facility_id.clone(),
                        ));
                    }
                }
            }
        }

        Ok(TransitSchedule {
            facilities: facility_lookup,
            lines,
        })
    }

    pub fn lines(&self) -> &[TransitLine] {
        &self.lines
    }

    pub fn n_facilities(&self) -> usize {
        self.facilities.len()
    }

    /// looks up a facility. absence is not an error here since user-provided
    /// facility ids may be unknown.
    pub fn facility(&self, stop_facility_id: &StopFacilityId) -> Option<&StopFacility> {
        self.facilities.get(stop_facility_id)
    }

    /// helper with error handling for facilities expected to be in the schedule
    pub fn get_facility(
        &self,
        stop_facility_id: &StopFacilityId,
    ) -> Result<&StopFacility, ScheduleError> {
        self.facility(stop_facility_id)
            .ok_or_else(|| ScheduleError::StopFacilityNotFound(stop_facility_id.clone()))
    }
}

impl TryFrom<TransitScheduleRecords> for TransitSchedule {
    type Error = ScheduleError;

    fn try_from(records: TransitScheduleRecords) -> Result<Self, Self::Error> {
        TransitSchedule::new(records.stop_facilities, records.transit_lines)
    }
}

impl TryFrom<&Path> for TransitSchedule {
    type Error = ScheduleError;

    /// reads a schedule from a JSON file containing `stop_facilities` and `transit_lines`.
    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let filename = path.to_str().unwrap_or_default().to_string();
        let s = std::fs::read_to_string(path)
            .map_err(|e| ScheduleError::ReadError(filename.clone(), e.to_string()))?;
        let records: TransitScheduleRecords = serde_json::from_str(&s)
            .map_err(|e| ScheduleError::ReadError(filename, e.to_string()))?;
        TransitSchedule::try_from(records)
    }
}
