use serde::{Deserialize, Serialize};

use super::TripId;

/// a scheduled run of a route, starting at `departure_time` seconds after midnight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Departure {
    pub id: TripId,
    pub departure_time: u32,
}
