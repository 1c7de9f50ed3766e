use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// identifier of a single vehicle trip, which in a transit schedule is a route departure.
#[derive(
    Debug, Default, Clone, Eq, PartialEq, PartialOrd, Ord, Deserialize, Serialize, Hash,
)]
pub struct TripId(pub String);

impl Display for TripId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TripId {
    fn from(value: &str) -> Self {
        TripId(String::from(value))
    }
}
