use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// identifier of a stop facility in the transit schedule.
#[derive(
    Debug, Default, Clone, Eq, PartialEq, PartialOrd, Ord, Deserialize, Serialize, Hash,
)]
pub struct StopFacilityId(pub String);

impl Display for StopFacilityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for StopFacilityId {
    fn from(value: &str) -> Self {
        StopFacilityId(String::from(value))
    }
}
