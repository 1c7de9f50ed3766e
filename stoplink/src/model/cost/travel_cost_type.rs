use serde::{Deserialize, Serialize};
use stoplink_core::model::network::Link;

use super::LinkCostOracle;

/// built-in link cost functions.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TravelCostType {
    /// link length in meters
    #[default]
    LinkLength,
    /// free-flow travel time in seconds. links without a positive free speed
    /// cannot be traversed and cost infinity.
    TravelTime,
}

impl LinkCostOracle for TravelCostType {
    fn link_travel_cost(&self, link: &Link) -> f64 {
        match self {
            TravelCostType::LinkLength => link.length,
            TravelCostType::TravelTime if link.freespeed > 0.0 => link.length / link.freespeed,
            TravelCostType::TravelTime => f64::INFINITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TravelCostType;
    use crate::model::cost::LinkCostOracle;
    use std::collections::BTreeSet;
    use stoplink_core::model::network::Link;

    fn link(length: f64, freespeed: f64) -> Link {
        Link::new("l".into(), "a".into(), "b".into(), length, freespeed, BTreeSet::new())
    }

    #[test]
    fn test_link_length() {
        assert_eq!(TravelCostType::LinkLength.link_travel_cost(&link(120.0, 10.0)), 120.0);
    }

    #[test]
    fn test_travel_time() {
        assert_eq!(TravelCostType::TravelTime.link_travel_cost(&link(120.0, 10.0)), 12.0);
        assert!(TravelCostType::TravelTime
            .link_travel_cost(&link(120.0, 0.0))
            .is_infinite());
    }
}
