use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::model::{cost::TravelCostType, LinkCandidateError};

/// link candidate search parameters for one schedule transport mode. distances
/// are in the units of the network coordinate system (meters).
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct LinkCandidateParams {
    /// network modes a link must allow to become a candidate. empty allows any link.
    #[serde(default)]
    pub network_modes: BTreeSet<String>,
    /// radius around a stop facility searched for links
    pub search_radius: f64,
    /// number of closest links to keep before the distance tolerance applies
    #[serde(default = "LinkCandidateParams::default_max_n_closest_links")]
    pub max_n_closest_links: usize,
    /// once `max_n_closest_links` links were found, farther links are still accepted
    /// while their distance is within this factor of the last link's distance
    #[serde(default = "LinkCandidateParams::default_link_distance_tolerance")]
    pub link_distance_tolerance: f64,
    /// links farther than this are never found by the search. manual link candidates
    /// beyond this distance are kept with a diagnostic.
    #[serde(default = "LinkCandidateParams::default_max_link_candidate_distance")]
    pub max_link_candidate_distance: f64,
    /// skip the search and give each stop facility an artificial loop link
    #[serde(default)]
    pub use_artificial_loop_link: bool,
    #[serde(default)]
    pub travel_cost_type: TravelCostType,
}

impl Default for LinkCandidateParams {
    fn default() -> Self {
        Self {
            network_modes: BTreeSet::new(),
            search_radius: Self::default_search_radius(),
            max_n_closest_links: Self::default_max_n_closest_links(),
            link_distance_tolerance: Self::default_link_distance_tolerance(),
            max_link_candidate_distance: Self::default_max_link_candidate_distance(),
            use_artificial_loop_link: false,
            travel_cost_type: TravelCostType::default(),
        }
    }
}

impl LinkCandidateParams {
    /// confirms parameter values are usable for the schedule mode they are keyed by.
    pub fn validate(&self, schedule_mode: &str) -> Result<(), LinkCandidateError> {
        let invalid = |msg: String| {
            Err(LinkCandidateError::ConfigurationError(format!(
                "schedule mode '{schedule_mode}': {msg}"
            )))
        };
        if self.search_radius.is_nan() || self.search_radius <= 0.0 {
            return invalid(format!(
                "search_radius must be positive, found {}",
                self.search_radius
            ));
        }
        if self.max_n_closest_links == 0 {
            return invalid(String::from("max_n_closest_links must be at least 1"));
        }
        if self.link_distance_tolerance.is_nan() || self.link_distance_tolerance < 1.0 {
            return invalid(format!(
                "link_distance_tolerance must be at least 1.0, found {}",
                self.link_distance_tolerance
            ));
        }
        if self.max_link_candidate_distance.is_nan() || self.max_link_candidate_distance <= 0.0 {
            return invalid(format!(
                "max_link_candidate_distance must be positive, found {}",
                self.max_link_candidate_distance
            ));
        }
        Ok(())
    }

    fn default_search_radius() -> f64 {
        300.0
    }

    fn default_max_n_closest_links() -> usize {
        6
    }

    fn default_link_distance_tolerance() -> f64 {
        1.0
    }

    fn default_max_link_candidate_distance() -> f64 {
        90.0
    }
}

#[cfg(test)]
mod tests {
    use super::LinkCandidateParams;
    use crate::model::cost::TravelCostType;

    #[test]
    fn test_defaults_are_valid() {
        assert!(LinkCandidateParams::default().validate("bus").is_ok());
    }

    #[test]
    fn test_tolerance_below_one_rejected() {
        let params = LinkCandidateParams {
            link_distance_tolerance: 0.5,
            ..Default::default()
        };
        assert!(params.validate("bus").is_err());
    }

    #[test]
    fn test_nan_radius_rejected() {
        let params = LinkCandidateParams {
            search_radius: f64::NAN,
            ..Default::default()
        };
        assert!(params.validate("bus").is_err());
    }

    #[test]
    fn test_nan_tolerance_and_distance_rejected() {
        let nan_tolerance = LinkCandidateParams {
            link_distance_tolerance: f64::NAN,
            ..Default::default()
        };
        assert!(nan_tolerance.validate("bus").is_err());
        let nan_distance = LinkCandidateParams {
            max_link_candidate_distance: f64::NAN,
            ..Default::default()
        };
        assert!(nan_distance.validate("bus").is_err());
        let zero_distance = LinkCandidateParams {
            max_link_candidate_distance: 0.0,
            ..Default::default()
        };
        assert!(zero_distance.validate("bus").is_err());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let params: LinkCandidateParams = toml::from_str(
            r#"
            search_radius = 50.0
            network_modes = ["bus", "car"]
            travel_cost_type = "travel_time"
            "#,
        )
        .expect("valid toml");
        assert_eq!(params.max_n_closest_links, 6);
        assert_eq!(params.travel_cost_type, TravelCostType::TravelTime);
        assert!(!params.use_artificial_loop_link);
        assert_eq!(params.network_modes.len(), 2);
    }
}
