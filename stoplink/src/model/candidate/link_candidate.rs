use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use stoplink_core::model::network::LinkId;

use crate::model::schedule::StopFacilityId;

/// a network link proposed as the location of a stop facility, annotated with
/// the travel cost of the link for the mode being matched.
///
/// two candidates are equal when link, stop facility and cost all match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinkCandidate {
    link_id: LinkId,
    stop_facility_id: StopFacilityId,
    cost: OrderedFloat<f64>,
}

impl LinkCandidate {
    pub fn new(link_id: LinkId, stop_facility_id: StopFacilityId, cost: f64) -> LinkCandidate {
        LinkCandidate {
            link_id,
            stop_facility_id,
            cost: OrderedFloat(cost),
        }
    }

    pub fn link_id(&self) -> &LinkId {
        &self.link_id
    }

    pub fn stop_facility_id(&self) -> &StopFacilityId {
        &self.stop_facility_id
    }

    pub fn cost(&self) -> f64 {
        self.cost.into_inner()
    }
}

/// candidates are ranked by ascending cost. link id and then stop facility id
/// break ties, so iterating a sorted set is deterministic and the cheapest
/// candidate comes first.
impl Ord for LinkCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.link_id.cmp(&other.link_id))
            .then_with(|| self.stop_facility_id.cmp(&other.stop_facility_id))
    }
}

impl PartialOrd for LinkCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::LinkCandidate;
    use itertools::Itertools;
    use std::collections::BTreeSet;

    #[test]
    fn test_orders_by_cost_then_link() {
        let set: BTreeSet<LinkCandidate> = BTreeSet::from([
            LinkCandidate::new("c".into(), "s".into(), 5.0),
            LinkCandidate::new("b".into(), "s".into(), 1.0),
            LinkCandidate::new("a".into(), "s".into(), 5.0),
        ]);
        let links = set.iter().map(|c| c.link_id().0.as_str()).collect_vec();
        assert_eq!(links, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_same_link_different_cost_not_equal() {
        let a = LinkCandidate::new("a".into(), "s".into(), 1.0);
        let b = LinkCandidate::new("a".into(), "s".into(), 2.0);
        assert_ne!(a, b);
        let set: BTreeSet<LinkCandidate> = BTreeSet::from([a.clone(), b, a]);
        assert_eq!(set.len(), 2);
    }
}
