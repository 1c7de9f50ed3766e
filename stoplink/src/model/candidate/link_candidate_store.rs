use std::collections::{BTreeMap, BTreeSet};

use super::LinkCandidate;
use crate::model::schedule::{StopFacilityId, TransitRoute};

/// the candidates of a single (schedule mode, stop facility) pair, cheapest first.
pub type CandidateSet = BTreeSet<LinkCandidate>;

/// link candidates by schedule transport mode and stop facility.
///
/// the store is populated by the candidate builder and the manual merge, after
/// which downstream consumers only read from it.
#[derive(Default, Debug, Clone)]
pub struct LinkCandidateStore {
    candidates: BTreeMap<String, BTreeMap<StopFacilityId, CandidateSet>>,
}

impl LinkCandidateStore {
    pub fn new() -> LinkCandidateStore {
        LinkCandidateStore::default()
    }

    /// candidates for a stop facility under a schedule mode. `None` when that
    /// mode never visited the stop facility. the set is only empty after a
    /// replacing manual entry that resolved no links.
    pub fn get(
        &self,
        schedule_mode: &str,
        stop_facility_id: &StopFacilityId,
    ) -> Option<&CandidateSet> {
        self.candidates
            .get(schedule_mode)
            .and_then(|stops| stops.get(stop_facility_id))
    }

    /// candidates for a stop facility as visited by a route, using the route's
    /// transport mode.
    pub fn get_for_route(
        &self,
        stop_facility_id: &StopFacilityId,
        route: &TransitRoute,
    ) -> Option<&CandidateSet> {
        self.get(&route.transport_mode, stop_facility_id)
    }

    pub fn contains(&self, schedule_mode: &str, stop_facility_id: &StopFacilityId) -> bool {
        self.get(schedule_mode, stop_facility_id).is_some()
    }

    /// schedule modes with at least one stop facility, in sorted order.
    pub fn modes(&self) -> Vec<String> {
        self.candidates.keys().cloned().collect()
    }

    /// stop facilities with candidates for a schedule mode, in sorted order.
    pub fn stop_facility_ids(&self, schedule_mode: &str) -> Vec<StopFacilityId> {
        self.candidates
            .get(schedule_mode)
            .map(|stops| stops.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// all entries in (mode, stop facility) order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &StopFacilityId, &CandidateSet)> {
        self.candidates.iter().flat_map(|(mode, stops)| {
            stops
                .iter()
                .map(move |(stop_id, candidates)| (mode, stop_id, candidates))
        })
    }

    pub fn n_entries(&self) -> usize {
        self.candidates.values().map(|stops| stops.len()).sum()
    }

    pub fn n_candidates(&self) -> usize {
        self.iter().map(|(_, _, candidates)| candidates.len()).sum()
    }

    /// gets the candidate set for this pair, inserting an empty one if absent.
    pub(crate) fn get_or_create(
        &mut self,
        schedule_mode: &str,
        stop_facility_id: &StopFacilityId,
    ) -> &mut CandidateSet {
        self.candidates
            .entry(String::from(schedule_mode))
            .or_default()
            .entry(stop_facility_id.clone())
            .or_default()
    }

    /// stores a candidate set, returning the set it replaced, if any.
    pub(crate) fn replace(
        &mut self,
        schedule_mode: &str,
        stop_facility_id: StopFacilityId,
        candidates: CandidateSet,
    ) -> Option<CandidateSet> {
        self.candidates
            .entry(String::from(schedule_mode))
            .or_default()
            .insert(stop_facility_id, candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::LinkCandidateStore;
    use crate::model::{
        candidate::LinkCandidate,
        schedule::{StopFacilityId, TransitRoute},
    };

    #[test]
    fn test_get_or_create_is_insert_if_absent() {
        let mut store = LinkCandidateStore::new();
        let stop = StopFacilityId::from("s1");
        store
            .get_or_create("bus", &stop)
            .insert(LinkCandidate::new("a".into(), stop.clone(), 1.0));
        store
            .get_or_create("bus", &stop)
            .insert(LinkCandidate::new("b".into(), stop.clone(), 2.0));
        assert_eq!(store.get("bus", &stop).map(|c| c.len()), Some(2));
        assert_eq!(store.n_entries(), 1);
        assert_eq!(store.n_candidates(), 2);
    }

    #[test]
    fn test_unobserved_mode_is_none() {
        let mut store = LinkCandidateStore::new();
        let stop = StopFacilityId::from("s1");
        store.replace(
            "bus",
            stop.clone(),
            [LinkCandidate::new("a".into(), stop.clone(), 1.0)].into(),
        );
        assert!(store.get("rail", &stop).is_none());
        assert!(store.contains("bus", &stop));
        let route = TransitRoute::new("r".into(), "bus", vec![]);
        assert!(store.get_for_route(&stop, &route).is_some());
    }

    #[test]
    fn test_iteration_order_is_deterministic() {
        let mut store = LinkCandidateStore::new();
        for (mode, stop) in [("rail", "b"), ("bus", "z"), ("bus", "a")] {
            let stop = StopFacilityId::from(stop);
            store.replace(
                mode,
                stop.clone(),
                [LinkCandidate::new("l".into(), stop, 1.0)].into(),
            );
        }
        let keys: Vec<(String, String)> = store
            .iter()
            .map(|(m, s, _)| (m.clone(), s.0.clone()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("bus".to_string(), "a".to_string()),
                ("bus".to_string(), "z".to_string()),
                ("rail".to_string(), "b".to_string()),
            ]
        );
        assert_eq!(store.modes(), vec!["bus".to_string(), "rail".to_string()]);
        assert_eq!(store.stop_facility_ids("bus").len(), 2);
    }
}
