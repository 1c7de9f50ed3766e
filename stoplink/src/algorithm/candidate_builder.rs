use kdam::{tqdm, Bar, BarBuilder, BarExt};
use rayon::prelude::*;
use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};
use stoplink_core::model::network::{LinkId, Network};

use super::link_search::{
    create_artificial_stop_link, loop_link_modes, reduce_sequenced_links, ArtificialStopLink,
    SpatialLinkIndex, LOOP_LINK_LENGTH,
};
use crate::{
    config::LinkCandidateConfiguration,
    model::{
        candidate::{CandidateSet, LinkCandidate, LinkCandidateStore},
        cost::{CostContext, CostOracleProvider},
        schedule::{StopFacility, StopFacilityId, TransitLineId, TransitRouteId, TransitSchedule},
        LinkCandidateError,
    },
};

/// the first visit of a stop facility by a schedule mode. the visiting line
/// and route provide the cost context for the candidates of this pair.
#[derive(Debug, Clone)]
pub struct StopVisit<'a> {
    pub schedule_mode: &'a str,
    pub transit_line_id: &'a TransitLineId,
    pub transit_route_id: &'a TransitRouteId,
    pub stop_facility: &'a StopFacility,
}

/// link candidates computed for a single (schedule mode, stop facility) pair.
#[derive(Debug)]
struct PairCandidates {
    schedule_mode: String,
    stop_facility_id: StopFacilityId,
    candidates: CandidateSet,
    artificial_link: Option<ArtificialStopLink>,
}

/// builds the link candidates for every (schedule mode, stop facility) pair
/// visited in the schedule.
///
/// pairs are computed independently against the unmodified network, in parallel
/// unless disabled by the configuration. results are then stored in schedule
/// order and any loop links created for stops without nearby links are added
/// to the network.
///
/// # Arguments
///
/// * `schedule` - transit schedule with the stop facilities to match
/// * `network`  - network to search, receives the created loop links
/// * `config`   - search parameters by schedule mode
/// * `provider` - resolves link cost oracles for each visit
///
/// # Returns
///
/// * the candidate store and the ids of loop links added to the network
pub fn build(
    schedule: &TransitSchedule,
    network: &mut Network,
    config: &LinkCandidateConfiguration,
    provider: &dyn CostOracleProvider,
) -> Result<(LinkCandidateStore, Vec<LinkId>), LinkCandidateError> {
    let visits = collect_stop_visits(schedule, config)?;
    log::info!(
        "searching link candidates for {} (schedule mode, stop facility) pairs",
        visits.len()
    );

    let results = {
        let network: &Network = network;
        let index = SpatialLinkIndex::new(network)?;
        log::debug!("indexed {} network links", index.len());
        if config.parallelize {
            let bar: Arc<Mutex<Bar>> = Arc::new(Mutex::new(
                BarBuilder::default()
                    .desc("link candidates")
                    .total(visits.len())
                    .build()
                    .map_err(LinkCandidateError::InternalError)?,
            ));
            visits
                .par_iter()
                .map(|visit| {
                    if let Ok(mut bar) = bar.lock() {
                        let _ = bar.update(1);
                    }
                    candidates_for_visit(visit, network, &index, config, provider)
                })
                .collect::<Result<Vec<_>, _>>()?
        } else {
            let visit_iter = tqdm!(visits.iter(), desc = "link candidates", total = visits.len());
            visit_iter
                .map(|visit| candidates_for_visit(visit, network, &index, config, provider))
                .collect::<Result<Vec<_>, _>>()?
        }
    };

    let mut store = LinkCandidateStore::new();
    let mut artificial_links: Vec<LinkId> = vec![];
    for pair in results.into_iter() {
        if let Some(artificial) = pair.artificial_link {
            let exists = network.contains_link(&artificial.link.id);
            let link_id = artificial.add_to(network)?;
            if !exists {
                artificial_links.push(link_id);
            }
        }
        store.replace(&pair.schedule_mode, pair.stop_facility_id, pair.candidates);
    }

    log::info!(
        "created {} link candidates for {} pairs, added {} artificial loop links",
        store.n_candidates(),
        store.n_entries(),
        artificial_links.len()
    );
    Ok((store, artificial_links))
}

/// walks every line, route and stop visit in schedule order, keeping the first
/// visit of each (schedule mode, stop facility) pair. fails on a schedule mode
/// without search parameters.
pub fn collect_stop_visits<'a>(
    schedule: &'a TransitSchedule,
    config: &LinkCandidateConfiguration,
) -> Result<Vec<StopVisit<'a>>, LinkCandidateError> {
    let mut observed = HashSet::new();
    let mut visits = vec![];
    for line in schedule.lines() {
        for route in line.routes.iter() {
            let schedule_mode = route.transport_mode.as_str();
            for stop in route.stops.iter() {
                if !observed.insert((schedule_mode, &stop.stop_facility_id)) {
                    continue;
                }
                let _ = config.get_params(schedule_mode)?;
                let stop_facility = schedule.get_facility(&stop.stop_facility_id)?;
                visits.push(StopVisit {
                    schedule_mode,
                    transit_line_id: &line.id,
                    transit_route_id: &route.id,
                    stop_facility,
                });
            }
        }
    }
    Ok(visits)
}

/// finds and scores the link candidates of one visit without modifying the network.
fn candidates_for_visit(
    visit: &StopVisit,
    network: &Network,
    index: &SpatialLinkIndex,
    config: &LinkCandidateConfiguration,
    provider: &dyn CostOracleProvider,
) -> Result<PairCandidates, LinkCandidateError> {
    let stop_facility = visit.stop_facility;
    let params = config.get_params(visit.schedule_mode)?;
    let context = CostContext::for_route(
        visit.schedule_mode,
        visit.transit_line_id,
        visit.transit_route_id,
    );
    let oracle = provider.get_cost_oracle(&context)?;

    // a pre-assigned link is the only candidate
    if let Some(link_id) = &stop_facility.link_id {
        let link = network.get_link(link_id).ok_or_else(|| {
            LinkCandidateError::MissingReferencedLink(stop_facility.id.clone(), link_id.clone())
        })?;
        let candidate = LinkCandidate::new(
            link.id.clone(),
            stop_facility.id.clone(),
            oracle.link_travel_cost(link),
        );
        return Ok(PairCandidates {
            schedule_mode: String::from(visit.schedule_mode),
            stop_facility_id: stop_facility.id.clone(),
            candidates: CandidateSet::from([candidate]),
            artificial_link: None,
        });
    }

    let near_links = if params.use_artificial_loop_link {
        vec![]
    } else {
        let found = index.find_closest_links(network, &stop_facility.coord(), params);
        reduce_sequenced_links(found, network)
    };

    if near_links.is_empty() {
        let artificial = create_artificial_stop_link(
            stop_facility,
            &config.prefix_artificial,
            LOOP_LINK_LENGTH,
            loop_link_modes(),
        );
        // an existing link with the same id is reused, so it is also what gets scored
        let link = network
            .get_link(&artificial.link.id)
            .unwrap_or(&artificial.link);
        let candidate = LinkCandidate::new(
            link.id.clone(),
            stop_facility.id.clone(),
            oracle.link_travel_cost(link),
        );
        return Ok(PairCandidates {
            schedule_mode: String::from(visit.schedule_mode),
            stop_facility_id: stop_facility.id.clone(),
            candidates: CandidateSet::from([candidate]),
            artificial_link: Some(artificial),
        });
    }

    let candidates = near_links
        .iter()
        .map(|near| {
            let link = network.get_link(&near.link_id).ok_or_else(|| {
                LinkCandidateError::InternalError(format!(
                    "spatial index returned link {} which is not in the network",
                    near.link_id
                ))
            })?;
            Ok(LinkCandidate::new(
                link.id.clone(),
                stop_facility.id.clone(),
                oracle.link_travel_cost(link),
            ))
        })
        .collect::<Result<CandidateSet, LinkCandidateError>>()?;

    Ok(PairCandidates {
        schedule_mode: String::from(visit.schedule_mode),
        stop_facility_id: stop_facility.id.clone(),
        candidates,
        artificial_link: None,
    })
}

#[cfg(test)]
mod tests {
    use super::collect_stop_visits;
    use crate::test_utils::{config, params_with_radius, route, schedule, stop};
    use itertools::Itertools;

    #[test]
    fn test_first_visit_of_each_pair_in_schedule_order() {
        let schedule = schedule(
            vec![stop("S1", 0.0, 0.0), stop("S2", 10.0, 0.0)],
            &[
                route("L1", "R1", "bus", &["S1", "S2", "S1"]),
                route("L2", "R2", "bus", &["S2"]),
                route("L2", "R3", "tram", &["S2"]),
            ],
        );
        let conf = config(&[("bus", params_with_radius(50.0)), ("tram", params_with_radius(50.0))]);
        let visits = collect_stop_visits(&schedule, &conf).expect("test invariant failed");
        let keys = visits
            .iter()
            .map(|v| {
                (
                    v.schedule_mode,
                    v.stop_facility.id.0.as_str(),
                    v.transit_route_id.0.as_str(),
                )
            })
            .collect_vec();
        assert_eq!(
            keys,
            vec![("bus", "S1", "R1"), ("bus", "S2", "R1"), ("tram", "S2", "R3")]
        );
    }
}
