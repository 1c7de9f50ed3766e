use std::collections::BTreeSet;
use stoplink_core::{model::network::Network, util::geo_utils};

use crate::{
    config::{LinkCandidateConfiguration, ManualLinkCandidates},
    model::{
        candidate::{CandidateSet, LinkCandidate, LinkCandidateStore, MappingDiagnostic},
        cost::{CostContext, CostOracleProvider, LinkCostOracle},
        schedule::{StopFacility, StopFacilityId, TransitSchedule},
        LinkCandidateError,
    },
};

/// applies manual link candidates to the store in declaration order.
///
/// unknown stop facilities and links are skipped with a diagnostic. manual links
/// beyond the maximum candidate distance of a mode are kept with a diagnostic.
/// with `replace` the resolved links become the whole candidate set, otherwise
/// they are added to the existing one.
///
/// # Arguments
///
/// * `store`    - candidates found by the automatic search
/// * `manual`   - manual link candidates, applied in order
/// * `schedule` - schedule the stop facilities are taken from
/// * `network`  - network the links are taken from
/// * `config`   - parameters by schedule mode
/// * `provider` - resolves link cost oracles by schedule mode
///
/// # Returns
///
/// * the diagnostics collected while applying the manual candidates
pub fn merge(
    store: &mut LinkCandidateStore,
    manual: &[ManualLinkCandidates],
    schedule: &TransitSchedule,
    network: &Network,
    config: &LinkCandidateConfiguration,
    provider: &dyn CostOracleProvider,
) -> Result<Vec<MappingDiagnostic>, LinkCandidateError> {
    let mut diagnostics = vec![];
    for entry in manual.iter() {
        if let Some(stop_facility_id) = &entry.stop_facility_id {
            if schedule.facility(stop_facility_id).is_none() {
                diagnostics.push(MappingDiagnostic::UnresolvedStopFacility {
                    stop_facility_id: stop_facility_id.clone(),
                });
                continue;
            }
        }

        let schedule_modes: BTreeSet<String> = if entry.schedule_modes.is_empty() {
            store.modes().into_iter().collect()
        } else {
            entry.schedule_modes.clone()
        };

        for schedule_mode in schedule_modes.iter() {
            let params = config.get_params(schedule_mode)?;
            let oracle = provider.get_cost_oracle(&CostContext::for_mode(schedule_mode))?;
            let stop_facility_ids = match &entry.stop_facility_id {
                Some(id) => vec![id.clone()],
                None => store.stop_facility_ids(schedule_mode),
            };
            for stop_facility_id in stop_facility_ids.into_iter() {
                let stop_facility = schedule.get_facility(&stop_facility_id)?;
                let resolved = resolve_links(
                    entry,
                    schedule_mode,
                    stop_facility,
                    params.max_link_candidate_distance,
                    network,
                    oracle.as_ref(),
                    &mut diagnostics,
                )?;
                apply(
                    store,
                    schedule_mode,
                    stop_facility_id,
                    resolved,
                    entry.replace,
                    &mut diagnostics,
                );
            }
        }
    }

    if !diagnostics.is_empty() {
        log::info!(
            "applied {} manual link candidate entries with {} diagnostics",
            manual.len(),
            diagnostics.len()
        );
    }
    Ok(diagnostics)
}

/// scores the links of a manual entry for one stop facility under one mode.
fn resolve_links(
    entry: &ManualLinkCandidates,
    schedule_mode: &str,
    stop_facility: &StopFacility,
    max_distance: f64,
    network: &Network,
    oracle: &dyn LinkCostOracle,
    diagnostics: &mut Vec<MappingDiagnostic>,
) -> Result<CandidateSet, LinkCandidateError> {
    let mut candidates = CandidateSet::new();
    for link_id in entry.link_ids.iter() {
        let Some(link) = network.get_link(link_id) else {
            diagnostics.push(MappingDiagnostic::UnresolvedLink {
                schedule_mode: String::from(schedule_mode),
                stop_facility_id: stop_facility.id.clone(),
                link_id: link_id.clone(),
            });
            continue;
        };
        let link_coord = network.link_coord(link)?;
        let distance = geo_utils::euclidean_distance(&stop_facility.coord(), &link_coord);
        if distance > max_distance {
            diagnostics.push(MappingDiagnostic::ThresholdExceeded {
                schedule_mode: String::from(schedule_mode),
                stop_facility_id: stop_facility.id.clone(),
                link_id: link_id.clone(),
                distance,
                max_distance,
            });
        }
        candidates.insert(LinkCandidate::new(
            link.id.clone(),
            stop_facility.id.clone(),
            oracle.link_travel_cost(link),
        ));
    }
    Ok(candidates)
}

fn apply(
    store: &mut LinkCandidateStore,
    schedule_mode: &str,
    stop_facility_id: StopFacilityId,
    resolved: CandidateSet,
    replace: bool,
    diagnostics: &mut Vec<MappingDiagnostic>,
) {
    match (replace, resolved.is_empty()) {
        (true, true) => {
            diagnostics.push(MappingDiagnostic::EmptyOverride {
                schedule_mode: String::from(schedule_mode),
                stop_facility_id: stop_facility_id.clone(),
            });
            let _ = store.replace(schedule_mode, stop_facility_id, resolved);
        }
        (true, false) => {
            let _ = store.replace(schedule_mode, stop_facility_id, resolved);
        }
        // an empty addition would leave an empty set behind for unvisited pairs
        (false, true) => {}
        (false, false) => store
            .get_or_create(schedule_mode, &stop_facility_id)
            .extend(resolved),
    }
}
