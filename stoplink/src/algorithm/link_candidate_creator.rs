use stoplink_core::model::network::{LinkId, Network};

use super::{candidate_builder, manual_merge};
use crate::{
    config::LinkCandidateConfiguration,
    model::{
        candidate::{LinkCandidateStore, MappingDiagnostic},
        cost::CostOracleProvider,
        schedule::TransitSchedule,
        LinkCandidateError,
    },
};

/// result of link candidate creation.
#[derive(Debug)]
pub struct LinkCandidateOutput {
    pub store: LinkCandidateStore,
    /// loop links added to the network for stop facilities without nearby links
    pub artificial_links: Vec<LinkId>,
    pub diagnostics: Vec<MappingDiagnostic>,
}

/// creates the link candidates of every stop facility in the schedule, first
/// by searching the network and then by applying the manual link candidates
/// of the configuration. artificial loop links are added to the network.
pub fn create_link_candidates(
    schedule: &TransitSchedule,
    network: &mut Network,
    config: &LinkCandidateConfiguration,
    provider: &dyn CostOracleProvider,
) -> Result<LinkCandidateOutput, LinkCandidateError> {
    config.validate()?;
    let (mut store, artificial_links) =
        candidate_builder::build(schedule, network, config, provider)?;
    let diagnostics = manual_merge::merge(
        &mut store,
        &config.manual_link_candidates,
        schedule,
        network,
        config,
        provider,
    )?;
    Ok(LinkCandidateOutput {
        store,
        artificial_links,
        diagnostics,
    })
}
