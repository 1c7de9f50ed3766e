use std::{collections::HashMap, sync::Arc};

use super::{CostContext, CostOracleProvider, LinkCostOracle};
use crate::{
    config::LinkCandidateConfiguration,
    model::{
        schedule::{TransitLineId, TransitRouteId},
        LinkCandidateError,
    },
};

/// cost oracles by schedule mode, with optional overrides for individual
/// (line, route) pairs. an override takes precedence whenever the cost context
/// names that line and route.
#[derive(Default, Clone)]
pub struct ModeCostOracles {
    mode_oracles: HashMap<String, Arc<dyn LinkCostOracle>>,
    route_oracles: HashMap<(TransitLineId, TransitRouteId), Arc<dyn LinkCostOracle>>,
}

impl ModeCostOracles {
    /// creates one oracle per configured schedule mode from its travel cost type.
    pub fn new(config: &LinkCandidateConfiguration) -> ModeCostOracles {
        let mode_oracles = config
            .modes
            .iter()
            .map(|(mode, params)| {
                let oracle: Arc<dyn LinkCostOracle> = Arc::new(params.travel_cost_type);
                (mode.clone(), oracle)
            })
            .collect();
        ModeCostOracles {
            mode_oracles,
            route_oracles: HashMap::new(),
        }
    }

    pub fn with_mode_oracle(
        mut self,
        schedule_mode: &str,
        oracle: Arc<dyn LinkCostOracle>,
    ) -> ModeCostOracles {
        self.mode_oracles.insert(String::from(schedule_mode), oracle);
        self
    }

    pub fn with_route_oracle(
        mut self,
        transit_line_id: TransitLineId,
        transit_route_id: TransitRouteId,
        oracle: Arc<dyn LinkCostOracle>,
    ) -> ModeCostOracles {
        self.route_oracles
            .insert((transit_line_id, transit_route_id), oracle);
        self
    }
}

impl CostOracleProvider for ModeCostOracles {
    fn get_cost_oracle(
        &self,
        context: &CostContext,
    ) -> Result<Arc<dyn LinkCostOracle>, LinkCandidateError> {
        let route_oracle = context.route_key().and_then(|(line_id, route_id)| {
            self.route_oracles
                .get(&(line_id.clone(), route_id.clone()))
                .cloned()
        });
        match route_oracle {
            Some(oracle) => Ok(oracle),
            None => self
                .mode_oracles
                .get(context.schedule_mode)
                .cloned()
                .ok_or_else(|| {
                    LinkCandidateError::MissingConfiguration(context.schedule_mode.to_string())
                }),
        }
    }
}
