use std::sync::Arc;
use stoplink_core::model::network::Link;

use super::CostContext;
use crate::model::LinkCandidateError;

/// scores a network link with the travel cost used to rank link candidates.
pub trait LinkCostOracle: Send + Sync {
    fn link_travel_cost(&self, link: &Link) -> f64;
}

/// resolves the cost oracle for a schedule context.
pub trait CostOracleProvider: Send + Sync {
    fn get_cost_oracle(
        &self,
        context: &CostContext,
    ) -> Result<Arc<dyn LinkCostOracle>, LinkCandidateError>;
}
