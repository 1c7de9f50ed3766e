mod cost_context;
mod link_cost_oracle;
mod mode_cost_oracles;
mod travel_cost_type;

pub use cost_context::CostContext;
pub use link_cost_oracle::{CostOracleProvider, LinkCostOracle};
pub use mode_cost_oracles::ModeCostOracles;
pub use travel_cost_type::TravelCostType;
