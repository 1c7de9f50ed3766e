use crate::model::schedule::{TransitLineId, TransitRouteId};

/// the schedule context a link cost is requested for. automatic candidates are
/// scored for the line and route that first visited a stop, manual candidates
/// only know their schedule mode.
#[derive(Debug, Clone, Copy)]
pub struct CostContext<'a> {
    pub schedule_mode: &'a str,
    pub transit_line_id: Option<&'a TransitLineId>,
    pub transit_route_id: Option<&'a TransitRouteId>,
}

impl<'a> CostContext<'a> {
    pub fn for_route(
        schedule_mode: &'a str,
        transit_line_id: &'a TransitLineId,
        transit_route_id: &'a TransitRouteId,
    ) -> CostContext<'a> {
        CostContext {
            schedule_mode,
            transit_line_id: Some(transit_line_id),
            transit_route_id: Some(transit_route_id),
        }
    }

    pub fn for_mode(schedule_mode: &'a str) -> CostContext<'a> {
        CostContext {
            schedule_mode,
            transit_line_id: None,
            transit_route_id: None,
        }
    }

    /// the (line, route) pair, when this context names both.
    pub fn route_key(&self) -> Option<(&'a TransitLineId, &'a TransitRouteId)> {
        self.transit_line_id.zip(self.transit_route_id)
    }
}
