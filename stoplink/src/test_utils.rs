//! fixtures shared by the unit tests of this crate.
use geo::Coord;
use itertools::Itertools;
use std::collections::BTreeSet;
use stoplink_core::model::network::{Link, Network, Node};

use crate::{
    config::{LinkCandidateConfiguration, LinkCandidateParams},
    model::schedule::{StopFacility, TransitLine, TransitRoute, TransitRouteStop, TransitSchedule},
};

/// a horizontal link centered over x = 0 at height `y`. the link is `length`
/// long, so with link length costs the cost can be chosen independently of the
/// distance to the origin.
pub struct OffsetLink<'a> {
    pub id: &'a str,
    pub y: f64,
    pub length: f64,
    pub mode: &'a str,
}

pub fn offset_link(id: &str, y: f64, length: f64) -> OffsetLink<'_> {
    OffsetLink {
        id,
        y,
        length,
        mode: "bus",
    }
}

/// builds a network of unconnected horizontal links.
pub fn offset_network(links: &[OffsetLink]) -> Network {
    let mut nodes = vec![];
    let mut network_links = vec![];
    for l in links.iter() {
        let src = format!("{}_src", l.id);
        let dst = format!("{}_dst", l.id);
        let half = l.length / 2.0;
        nodes.push(Node::new(src.as_str().into(), Coord { x: -half, y: l.y }));
        nodes.push(Node::new(dst.as_str().into(), Coord { x: half, y: l.y }));
        network_links.push(Link::new(
            l.id.into(),
            src.as_str().into(),
            dst.as_str().into(),
            l.length,
            10.0,
            BTreeSet::from([String::from(l.mode)]),
        ));
    }
    Network::new(nodes, network_links).expect("test invariant failed: invalid network")
}

pub fn stop(id: &str, x: f64, y: f64) -> StopFacility {
    StopFacility::new(id.into(), Coord { x, y })
}

/// a route of a line with the given transport mode and stop sequence.
pub struct RouteFixture<'a> {
    pub line: &'a str,
    pub route: &'a str,
    pub mode: &'a str,
    pub stops: &'a [&'a str],
}

pub fn route<'a>(line: &'a str, route: &'a str, mode: &'a str, stops: &'a [&'a str]) -> RouteFixture<'a> {
    RouteFixture {
        line,
        route,
        mode,
        stops,
    }
}

/// builds a schedule, grouping consecutive routes of the same line.
pub fn schedule(facilities: Vec<StopFacility>, routes: &[RouteFixture]) -> TransitSchedule {
    let lines = routes
        .iter()
        .chunk_by(|r| r.line)
        .into_iter()
        .map(|(line_id, group)| {
            let routes = group
                .map(|r| {
                    let stops = r
                        .stops
                        .iter()
                        .map(|s| TransitRouteStop::new((*s).into()))
                        .collect_vec();
                    TransitRoute::new(r.route.into(), r.mode, stops)
                })
                .collect_vec();
            TransitLine::new(line_id.into(), routes)
        })
        .collect_vec();
    TransitSchedule::new(facilities, lines).expect("test invariant failed: invalid schedule")
}

/// configuration with one parameter set per listed schedule mode. parallel
/// execution is off so test runs stay quiet and ordered.
pub fn config(modes: &[(&str, LinkCandidateParams)]) -> LinkCandidateConfiguration {
    LinkCandidateConfiguration {
        modes: modes
            .iter()
            .map(|(mode, params)| (String::from(*mode), params.clone()))
            .collect(),
        parallelize: false,
        ..Default::default()
    }
}

pub fn params_with_radius(search_radius: f64) -> LinkCandidateParams {
    LinkCandidateParams {
        search_radius,
        ..Default::default()
    }
}
