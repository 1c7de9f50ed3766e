use geo::Coord;
use itertools::Itertools;
use rstar::primitives::{GeomWithData, Line};
use rstar::{RTree, AABB};
use stoplink_core::{
    model::network::{LinkId, Network, NetworkError},
    util::geo_utils,
};

use super::NearLink;
use crate::config::LinkCandidateParams;

pub type IndexedLink = GeomWithData<Line<[f64; 2]>, LinkId>;

/// R-tree over the straight segments of all network links.
pub struct SpatialLinkIndex {
    rtree: RTree<IndexedLink>,
}

impl SpatialLinkIndex {
    /// indexes every link of the network. links added to the network later
    /// are not part of the index.
    pub fn new(network: &Network) -> Result<SpatialLinkIndex, NetworkError> {
        let objects = network
            .links()
            .into_iter()
            .map(|link| {
                let line = network.link_line(link)?;
                Ok(GeomWithData::new(
                    geo_utils::as_rtree_line(&line),
                    link.id.clone(),
                ))
            })
            .collect::<Result<Vec<_>, NetworkError>>()?;
        let rtree = RTree::bulk_load(objects);
        Ok(SpatialLinkIndex { rtree })
    }

    pub fn len(&self) -> usize {
        self.rtree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// finds the links closest to a coordinate, ordered by distance and then link id.
    ///
    /// only links within `search_radius` that allow one of the `network_modes`
    /// are considered, and none beyond `max_link_candidate_distance`. links are
    /// accepted in groups of equal distance until `max_n_closest_links` is reached.
    /// after that, further groups are accepted while their distance is within
    /// `link_distance_tolerance` times the distance of the last group accepted
    /// below the limit.
    ///
    /// # Arguments
    ///
    /// * `network` - network the index was built from
    /// * `coord`   - query location
    /// * `params`  - search parameters of the schedule mode
    ///
    /// # Returns
    ///
    /// * the accepted links with their distances, possibly empty
    pub fn find_closest_links(
        &self,
        network: &Network,
        coord: &Coord<f64>,
        params: &LinkCandidateParams,
    ) -> Vec<NearLink> {
        let radius = params.search_radius;
        let envelope = AABB::from_corners(
            [coord.x - radius, coord.y - radius],
            [coord.x + radius, coord.y + radius],
        );
        let sorted = self
            .rtree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|obj| match network.get_link(&obj.data) {
                Some(link) => link.allows_any_mode(&params.network_modes),
                None => false,
            })
            .map(|obj| {
                let line = geo_utils::from_rtree_line(obj.geom());
                NearLink::new(obj.data.clone(), geo_utils::distance_to_segment(coord, &line))
            })
            .filter(|near| near.distance <= radius)
            .sorted_by(|a, b| {
                a.distance
                    .total_cmp(&b.distance)
                    .then_with(|| a.link_id.cmp(&b.link_id))
            })
            .collect_vec();

        let mut closest_links: Vec<NearLink> = vec![];
        let mut max_soft_constraint_distance = 0.0;
        for (distance, group) in &sorted.into_iter().chunk_by(|near| near.distance) {
            if distance > params.max_link_candidate_distance {
                break;
            }
            if closest_links.len() < params.max_n_closest_links {
                max_soft_constraint_distance = distance * params.link_distance_tolerance;
            } else if distance > max_soft_constraint_distance {
                break;
            }
            closest_links.extend(group);
        }
        closest_links
    }
}
