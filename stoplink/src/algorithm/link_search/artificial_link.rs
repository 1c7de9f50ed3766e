use std::collections::BTreeSet;
use stoplink_core::model::network::{Link, LinkId, Network, NetworkError, Node, NodeId};

use crate::model::schedule::StopFacility;

/// network mode reserved for links that do not exist in the physical network
pub const ARTIFICIAL_LINK_MODE: &str = "artificial";
/// network mode reserved for loop links attached to a stop facility
pub const STOP_FACILITY_LOOP_LINK: &str = "stopFacilityLink";
/// nominal length of a loop link in meters
pub const LOOP_LINK_LENGTH: f64 = 20.0;
/// free speed of a loop link in meters per second
pub const LOOP_LINK_FREESPEED: f64 = 10.0;

pub fn loop_link_modes() -> BTreeSet<String> {
    BTreeSet::from([
        String::from(ARTIFICIAL_LINK_MODE),
        String::from(STOP_FACILITY_LOOP_LINK),
    ])
}

/// a loop link at a stop facility along with the node it starts and ends at.
/// created without touching the network so it can be built on worker threads.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtificialStopLink {
    pub node: Node,
    pub link: Link,
}

impl ArtificialStopLink {
    /// adds the node and link to the network. a link with the same id that
    /// already exists is reused, so a stop shared by several schedule modes
    /// only receives one loop link.
    ///
    /// # Returns
    ///
    /// * the id of the link in the network
    pub fn add_to(self, network: &mut Network) -> Result<LinkId, NetworkError> {
        let link_id = self.link.id.clone();
        if network.contains_link(&link_id) {
            return Ok(link_id);
        }
        if !network.contains_node(&self.node.id) {
            network.add_node(self.node)?;
        }
        network.add_link(self.link)?;
        Ok(link_id)
    }
}

/// creates a loop link at the location of a stop facility. node and link
/// ids are the artificial prefix followed by the stop facility id.
pub fn create_artificial_stop_link(
    stop_facility: &StopFacility,
    prefix_artificial: &str,
    length: f64,
    modes: BTreeSet<String>,
) -> ArtificialStopLink {
    let id = format!("{prefix_artificial}{}", stop_facility.id);
    let node_id = NodeId::from(id.as_str());
    let node = Node::new(node_id.clone(), stop_facility.coord());
    let link = Link::new(
        LinkId::from(id.as_str()),
        node_id.clone(),
        node_id,
        length,
        LOOP_LINK_FREESPEED,
        modes,
    );
    ArtificialStopLink { node, link }
}

#[cfg(test)]
mod tests {
    use super::{create_artificial_stop_link, loop_link_modes, LOOP_LINK_LENGTH};
    use crate::model::schedule::StopFacility;
    use geo::Coord;
    use stoplink_core::model::network::{LinkId, Network};

    fn stop() -> StopFacility {
        StopFacility::new("S1".into(), Coord { x: 3.0, y: 4.0 })
    }

    #[test]
    fn test_loop_link_shape() {
        let artificial = create_artificial_stop_link(&stop(), "pt_", LOOP_LINK_LENGTH, loop_link_modes());
        assert_eq!(artificial.link.id, LinkId::from("pt_S1"));
        assert!(artificial.link.is_loop());
        assert_eq!(artificial.link.from_node_id, artificial.node.id);
        assert_eq!(artificial.node.coord(), Coord { x: 3.0, y: 4.0 });
        assert_eq!(artificial.link.length, 20.0);
        assert!(artificial.link.modes.contains("artificial"));
        assert!(artificial.link.modes.contains("stopFacilityLink"));
    }

    #[test]
    fn test_add_to_reuses_existing_link() {
        let mut network = Network::empty();
        let first = create_artificial_stop_link(&stop(), "pt_", LOOP_LINK_LENGTH, loop_link_modes());
        let second = first.clone();
        let id1 = first.add_to(&mut network).expect("first add succeeds");
        let id2 = second.add_to(&mut network).expect("second add reuses");
        assert_eq!(id1, id2);
        assert_eq!(network.n_links(), 1);
        assert_eq!(network.n_nodes(), 1);
        assert_eq!(network.out_links(&"pt_S1".into()), &[LinkId::from("pt_S1")]);
    }
}
