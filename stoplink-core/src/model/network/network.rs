use super::{Link, LinkId, NetworkError, NetworkRecords, Node, NodeId};
use crate::util::geo_utils;
use geo::{Coord, Line};
use itertools::Itertools;
use std::{collections::HashMap, path::Path};

/// directed network graph of nodes and links. each node keeps its in- and
/// out-adjacencies as link ids in insertion order.
#[derive(Default, Debug, Clone)]
pub struct Network {
    nodes: HashMap<NodeId, Node>,
    links: HashMap<LinkId, Link>,
    out_links: HashMap<NodeId, Vec<LinkId>>,
    in_links: HashMap<NodeId, Vec<LinkId>>,
}

impl Network {
    pub fn empty() -> Network {
        Network::default()
    }

    /// builds a network from node and link collections. every link must reference
    /// nodes found in `nodes`, and no id may appear twice.
    pub fn new(nodes: Vec<Node>, links: Vec<Link>) -> Result<Network, NetworkError> {
        let mut network = Network::empty();
        for node in nodes.into_iter() {
            network.add_node(node)?;
        }
        for link in links.into_iter() {
            network.add_link(link)?;
        }
        Ok(network)
    }

    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn n_links(&self) -> usize {
        self.links.len()
    }

    pub fn contains_node(&self, node_id: &NodeId) -> bool {
        self.nodes.contains_key(node_id)
    }

    pub fn contains_link(&self, link_id: &LinkId) -> bool {
        self.links.contains_key(link_id)
    }

    pub fn add_node(&mut self, node: Node) -> Result<(), NetworkError> {
        if self.contains_node(&node.id) {
            return Err(NetworkError::DuplicateNodeId(node.id));
        }
        self.nodes.insert(node.id.clone(), node);
        Ok(())
    }

    /// inserts a link and updates the adjacency lists of its endpoints.
    pub fn add_link(&mut self, link: Link) -> Result<(), NetworkError> {
        if self.contains_link(&link.id) {
            return Err(NetworkError::DuplicateLinkId(link.id));
        }
        for node_id in [&link.from_node_id, &link.to_node_id] {
            if !self.contains_node(node_id) {
                return Err(NetworkError::LinkMissingNode(
                    link.id.clone(),
                    node_id.clone(),
                ));
            }
        }
        self.out_links
            .entry(link.from_node_id.clone())
            .or_default()
            .push(link.id.clone());
        self.in_links
            .entry(link.to_node_id.clone())
            .or_default()
            .push(link.id.clone());
        self.links.insert(link.id.clone(), link);
        Ok(())
    }

    /// helper with error handling for getting the node data for a given node id
    pub fn get_node(&self, node_id: &NodeId) -> Result<&Node, NetworkError> {
        self.nodes
            .get(node_id)
            .ok_or_else(|| NetworkError::MissingNodeId(node_id.clone()))
    }

    /// looks up a link. absence is not an error here since callers often
    /// handle unknown link references from user input.
    pub fn get_link(&self, link_id: &LinkId) -> Option<&Link> {
        self.links.get(link_id)
    }

    /// links sorted by id, for deterministic traversal.
    pub fn links(&self) -> Vec<&Link> {
        self.links.values().sorted_by(|a, b| a.id.cmp(&b.id)).collect_vec()
    }

    pub fn out_links(&self, node_id: &NodeId) -> &[LinkId] {
        self.out_links
            .get(node_id)
            .map(|ids| ids.as_slice())
            .unwrap_or_default()
    }

    pub fn in_links(&self, node_id: &NodeId) -> &[LinkId] {
        self.in_links
            .get(node_id)
            .map(|ids| ids.as_slice())
            .unwrap_or_default()
    }

    /// the straight segment from the link's source node to its destination node.
    pub fn link_line(&self, link: &Link) -> Result<Line<f64>, NetworkError> {
        let src = self.get_node(&link.from_node_id)?;
        let dst = self.get_node(&link.to_node_id)?;
        Ok(Line::new(src.coord(), dst.coord()))
    }

    /// representative coordinate of a link, which is the midpoint of its segment.
    pub fn link_coord(&self, link: &Link) -> Result<Coord<f64>, NetworkError> {
        let line = self.link_line(link)?;
        Ok(geo_utils::midpoint(&line))
    }
}

impl TryFrom<NetworkRecords> for Network {
    type Error = NetworkError;

    fn try_from(records: NetworkRecords) -> Result<Self, Self::Error> {
        Network::new(records.nodes, records.links)
    }
}

impl TryFrom<&Path> for Network {
    type Error = NetworkError;

    /// reads a network from a JSON file containing `nodes` and `links` arrays.
    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let filename = path.to_str().unwrap_or_default().to_string();
        let s = std::fs::read_to_string(path)
            .map_err(|e| NetworkError::ReadError(filename.clone(), e.to_string()))?;
        let records: NetworkRecords = serde_json::from_str(&s)
            .map_err(|e| NetworkError::ReadError(filename, e.to_string()))?;
        Network::try_from(records)
    }
}

#[cfg(test)]
mod tests {
    use super::Network;
    use crate::model::network::{Link, LinkId, NetworkError, NetworkRecords, Node, NodeId};
    use geo::Coord;
    use std::collections::BTreeSet;

    fn node(id: &str, x: f64, y: f64) -> Node {
        Node::new(NodeId::from(id), Coord { x, y })
    }

    fn link(id: &str, src: &str, dst: &str) -> Link {
        Link::new(
            id.into(),
            src.into(),
            dst.into(),
            100.0,
            10.0,
            BTreeSet::from([String::from("bus")]),
        )
    }

    fn triangle() -> Network {
        Network::new(
            vec![node("a", 0.0, 0.0), node("b", 100.0, 0.0), node("c", 0.0, 100.0)],
            vec![link("ab", "a", "b"), link("bc", "b", "c"), link("ca", "c", "a")],
        )
        .expect("test invariant failed: could not build network")
    }

    #[test]
    fn test_adjacency() {
        let network = triangle();
        assert_eq!(network.n_nodes(), 3);
        assert_eq!(network.n_links(), 3);
        assert_eq!(network.out_links(&"b".into()), &[LinkId::from("bc")]);
        assert_eq!(network.in_links(&"b".into()), &[LinkId::from("ab")]);
        assert!(network.out_links(&"z".into()).is_empty());
    }

    #[test]
    fn test_link_coord_is_midpoint() {
        let network = triangle();
        let ab = network.get_link(&"ab".into()).expect("link exists");
        let coord = network.link_coord(ab).expect("nodes exist");
        assert_eq!(coord, Coord { x: 50.0, y: 0.0 });
    }

    #[test]
    fn test_link_with_missing_node_rejected() {
        let mut network = triangle();
        let result = network.add_link(link("ad", "a", "d"));
        assert!(matches!(result, Err(NetworkError::LinkMissingNode(_, _))));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut network = triangle();
        assert!(matches!(
            network.add_link(link("ab", "a", "b")),
            Err(NetworkError::DuplicateLinkId(_))
        ));
        assert!(matches!(
            network.add_node(node("a", 1.0, 1.0)),
            Err(NetworkError::DuplicateNodeId(_))
        ));
    }

    #[test]
    fn test_from_json_records() {
        let json = r#"{
            "nodes": [{"id": "a", "x": 0.0, "y": 0.0}, {"id": "b", "x": 3.0, "y": 4.0}],
            "links": [{"id": "ab", "from_node_id": "a", "to_node_id": "b",
                       "length": 5.0, "freespeed": 13.9, "modes": ["bus", "car"]}]
        }"#;
        let records: NetworkRecords = serde_json::from_str(json).expect("valid json");
        let network = Network::try_from(records).expect("valid network");
        let ab = network.get_link(&"ab".into()).expect("link exists");
        assert_eq!(ab.capacity, 9999.0);
        assert!(ab.modes.contains("car"));
    }
}
