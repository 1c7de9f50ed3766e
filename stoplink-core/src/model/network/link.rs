use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{LinkId, NodeId};

/// a directed network link a vehicle can traverse. lengths are in meters
/// and free speeds in meters per second.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub id: LinkId,
    pub from_node_id: NodeId,
    pub to_node_id: NodeId,
    pub length: f64,
    pub freespeed: f64,
    #[serde(default = "Link::default_capacity")]
    pub capacity: f64,
    /// network modes allowed on this link, for example "bus" or "rail".
    #[serde(default)]
    pub modes: BTreeSet<String>,
}

impl Link {
    pub fn new(
        id: LinkId,
        from_node_id: NodeId,
        to_node_id: NodeId,
        length: f64,
        freespeed: f64,
        modes: BTreeSet<String>,
    ) -> Link {
        Link {
            id,
            from_node_id,
            to_node_id,
            length,
            freespeed,
            capacity: Link::default_capacity(),
            modes,
        }
    }

    /// true if this link allows at least one of the given network modes.
    /// an empty mode filter accepts every link.
    pub fn allows_any_mode(&self, modes: &BTreeSet<String>) -> bool {
        modes.is_empty() || !self.modes.is_disjoint(modes)
    }

    /// a loop link starts and ends at the same node.
    pub fn is_loop(&self) -> bool {
        self.from_node_id == self.to_node_id
    }

    /// true if `other` travels the same node pair in the opposite direction.
    pub fn is_reverse_of(&self, other: &Link) -> bool {
        self.from_node_id == other.to_node_id && self.to_node_id == other.from_node_id
    }

    fn default_capacity() -> f64 {
        9999.0
    }
}
