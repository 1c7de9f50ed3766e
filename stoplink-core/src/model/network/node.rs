use geo::Coord;
use serde::{Deserialize, Serialize};

use super::NodeId;

/// a network node in a projected (metric) coordinate system.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub x: f64,
    pub y: f64,
}

impl Node {
    pub fn new(id: NodeId, coord: Coord<f64>) -> Node {
        Node {
            id,
            x: coord.x,
            y: coord.y,
        }
    }

    pub fn coord(&self) -> Coord<f64> {
        Coord {
            x: self.x,
            y: self.y,
        }
    }
}
