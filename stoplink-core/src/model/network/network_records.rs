use serde::{Deserialize, Serialize};

use super::{Link, Node};

/// serialized form of a [`super::Network`], as read from a network file.
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct NetworkRecords {
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
}
