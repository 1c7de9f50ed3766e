use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// identifier of a directed link in the network.
#[derive(
    Debug, Default, Clone, Eq, PartialEq, PartialOrd, Ord, Deserialize, Serialize, Hash,
)]
pub struct LinkId(pub String);

impl Display for LinkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for LinkId {
    fn from(value: &str) -> Self {
        LinkId(String::from(value))
    }
}
