mod link;
mod link_id;
#[allow(clippy::module_inception)]
mod network;
mod network_error;
mod network_records;
mod node;
mod node_id;

pub use link::Link;
pub use link_id::LinkId;
pub use network::Network;
pub use network_error::NetworkError;
pub use network_records::NetworkRecords;
pub use node::Node;
pub use node_id::NodeId;
