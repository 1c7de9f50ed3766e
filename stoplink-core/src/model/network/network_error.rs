use thiserror::Error;

use super::{LinkId, NodeId};

#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("attempting to get node '{0}' not in network")]
    MissingNodeId(NodeId),
    #[error("attempting to get link '{0}' not in network")]
    MissingLinkId(LinkId),
    #[error("link '{0}' references node '{1}' not in network")]
    LinkMissingNode(LinkId, NodeId),
    #[error("node '{0}' already exists in network")]
    DuplicateNodeId(NodeId),
    #[error("link '{0}' already exists in network")]
    DuplicateLinkId(LinkId),
    #[error("failure reading network file {0}: {1}")]
    ReadError(String, String),
}
