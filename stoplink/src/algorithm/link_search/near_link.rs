use stoplink_core::model::network::LinkId;

/// a link found near a query coordinate, with its distance to that coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct NearLink {
    pub link_id: LinkId,
    pub distance: f64,
}

impl NearLink {
    pub fn new(link_id: LinkId, distance: f64) -> NearLink {
        NearLink { link_id, distance }
    }
}
