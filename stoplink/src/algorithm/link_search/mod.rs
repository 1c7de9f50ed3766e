mod artificial_link;
mod near_link;
mod sequenced_links;
mod spatial_link_index;

pub use artificial_link::{
    create_artificial_stop_link, loop_link_modes, ArtificialStopLink, ARTIFICIAL_LINK_MODE,
    LOOP_LINK_FREESPEED, LOOP_LINK_LENGTH, STOP_FACILITY_LOOP_LINK,
};
pub use near_link::NearLink;
pub use sequenced_links::reduce_sequenced_links;
pub use spatial_link_index::{IndexedLink, SpatialLinkIndex};
