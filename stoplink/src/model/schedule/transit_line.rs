use serde::{Deserialize, Serialize};

use super::{TransitLineId, TransitRoute};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitLine {
    pub id: TransitLineId,
    #[serde(default)]
    pub routes: Vec<TransitRoute>,
}

impl TransitLine {
    pub fn new(id: TransitLineId, routes: Vec<TransitRoute>) -> TransitLine {
        TransitLine { id, routes }
    }
}
