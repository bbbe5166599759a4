use serde::{Deserialize, Serialize};

use crate::geom::Polygon;

use super::AreaId;

/// A named, persisted area. The polygon is assumed to have passed
/// validation before it was stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub id: AreaId,
    pub name: String,
    #[serde(rename = "areaPoints")]
    pub polygon: Polygon,
}

impl Area {
    pub fn new(id: AreaId, name: impl Into<String>, polygon: Polygon) -> Self {
        Self { id, name: name.into(), polygon }
    }
}
