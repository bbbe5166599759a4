use serde::{Deserialize, Serialize};

use crate::types::{EdgeId, LocationId};

/// A directed, weighted edge between two locations. A bidirectional path is
/// stored as two of these with swapped endpoints; the generated back-edge
/// has `is_reversed` set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathEdge {
    pub id: EdgeId,
    #[serde(rename = "startLocationId")]
    pub start: LocationId,
    #[serde(rename = "endLocationId")]
    pub end: LocationId,
    pub weight: f64,
    #[serde(default)]
    pub is_reversed: bool,
}

impl PathEdge {
    pub fn new(id: EdgeId, start: LocationId, end: LocationId, weight: f64) -> Self {
        Self { id, start, end, weight, is_reversed: false }
    }

    /// The back-edge paired with this one, under a new id.
    pub fn reversed(&self, id: EdgeId) -> Self {
        Self { id, start: self.end, end: self.start, weight: self.weight, is_reversed: !self.is_reversed }
    }

    /// Returns true if `other` is this edge's partner in a bidirectional pair.
    #[inline]
    pub fn is_twin_of(&self, other: &PathEdge) -> bool {
        self.start == other.end && self.end == other.start && self.is_reversed != other.is_reversed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversed_edge_is_a_twin() {
        let edge = PathEdge::new(EdgeId(1), LocationId(1), LocationId(2), 3.5);
        let back = edge.reversed(EdgeId(2));
        assert_eq!((back.start, back.end, back.weight), (LocationId(2), LocationId(1), 3.5));
        assert!(back.is_reversed);
        assert!(edge.is_twin_of(&back));
        assert!(back.is_twin_of(&edge));
        assert!(!edge.is_twin_of(&edge));
    }

    #[test]
    fn wire_format_uses_location_field_names() {
        let edge: PathEdge = serde_json::from_str(
            r#"{"id": 4, "startLocationId": 1, "endLocationId": 2, "weight": 1.5}"#,
        ).unwrap();
        assert_eq!(edge, PathEdge::new(EdgeId(4), LocationId(1), LocationId(2), 1.5));

        let json = serde_json::to_value(edge.reversed(EdgeId(5))).unwrap();
        assert_eq!(json["isReversed"], true);
        assert_eq!(json["startLocationId"], 2);
    }
}
