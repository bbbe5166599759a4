use geo::Rect;
use rstar::{RTreeObject, AABB};

use super::Polygon;

/// A bounding box in an R-tree, associated with an area by its position in
/// the caller's slice.
#[derive(Debug, Clone)]
pub(super) struct BoundingBox {
    idx: usize, // Index of the corresponding Area in the input slice
    bbox: Rect<f64>,
}

impl BoundingBox {
    /// Bounding box of `polygon`, or `None` if it has no vertices.
    pub(super) fn of(idx: usize, polygon: &Polygon) -> Option<Self> {
        polygon.bounding_rect().map(|bbox| Self { idx, bbox })
    }

    /// Get the index of the corresponding area.
    #[inline] pub(super) fn idx(&self) -> usize { self.idx }

    /// Search envelope around `rect`, padded by `pad` on every side.
    pub(super) fn envelope_around(rect: &Rect<f64>, pad: f64) -> AABB<[f64; 2]> {
        AABB::from_corners(
            [rect.min().x - pad, rect.min().y - pad],
            [rect.max().x + pad, rect.max().y + pad],
        )
    }
}

impl RTreeObject for BoundingBox {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.bbox.min().into(), self.bbox.max().into())
    }
}
