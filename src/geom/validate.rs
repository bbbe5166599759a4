use ahash::AHashSet;
use geo::Relate;
use rstar::RTree;
use serde::Serialize;
use tracing::debug;

use crate::config::EngineConfig;
use crate::types::{Area, AreaId, Point};

use super::{segment, BoundingBox, Polygon};

/// Verdict on a candidate area polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationOutcome {
    Ok,
    /// Fewer than three vertices, non-finite coordinates, or all collinear.
    Degenerate,
    /// Two boundary edges cross or overlap.
    SelfIntersecting,
    DuplicateVertices,
    /// Interior overlap with, or nesting inside/around, an existing area.
    Overlapping,
    /// Same ring as an existing area.
    AlreadyExists,
}

impl ValidationOutcome {
    #[inline] pub fn is_ok(self) -> bool { self == ValidationOutcome::Ok }
}

/// Decides whether a polygon may be stored as a new (or edited) area.
///
/// Checks run in a fixed order and the first failure wins: degeneracy,
/// duplicate vertices, self-intersection, equality with an existing area,
/// then overlap with an existing area.
#[derive(Debug, Clone, Default)]
pub struct PolygonValidator {
    config: EngineConfig,
}

impl PolygonValidator {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Validate `candidate` against `existing`, ignoring the area with id
    /// `exclude` (the area being edited, if any).
    pub fn validate(&self, candidate: &Polygon, existing: &[Area], exclude: Option<AreaId>) -> ValidationOutcome {
        let outcome = match self.check_shape(candidate) {
            ValidationOutcome::Ok => self.check_against(candidate, existing, exclude),
            failed => failed,
        };
        debug!(vertices = candidate.len(), existing = existing.len(), ?exclude, ?outcome, "validated polygon");
        outcome
    }

    /// Checks that depend only on the candidate itself.
    pub fn check_shape(&self, candidate: &Polygon) -> ValidationOutcome {
        if self.is_degenerate(candidate) { return ValidationOutcome::Degenerate }
        if has_duplicate_vertices(candidate) { return ValidationOutcome::DuplicateVertices }
        if is_self_intersecting(candidate) { return ValidationOutcome::SelfIntersecting }
        ValidationOutcome::Ok
    }

    /// Returns true if the ring has fewer than three vertices, a non-finite
    /// coordinate, or every consecutive vertex triple is collinear.
    pub fn is_degenerate(&self, polygon: &Polygon) -> bool {
        let vertices = polygon.vertices();
        if vertices.len() < 3 { return true }
        if vertices.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) { return true }

        vertices.windows(3)
            .all(|w| segment::cross(w[0], w[1], w[2]).abs() < self.config.collinear_epsilon)
    }

    /// Compare against the stored areas. Only areas whose bounding boxes
    /// meet the candidate's are considered, via an R-tree over the existing
    /// set.
    pub fn check_against(&self, candidate: &Polygon, existing: &[Area], exclude: Option<AreaId>) -> ValidationOutcome {
        let Some(rect) = candidate.bounding_rect() else { return ValidationOutcome::Degenerate };

        let rtree = RTree::bulk_load(existing.iter().enumerate()
            .filter(|(_, area)| Some(area.id) != exclude)
            .filter_map(|(i, area)| BoundingBox::of(i, &area.polygon))
            .collect());

        let mut nearby: Vec<&Area> = rtree
            .locate_in_envelope_intersecting(&BoundingBox::envelope_around(&rect, self.config.boundary_tolerance))
            .map(|bbox| &existing[bbox.idx()])
            .collect();
        nearby.sort_by_key(|area| area.id);

        if nearby.iter().any(|area| candidate.same_ring(&area.polygon)) {
            return ValidationOutcome::AlreadyExists;
        }
        if nearby.iter().any(|area| interiors_overlap(candidate.as_geo(), area.polygon.as_geo())) {
            return ValidationOutcome::Overlapping;
        }
        ValidationOutcome::Ok
    }
}

/// Validate with the default tolerances.
pub fn validate_polygon(candidate: &Polygon, existing: &[Area], exclude: Option<AreaId>) -> ValidationOutcome {
    PolygonValidator::default().validate(candidate, existing, exclude)
}

/// Returns true if any two vertices have exactly equal coordinates.
fn has_duplicate_vertices(polygon: &Polygon) -> bool {
    // Adding 0.0 folds -0.0 onto 0.0 so both hash alike.
    let key = |p: &Point| ((p.x + 0.0).to_bits(), (p.y + 0.0).to_bits());
    let mut seen = AHashSet::with_capacity(polygon.len());
    polygon.vertices().iter().any(|p| !seen.insert(key(p)))
}

/// Returns true if any two boundary edges cross through their interiors or
/// overlap along a stretch, or a vertex rests on another edge. Consecutive
/// edges meeting at their shared vertex are allowed.
fn is_self_intersecting(polygon: &Polygon) -> bool {
    let edges: Vec<_> = polygon.edges().collect();
    (0..edges.len()).any(|i| {
        (i + 1..edges.len()).any(|j| segment::crosses(edges[i], edges[j]))
    })
}

/// DE-9IM `T********` (interiors share a point) or one polygon covering the
/// other. Boundary-only contact is not an overlap.
fn interiors_overlap(a: &geo::Polygon<f64>, b: &geo::Polygon<f64>) -> bool {
    let im = a.relate(b);
    (im.is_intersects() && !im.is_touches()) || im.is_covers() || im.is_coveredby()
}
