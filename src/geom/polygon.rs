use geo::{BoundingRect, Contains, Line, LineString, Rect};
use serde::{Deserialize, Serialize};

use crate::types::Point;

use super::segment;

/// A closed polygon ring stored as its vertices in ring order. The closing
/// edge back to the first vertex is implied and the first vertex is never
/// repeated at the end.
///
/// Construction does not validate the ring; see `PolygonValidator`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Point>", into = "Vec<Point>")]
pub struct Polygon {
    vertices: Vec<Point>,
    /// Same ring as a geo polygon, for containment and relate queries.
    shape: geo::Polygon<f64>,
}

impl From<Vec<Point>> for Polygon {
    fn from(vertices: Vec<Point>) -> Self { Self::new(vertices) }
}

impl From<Polygon> for Vec<Point> {
    fn from(polygon: Polygon) -> Self { polygon.vertices }
}

impl Polygon {
    /// Build a polygon from its vertices in ring order.
    pub fn new(vertices: Vec<Point>) -> Self {
        let shape = geo::Polygon::new(LineString::from(vertices.clone()), vec![]);
        Self { vertices, shape }
    }

    /// Like `new`, but accepts a ring whose last vertex repeats the first.
    pub fn from_closed_ring(mut vertices: Vec<Point>) -> Self {
        if vertices.len() > 1 && vertices.first() == vertices.last() {
            vertices.pop();
        }
        Self::new(vertices)
    }

    /// Get the number of vertices (the implied closing vertex is not counted).
    #[inline] pub fn len(&self) -> usize { self.vertices.len() }

    /// Check if the polygon has no vertices.
    #[inline] pub fn is_empty(&self) -> bool { self.vertices.is_empty() }

    /// Get the vertices in ring order.
    #[inline] pub fn vertices(&self) -> &[Point] { &self.vertices }

    /// Get the ring as a geo polygon (closed, no holes).
    #[inline] pub fn as_geo(&self) -> &geo::Polygon<f64> { &self.shape }

    /// Iterate over the boundary edges, ending with the edge that closes the
    /// ring.
    pub fn edges(&self) -> impl Iterator<Item = Line<f64>> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Line::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Axis-aligned bounding box, or `None` for an empty polygon.
    pub fn bounding_rect(&self) -> Option<Rect<f64>> {
        self.shape.bounding_rect()
    }

    /// Shortest distance from `point` to the boundary ring.
    pub fn boundary_distance(&self, point: Point) -> f64 {
        self.edges()
            .map(|edge| segment::distance_to(edge, point))
            .fold(f64::INFINITY, f64::min)
    }

    /// Returns true if `point` is strictly inside the ring, or within
    /// `tolerance` of its boundary.
    pub fn contains_point(&self, point: Point, tolerance: f64) -> bool {
        let Some(rect) = self.bounding_rect() else { return false };
        if point.x < rect.min().x - tolerance || point.x > rect.max().x + tolerance
            || point.y < rect.min().y - tolerance || point.y > rect.max().y + tolerance {
            return false;
        }

        self.shape.contains(&geo::Point::from(point)) || self.boundary_distance(point) <= tolerance
    }

    /// Returns true if both rings visit the same vertices in the same cyclic
    /// order, from any starting vertex and in either direction.
    pub fn same_ring(&self, other: &Polygon) -> bool {
        let (a, b) = (&self.vertices, &other.vertices);
        let n = a.len();
        if n != b.len() { return false }
        if n == 0 { return true }

        (0..n).any(|offset| {
            (0..n).all(|i| a[i] == b[(offset + i) % n])
                || (0..n).all(|i| a[i] == b[(offset + n - i) % n])
        })
    }
}

#[cfg(test)]
mod tests {
    use geo::coord;

    use super::*;

    fn square() -> Polygon {
        Polygon::new(vec![
            coord! { x: 0.0, y: 0.0 },
            coord! { x: 0.0, y: 10.0 },
            coord! { x: 10.0, y: 10.0 },
            coord! { x: 10.0, y: 0.0 },
        ])
    }

    #[test]
    fn closing_vertex_is_dropped() {
        let ring = Polygon::from_closed_ring(vec![
            coord! { x: 0.0, y: 0.0 },
            coord! { x: 1.0, y: 0.0 },
            coord! { x: 0.0, y: 1.0 },
            coord! { x: 0.0, y: 0.0 },
        ]);
        assert_eq!(ring.len(), 3);
        assert_eq!(ring.edges().count(), 3);
    }

    #[test]
    fn edges_wrap_around_to_the_first_vertex() {
        let edges: Vec<_> = square().edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3].start, coord! { x: 10.0, y: 0.0 });
        assert_eq!(edges[3].end, coord! { x: 0.0, y: 0.0 });
    }

    #[test]
    fn interior_points_are_contained() {
        assert!(square().contains_point(coord! { x: 5.0, y: 5.0 }, 1e-6));
        assert!(!square().contains_point(coord! { x: -5.0, y: -5.0 }, 1e-6));
        assert!(!square().contains_point(coord! { x: 500.0, y: 5.0 }, 1e-6));
    }

    #[test]
    fn boundary_points_are_contained() {
        let poly = square();
        assert!(poly.contains_point(coord! { x: 0.0, y: 5.0 }, 1e-6));
        assert!(poly.contains_point(coord! { x: 10.0, y: 10.0 }, 1e-6));
        assert!(poly.contains_point(coord! { x: 10.0 + 5e-7, y: 3.0 }, 1e-6));
        assert!(!poly.contains_point(coord! { x: 10.0 + 1e-3, y: 3.0 }, 1e-6));
    }

    #[test]
    fn boundary_distance_is_zero_on_the_ring() {
        assert_eq!(square().boundary_distance(coord! { x: 10.0, y: 4.0 }), 0.0);
        assert_eq!(square().boundary_distance(coord! { x: 5.0, y: 4.0 }), 4.0);
    }

    #[test]
    fn same_ring_ignores_start_and_direction() {
        let poly = square();
        let mut rotated = poly.vertices().to_vec();
        rotated.rotate_left(2);
        let mut reversed = poly.vertices().to_vec();
        reversed.reverse();

        assert!(poly.same_ring(&Polygon::new(rotated)));
        assert!(poly.same_ring(&Polygon::new(reversed)));
    }

    #[test]
    fn same_ring_rejects_reordered_vertices() {
        let poly = square();
        let mut shuffled = poly.vertices().to_vec();
        shuffled.swap(0, 1);
        assert!(!poly.same_ring(&Polygon::new(shuffled)));
        assert!(!poly.same_ring(&Polygon::new(poly.vertices()[..3].to_vec())));
    }

    #[test]
    fn deserializes_from_point_array() {
        let poly: Polygon = serde_json::from_str(
            r#"[{"x": 0.0, "y": 0.0}, {"x": 4.0, "y": 0.0}, {"x": 0.0, "y": 3.0}]"#,
        ).unwrap();
        assert_eq!(poly.len(), 3);
        assert_eq!(poly.vertices()[1], coord! { x: 4.0, y: 0.0 });
    }
}
