use geo::algorithm::line_intersection::{line_intersection, LineIntersection};
use geo::{Coord, Line};

/// 2-D cross product of the edge vectors `b - a` and `c - b`.
#[inline]
pub(super) fn cross(a: Coord<f64>, b: Coord<f64>, c: Coord<f64>) -> f64 {
    (b.x - a.x) * (c.y - b.y) - (b.y - a.y) * (c.x - b.x)
}

/// Euclidean distance from `p` to the closest point of the segment `line`.
pub(super) fn distance_to(line: Line<f64>, p: Coord<f64>) -> f64 {
    let (s, d) = (line.start, line.delta());
    let len2 = d.x * d.x + d.y * d.y;
    if len2 == 0.0 { return (p.x - s.x).hypot(p.y - s.y) }

    let t = (((p.x - s.x) * d.x + (p.y - s.y) * d.y) / len2).clamp(0.0, 1.0);
    (p.x - (s.x + t * d.x)).hypot(p.y - (s.y + t * d.y))
}

/// True if the segments meet anywhere other than at an endpoint they share.
/// This covers interior crossings, collinear overlaps, and an endpoint of
/// one resting on the interior of the other.
pub(super) fn crosses(a: Line<f64>, b: Line<f64>) -> bool {
    let shared = |p: Coord<f64>| is_endpoint(a, p) && is_endpoint(b, p);
    match line_intersection(a, b) {
        None => false,
        Some(LineIntersection::SinglePoint { intersection, is_proper }) => is_proper || !shared(intersection),
        Some(LineIntersection::Collinear { intersection }) => {
            intersection.start != intersection.end || !shared(intersection.start)
        }
    }
}

#[inline]
fn is_endpoint(line: Line<f64>, p: Coord<f64>) -> bool {
    line.start == p || line.end == p
}

#[cfg(test)]
mod tests {
    use geo::coord;

    use super::*;

    fn line(x0: f64, y0: f64, x1: f64, y1: f64) -> Line<f64> {
        Line::new(coord! { x: x0, y: y0 }, coord! { x: x1, y: y1 })
    }

    #[test]
    fn cross_sign_follows_turn_direction() {
        let (a, b) = (coord! { x: 0.0, y: 0.0 }, coord! { x: 1.0, y: 0.0 });
        assert!(cross(a, b, coord! { x: 1.0, y: 1.0 }) > 0.0);
        assert!(cross(a, b, coord! { x: 1.0, y: -1.0 }) < 0.0);
        assert_eq!(cross(a, b, coord! { x: 2.0, y: 0.0 }), 0.0);
    }

    #[test]
    fn distance_projects_onto_segment_or_clamps_to_endpoint() {
        let l = line(0.0, 0.0, 10.0, 0.0);
        assert_eq!(distance_to(l, coord! { x: 5.0, y: 3.0 }), 3.0);
        assert_eq!(distance_to(l, coord! { x: 13.0, y: 4.0 }), 5.0);
        assert_eq!(distance_to(line(1.0, 1.0, 1.0, 1.0), coord! { x: 4.0, y: 5.0 }), 5.0);
    }

    #[test]
    fn interior_crossing_is_detected() {
        assert!(crosses(line(0.0, 0.0, 2.0, 2.0), line(0.0, 2.0, 2.0, 0.0)));
    }

    #[test]
    fn shared_endpoint_is_not_a_crossing() {
        assert!(!crosses(line(0.0, 0.0, 1.0, 1.0), line(1.0, 1.0, 2.0, 0.0)));
        assert!(!crosses(line(0.0, 0.0, 1.0, 0.0), line(0.0, 1.0, 1.0, 1.0)));
        // Collinear neighbours meeting end to end.
        assert!(!crosses(line(0.0, 0.0, 1.0, 0.0), line(1.0, 0.0, 2.0, 0.0)));
    }

    #[test]
    fn endpoint_on_interior_is_a_crossing() {
        assert!(crosses(line(0.0, 0.0, 2.0, 0.0), line(1.0, 0.0, 1.0, 1.0)));
        assert!(crosses(line(1.0, 1.0, 1.0, 0.0), line(0.0, 0.0, 2.0, 0.0)));
    }

    #[test]
    fn collinear_overlap_is_a_crossing() {
        assert!(crosses(line(0.0, 0.0, 2.0, 0.0), line(1.0, 0.0, 3.0, 0.0)));
    }
}
