// Property tests for the geometry and analytics invariants.

use chrono::{NaiveDate, TimeZone, Utc};
use geo::{coord, Centroid};
use proptest::prelude::*;

use zonetrack::{
    validate_polygon, AnimalId, AnimalKind, AnimalTrack, AreaAnalyzer, DateWindow, KindId, Point,
    Polygon, ValidationOutcome, Visit,
};

/// A convex polygon: `n` points on a circle at strictly increasing angles.
fn convex_polygon() -> impl Strategy<Value = Vec<Point>> {
    (3usize..12, -50.0f64..50.0, -50.0f64..50.0, 1.0f64..20.0).prop_map(|(n, cx, cy, r)| {
        (0..n)
            .map(|i| {
                let angle = std::f64::consts::TAU * i as f64 / n as f64;
                coord! { x: cx + r * angle.cos(), y: cy + r * angle.sin() }
            })
            .collect()
    })
}

fn track(id: i64, kind: i64, chip: (f64, f64), visits: Vec<(u32, f64, f64)>) -> AnimalTrack {
    AnimalTrack {
        id: AnimalId(id),
        kinds: vec![AnimalKind { id: KindId(kind), name: format!("kind-{kind}") }],
        chipped_at: Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
        chipping_point: coord! { x: chip.0, y: chip.1 },
        visits: visits.into_iter()
            .map(|(day, x, y)| Visit {
                timestamp: Utc.with_ymd_and_hms(2024, 6, day, 6, 0, 0).unwrap(),
                point: coord! { x: x, y: y },
            })
            .collect(),
    }
}

fn animals() -> impl Strategy<Value = Vec<AnimalTrack>> {
    let visit = (1u32..28, -20.0f64..20.0, -20.0f64..20.0);
    let animal = (1i64..4, (-20.0f64..20.0, -20.0f64..20.0), prop::collection::vec(visit, 0..5));
    prop::collection::vec(animal, 0..20).prop_map(|specs| {
        specs.into_iter().enumerate()
            .map(|(i, (kind, chip, visits))| track(i as i64 + 1, kind, chip, visits))
            .collect()
    })
}

proptest! {
    #[test]
    fn convex_polygons_validate_against_nothing(vertices in convex_polygon()) {
        prop_assert_eq!(validate_polygon(&Polygon::new(vertices), &[], None), ValidationOutcome::Ok);
    }

    #[test]
    fn rotation_and_reversal_preserve_equality(vertices in convex_polygon(), shift in 0usize..12) {
        let original = Polygon::new(vertices.clone());

        let mut rotated = vertices.clone();
        rotated.rotate_left(shift % vertices.len());
        prop_assert!(original.same_ring(&Polygon::new(rotated.clone())));

        rotated.reverse();
        prop_assert!(original.same_ring(&Polygon::new(rotated)));
    }

    #[test]
    fn centroid_inside_far_point_outside(vertices in convex_polygon()) {
        let polygon = Polygon::new(vertices);
        let centroid = polygon.as_geo().centroid().unwrap();
        prop_assert!(polygon.contains_point(centroid.0, 1e-6));

        let rect = polygon.bounding_rect().unwrap();
        let far = coord! { x: rect.max().x + 1000.0, y: rect.max().y + 1000.0 };
        prop_assert!(!polygon.contains_point(far, 1e-6));
    }

    #[test]
    fn analytics_totals_ignore_animal_order(animals in animals()) {
        let polygon = Polygon::new(vec![
            coord! { x: -5.0, y: -5.0 },
            coord! { x: -5.0, y: 5.0 },
            coord! { x: 5.0, y: 5.0 },
            coord! { x: 5.0, y: -5.0 },
        ]);
        let window = DateWindow::from_dates(
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
        ).unwrap();
        let analyzer = AreaAnalyzer::new(&polygon, window);

        let forward = analyzer.analyze(&animals);
        let again = analyzer.analyze(&animals);
        prop_assert_eq!(&forward, &again);

        let mut reversed = animals.clone();
        reversed.reverse();
        let backward = analyzer.analyze(&reversed);
        prop_assert_eq!(forward.total_quantity, backward.total_quantity);
        prop_assert_eq!(forward.total_arrived, backward.total_arrived);
        prop_assert_eq!(forward.total_gone, backward.total_gone);
        prop_assert!(forward.total_quantity >= forward.total_arrived);

        let mut kinds_forward: Vec<_> = forward.kinds.iter().map(|k| (k.kind_id, k.quantity, k.arrived, k.gone)).collect();
        let mut kinds_backward: Vec<_> = backward.kinds.iter().map(|k| (k.kind_id, k.quantity, k.arrived, k.gone)).collect();
        kinds_forward.sort();
        kinds_backward.sort();
        prop_assert_eq!(kinds_forward, kinds_backward);
    }
}
