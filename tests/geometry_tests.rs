//! Test cases for the geometry validator
//!
//! Tests cover:
//! - Overlap predicate semantics (shared interior area, half-open edges)
//! - Pairwise scan ordering and deduplication
//! - Bounds check (upper-right corner only)
//! - Validation summary bundling

use floorplan_viewer::report::{FloorplanReport, Macro};
use floorplan_viewer::validate::{find_out_of_bounds, find_overlaps, rects_overlap, validate};

fn make_macro(name: &str, x1: i64, y1: i64, x2: i64, y2: i64) -> Macro {
    Macro {
        name: name.to_string(),
        x1,
        y1,
        x2,
        y2,
    }
}

#[test]
fn test_strict_interior_overlap() {
    let a = make_macro("A", 0, 0, 10, 10);
    let b = make_macro("B", 5, 5, 15, 15);
    assert!(rects_overlap(&a, &b));

    let overlaps = find_overlaps(&[a, b]);
    assert_eq!(overlaps, vec![("A".to_string(), "B".to_string())]);
}

#[test]
fn test_touching_edge_is_not_overlap() {
    // Shared vertical edge
    let a = make_macro("A", 0, 0, 10, 10);
    let b = make_macro("B", 10, 0, 20, 10);
    assert!(!rects_overlap(&a, &b));

    // Shared horizontal edge
    let c = make_macro("C", 0, 10, 10, 20);
    assert!(!rects_overlap(&a, &c));

    // Shared corner only
    let d = make_macro("D", 10, 10, 20, 20);
    assert!(!rects_overlap(&a, &d));

    assert!(find_overlaps(&[a, b, c, d]).is_empty());
}

#[test]
fn test_overlap_symmetry() {
    let cases = [
        (make_macro("A", 0, 0, 10, 10), make_macro("B", 5, 5, 15, 15)),
        (make_macro("A", 0, 0, 10, 10), make_macro("B", 10, 0, 20, 10)),
        (make_macro("A", 0, 0, 10, 10), make_macro("B", 2, 2, 8, 8)),
        (make_macro("A", 0, 0, 10, 10), make_macro("B", 30, 30, 40, 40)),
        (make_macro("A", 0, 0, 10, 10), make_macro("B", -5, -5, 1, 1)),
    ];

    for (a, b) in &cases {
        assert_eq!(
            rects_overlap(a, b),
            rects_overlap(b, a),
            "predicate must be symmetric for {:?} / {:?}",
            a,
            b
        );
    }
}

#[test]
fn test_overlap_pairs_reported_once_in_input_order() {
    // A overlaps B and C; B overlaps C as well
    let macros = vec![
        make_macro("A", 0, 0, 10, 10),
        make_macro("B", 5, 5, 15, 15),
        make_macro("C", 8, 8, 12, 12),
        make_macro("D", 100, 100, 110, 110),
    ];

    let overlaps = find_overlaps(&macros);
    assert_eq!(
        overlaps,
        vec![
            ("A".to_string(), "B".to_string()),
            ("A".to_string(), "C".to_string()),
            ("B".to_string(), "C".to_string()),
        ]
    );

    // No pair reported twice or in reversed order
    for (a, b) in &overlaps {
        assert!(!overlaps.contains(&(b.clone(), a.clone())));
        assert_eq!(overlaps.iter().filter(|p| *p == &(a.clone(), b.clone())).count(), 1);
    }
}

#[test]
fn test_containment_is_overlap() {
    let outer = make_macro("OUTER", 0, 0, 100, 100);
    let inner = make_macro("INNER", 20, 20, 40, 40);
    assert!(rects_overlap(&outer, &inner));
}

#[test]
fn test_degenerate_macro_on_edge() {
    // Zero-width macro sitting on another's edge: separated by the
    // half-open test, never flagged.
    let a = make_macro("A", 0, 0, 10, 10);
    let line = make_macro("LINE", 10, 2, 10, 8);
    assert!(!rects_overlap(&a, &line));

    // Two coincident zero-area macros are also separated
    let p1 = make_macro("P1", 5, 5, 5, 5);
    let p2 = make_macro("P2", 5, 5, 5, 5);
    assert!(!rects_overlap(&p1, &p2));
}

#[test]
fn test_out_of_bounds_upper_corner() {
    let macros = vec![
        make_macro("FITS", 0, 0, 100, 100),
        make_macro("WIDE", 90, 90, 110, 105),
        make_macro("TALL", 0, 50, 50, 101),
    ];

    let names = find_out_of_bounds(&macros, 100, 100);
    assert_eq!(names, vec!["WIDE".to_string(), "TALL".to_string()]);
}

#[test]
fn test_out_of_bounds_ignores_origin_side() {
    // Extends past the origin but not past the chip extent: the check
    // only tests the upper-right corner.
    let macros = vec![make_macro("BELOW", -10, -10, 5, 5)];
    assert!(find_out_of_bounds(&macros, 100, 100).is_empty());
}

#[test]
fn test_macro_on_boundary_is_in_bounds() {
    let macros = vec![make_macro("EDGE", 0, 0, 100, 100)];
    assert!(find_out_of_bounds(&macros, 100, 100).is_empty());
}

#[test]
fn test_empty_macro_list() {
    assert!(find_overlaps(&[]).is_empty());
    assert!(find_out_of_bounds(&[], 100, 100).is_empty());
}

#[test]
fn test_validation_summary() {
    let report = FloorplanReport {
        final_cost: 1.0,
        total_wirelength: 0,
        chip_area: 10000,
        chip_width: 100,
        chip_height: 100,
        runtime_seconds: 0.1,
        macros: vec![
            make_macro("A", 0, 0, 10, 10),
            make_macro("B", 5, 5, 15, 15),
            make_macro("HUGE", 50, 50, 150, 150),
            make_macro("OK", 20, 20, 30, 30),
        ],
    };

    let validation = validate(&report);
    assert!(!validation.is_clean());
    assert_eq!(
        validation.overlaps,
        vec![("A".to_string(), "B".to_string())]
    );
    assert_eq!(validation.out_of_bounds, vec!["HUGE".to_string()]);

    assert!(validation.is_violating("A"));
    assert!(validation.is_violating("B"));
    assert!(validation.is_violating("HUGE"));
    assert!(!validation.is_violating("OK"));
}

#[test]
fn test_clean_validation() {
    let report = FloorplanReport {
        final_cost: 1.0,
        total_wirelength: 0,
        chip_area: 10000,
        chip_width: 100,
        chip_height: 100,
        runtime_seconds: 0.1,
        macros: vec![
            make_macro("A", 0, 0, 50, 50),
            make_macro("B", 50, 0, 100, 50),
            make_macro("C", 0, 50, 100, 100),
        ],
    };

    let validation = validate(&report);
    assert!(validation.is_clean());
    assert!(validation.overlaps.is_empty());
    assert!(validation.out_of_bounds.is_empty());
}
