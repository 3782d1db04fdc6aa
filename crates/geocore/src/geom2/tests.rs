use super::*;
use crate::projection::{Identity, Mercator};
use nalgebra::vector;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::f64::consts::{FRAC_PI_2, PI};

fn square(side: f64) -> Vec<Point> {
    vec![
        vector![0.0, 0.0],
        vector![0.0, side],
        vector![side, side],
        vector![side, 0.0],
        vector![0.0, 0.0],
    ]
}

fn offset(ring: &[Point], d: Point) -> Vec<Point> {
    ring.iter().map(|p| p + d).collect()
}

#[test]
fn cross_orientation_signs() {
    let o = vector![0.0, 0.0];
    let a = vector![1.0, 0.0];
    let b = vector![0.0, 1.0];
    assert_eq!(cross(o, a, b), 1.0);
    assert_eq!(cross(o, b, a), -1.0);
    // collinear
    assert_eq!(cross(o, vector![1.0, 1.0], vector![3.0, 3.0]), 0.0);
    assert_eq!(cross(vector![1.0, 2.0], vector![2.0, 4.0], vector![-1.0, -2.0]), 0.0);
}

#[test]
fn interpolate_hits_endpoints_exactly() {
    let p1 = vector![0.1, 0.7];
    let p2 = vector![-3.3, 1e-3];
    assert_eq!(interpolate(p1, p2, 0.0), p1);
    assert_eq!(interpolate(p1, p2, 1.0), p2);
    assert_eq!(interpolate(vector![0.0, 0.0], vector![2.0, 4.0], 0.5), vector![1.0, 2.0]);
    // no clamping
    assert_eq!(interpolate(vector![0.0, 0.0], vector![1.0, 1.0], 2.0), vector![2.0, 2.0]);
    assert_eq!(interpolate(vector![0.0, 0.0], vector![1.0, 1.0], -1.0), vector![-1.0, -1.0]);
}

#[test]
fn distance_is_symmetric_seeded() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..32 {
        let a: Point = vector![rng.gen_range(-1e3..1e3), rng.gen_range(-1e3..1e3)];
        let b: Point = vector![rng.gen_range(-1e3..1e3), rng.gen_range(-1e3..1e3)];
        assert_eq!(distance(a, b), distance(b, a));
        assert!(distance(a, b) >= 0.0);
    }
    assert_eq!(distance(vector![0.0, 0.0], vector![3.0, 4.0]), 5.0);
}

#[test]
fn rotate_quarter_turn_about_pivot() {
    let pivot = vector![1.0, 1.0];
    let pts = vec![vector![2.0, 1.0], pivot, vector![1.0, 3.0]];
    let out = rotate(&pts, FRAC_PI_2, pivot);
    assert_eq!(out.len(), 3);
    assert!((out[0] - vector![1.0, 2.0]).norm() < 1e-12);
    assert_eq!(out[1], pivot);
    assert!((out[2] - vector![-1.0, 1.0]).norm() < 1e-12);
    assert!(rotate(&[], 1.0, pivot).is_empty());
}

#[test]
fn rotate_preserves_radius_seeded() {
    let mut rng = StdRng::seed_from_u64(43);
    let pivot: Point = vector![rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0)];
    let pts: Vec<Point> = (0..20)
        .map(|_| vector![rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0)])
        .collect();
    let th = rng.gen_range(-PI..PI);
    let out = rotate(&pts, th, pivot);
    for (p, q) in pts.iter().zip(&out) {
        assert!((distance(*p, pivot) - distance(*q, pivot)).abs() < 1e-9);
    }
    // rotating back restores the input
    let back = rotate(&out, -th, pivot);
    for (p, q) in pts.iter().zip(&back) {
        assert!((p - q).norm() < 1e-9);
    }
}

#[test]
fn round_coords_floors() {
    assert_eq!(round_coords(vector![1.7, -0.2]), vector![1.0, -1.0]);
    assert_eq!(round_coords(vector![3.0, 4.0]), vector![3.0, 4.0]);
}

#[test]
fn point_in_square() {
    let sq = square(2.0);
    assert!(point_in_polygon(vector![1.0, 1.0], &sq));
    assert!(!point_in_polygon(vector![3.0, 3.0], &sq));
    assert!(!point_in_polygon(vector![-1.0, 1.0], &sq));
    assert!(!point_in_polygon(vector![1.0, 1.0], &[]));
}

#[test]
fn point_in_square_boundary_rule() {
    // left and bottom edges count as inside, right and top as outside
    let sq = square(2.0);
    assert!(point_in_polygon(vector![0.0, 1.0], &sq));
    assert!(point_in_polygon(vector![1.0, 0.0], &sq));
    assert!(!point_in_polygon(vector![2.0, 1.0], &sq));
    assert!(!point_in_polygon(vector![1.0, 2.0], &sq));
    // deterministic
    for _ in 0..3 {
        assert!(point_in_polygon(vector![0.0, 1.0], &sq));
    }
}

#[test]
fn point_in_open_ring_wraps() {
    let open = &square(2.0)[..4];
    assert!(point_in_polygon(vector![1.0, 1.0], open));
    assert!(!point_in_polygon(vector![3.0, 1.0], open));
}

#[test]
fn point_in_concave_ring() {
    // U shape opening upwards
    let u = vec![
        vector![0.0, 0.0],
        vector![3.0, 0.0],
        vector![3.0, 3.0],
        vector![2.0, 3.0],
        vector![2.0, 1.0],
        vector![1.0, 1.0],
        vector![1.0, 3.0],
        vector![0.0, 3.0],
        vector![0.0, 0.0],
    ];
    assert!(point_in_polygon(vector![0.5, 2.0], &u));
    assert!(point_in_polygon(vector![2.5, 2.0], &u));
    assert!(!point_in_polygon(vector![1.5, 2.0], &u));
    assert!(point_in_polygon(vector![1.5, 0.5], &u));
}

#[test]
fn contains_polygon_by_vertices() {
    let outer = square(4.0);
    let inner = offset(&square(2.0), vector![1.0, 1.0]);
    assert!(polygon_contains_polygon(&outer, &inner));
    let mut poked = inner.clone();
    poked[2] = vector![5.0, 3.0];
    assert!(!polygon_contains_polygon(&outer, &poked));
    assert!(polygon_contains_polygon(&outer, &[]));
}

#[test]
fn intersects_by_vertex_or_segments() {
    let outer = square(4.0);
    let overlapping = offset(&square(2.0), vector![3.0, 3.0]);
    assert!(polygon_intersects_polygon(&outer, &overlapping, false));
    let far = offset(&square(2.0), vector![10.0, 10.0]);
    assert!(!polygon_intersects_polygon(&outer, &far, false));
    assert!(!polygon_intersects_polygon(&outer, &far, true));
}

#[test]
fn plus_shaped_overlap_needs_segment_check() {
    // two bars crossing like a plus sign: no vertex of `v` lies inside `h`
    let h = vec![
        vector![0.0, 2.0],
        vector![0.0, 3.0],
        vector![5.0, 3.0],
        vector![5.0, 2.0],
        vector![0.0, 2.0],
    ];
    let v = vec![
        vector![2.0, 0.0],
        vector![2.0, 5.0],
        vector![3.0, 5.0],
        vector![3.0, 0.0],
        vector![2.0, 0.0],
    ];
    assert!(!polygon_intersects_polygon(&h, &v, false));
    assert!(polygon_intersects_polygon(&h, &v, true));
}

#[test]
fn angle_of_projected_nodes() {
    let a = Point::new(0.0, 0.0);
    assert!((angle(&a, &Point::new(1.0, 0.0), &Identity)).abs() < 1e-15);
    assert!((angle(&a, &Point::new(0.0, 1.0), &Identity) - FRAC_PI_2).abs() < 1e-15);
    assert!((angle(&a, &Point::new(-1.0, 0.0), &Identity) - PI).abs() < 1e-15);
    assert!((angle(&a, &Point::new(-1.0, -1.0), &Identity) + 3.0 * PI / 4.0).abs() < 1e-15);
    // screen space flips y: north becomes −π/2
    let north = angle(&a, &Point::new(0.0, 1.0), &Mercator::default());
    assert!((north + FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn nodes_are_any_locatable() {
    struct Node {
        id: u32,
        loc: Point,
    }
    impl Locatable for Node {
        fn location(&self) -> Point {
            self.loc
        }
    }
    let way = [
        Node { id: 1, loc: vector![0.0, 0.0] },
        Node { id: 2, loc: vector![0.0, 4.0] },
    ];
    let choice = choose_edge(&way, vector![1.0, 1.0], &Identity).unwrap();
    assert_eq!(way[choice.index].id, 2);
    assert!((choice.loc - vector![0.0, 1.0]).norm() < 1e-12);
    assert_eq!(angle(&way[0], &way[1], &Identity), FRAC_PI_2);
}

#[test]
fn choose_edge_through_mercator_returns_geographic_loc() {
    let proj = Mercator::at_zoom(16.0);
    let nodes: [Point; 2] = [vector![8.0, 47.0], vector![8.001, 47.0]];
    let on_way = proj.forward(vector![8.0005, 47.0]);
    let choice = choose_edge(&nodes, on_way + vector![0.0, 5.0], &proj).unwrap();
    assert_eq!(choice.index, 1);
    assert!((choice.distance - 5.0).abs() < 1e-6);
    assert!((choice.loc - vector![8.0005, 47.0]).norm() < 1e-9);
}
