use nalgebra::Rotation2;

use super::types::Point;

/// 2D cross product of `a − o` and `b − o` (z-component of the 3D cross product).
///
/// Positive if `o → a → b` turns counter-clockwise, negative for a clockwise
/// turn, zero if the three points are collinear.
#[inline]
pub fn cross(o: Point, a: Point, b: Point) -> f64 {
    (a - o).perp(&(b - o))
}

/// Linear interpolation `p1 + (p2 − p1)·t`. `t` is not clamped.
///
/// The endpoints are returned as-is for `t == 0` and `t == 1` so that callers
/// can rely on exact equality there.
#[inline]
pub fn interpolate(p1: Point, p2: Point, t: f64) -> Point {
    if t == 0.0 {
        p1
    } else if t == 1.0 {
        p2
    } else {
        p1 + (p2 - p1) * t
    }
}

/// Euclidean distance. Planar inputs only.
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    (a - b).norm()
}

/// Rotate `points` counter-clockwise by `angle` radians around `pivot`.
pub fn rotate(points: &[Point], angle: f64, pivot: Point) -> Vec<Point> {
    let rot = Rotation2::new(angle);
    points.iter().map(|p| rot * (p - pivot) + pivot).collect()
}

/// Floor both coordinates (pixel snapping).
#[inline]
pub fn round_coords(p: Point) -> Point {
    p.map(f64::floor)
}
