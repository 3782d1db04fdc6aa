//! Ring containment and overlap tests (crossing-number based).

use super::segment::line_intersection;
use super::types::Point;

/// Whether `point` lies inside the ring `polygon` (ray casting).
///
/// Casts a ray towards +x and toggles on every edge `(polygon[j], polygon[i])`
/// it crosses, where `j` is the previous index and wraps from `0` to
/// `len − 1`. The half-open test `(yi > y) != (yj > y)` keeps a ray through a
/// vertex from being counted twice.
///
/// Boundary points follow the formula: for an axis-aligned square, points on
/// the left and bottom edges are inside, points on the right and top edges
/// are outside. An open ring is treated as if closed by the wrap-around edge.
/// An empty ring contains nothing.
pub fn point_in_polygon(point: Point, polygon: &[Point]) -> bool {
    let (x, y) = (point.x, point.y);
    let mut inside = false;
    let Some(&last) = polygon.last() else {
        return false;
    };
    let mut prev = last;
    for &cur in polygon {
        let (xi, yi) = (cur.x, cur.y);
        let (xj, yj) = (prev.x, prev.y);
        let crosses = ((yi > y) != (yj > y)) && (x < (xj - xi) * (y - yi) / (yj - yi) + xi);
        if crosses {
            inside = !inside;
        }
        prev = cur;
    }
    inside
}

/// Whether every vertex of `inner` lies inside `outer`.
///
/// Vertex containment only: edges of `inner` may still leave `outer` between
/// two contained vertices.
pub fn polygon_contains_polygon(outer: &[Point], inner: &[Point]) -> bool {
    inner.iter().all(|&p| point_in_polygon(p, outer))
}

/// Whether `inner` overlaps `outer`.
///
/// True as soon as one vertex of `inner` lies inside `outer`. Otherwise, and
/// only if `check_segments` is set, every segment of `outer` is tested against
/// every segment of `inner`. Without `check_segments`, rings that overlap only
/// along their edges (no vertex inside, e.g. two crossing bars) are reported
/// as disjoint.
///
/// The segment test walks each ring as a path; closing segments are only
/// tested if the rings repeat their first vertex.
pub fn polygon_intersects_polygon(outer: &[Point], inner: &[Point], check_segments: bool) -> bool {
    inner.iter().any(|&p| point_in_polygon(p, outer))
        || (check_segments && segments_intersect(outer, inner))
}

fn segments_intersect(outer: &[Point], inner: &[Point]) -> bool {
    outer.windows(2).any(|a| {
        inner
            .windows(2)
            .any(|b| line_intersection(&[a[0], a[1]], &[b[0], b[1]]).is_some())
    })
}
