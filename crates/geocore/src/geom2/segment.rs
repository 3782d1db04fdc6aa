//! Segment and path queries.
//!
//! - `line_intersection`: parametric cross-product test for two finite segments.
//! - `path_intersections`: all pairwise segment hits between two paths.
//! - `choose_edge`: nearest edge of a projected node chain to a planar point.
//! - `path_length`, `edge_equal`: small helpers.

use tracing::trace;

use super::types::{EdgeChoice, Locatable, Point, Projection, Segment};
use super::vector::{distance, interpolate};

/// Two edges are equal if they join the same endpoints, in either order.
#[inline]
pub fn edge_equal<T: PartialEq>(a: &[T; 2], b: &[T; 2]) -> bool {
    (a[0] == b[0] && a[1] == b[1]) || (a[0] == b[1] && a[1] == b[0])
}

/// Intersection point of two finite segments, if they cross or touch.
///
/// With `r = a₁ − a₀`, `s = b₁ − b₀` the crossing parameters are
/// `t = (b₀ − a₀)×s / (r×s)` along `a` and `u = (b₀ − a₀)×r / (r×s)` along `b`;
/// a hit requires both in `[0, 1]`.
///
/// Returns `None` when `r×s == 0` (parallel or collinear, overlapping or not)
/// and when `(b₀ − a₀)×r == 0` (`b₀` on the line through `a`). Collinear
/// overlap is never resolved to a point.
pub fn line_intersection(a: &Segment, b: &Segment) -> Option<Point> {
    let [p, p2] = *a;
    let [q, q2] = *b;
    let r = p2 - p;
    let s = q2 - q;
    let qp = q - p;
    let u_numerator = qp.perp(&r);
    let denominator = r.perp(&s);

    if u_numerator == 0.0 || denominator == 0.0 {
        return None;
    }
    let u = u_numerator / denominator;
    let t = qp.perp(&s) / denominator;
    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(interpolate(p, p2, t))
    } else {
        None
    }
}

/// All intersections between segments of `path1` and segments of `path2`.
///
/// Ordered by segment of `path1`, then segment of `path2`. Hits at shared
/// vertices may be reported more than once.
pub fn path_intersections(path1: &[Point], path2: &[Point]) -> Vec<Point> {
    let mut hits = Vec::new();
    for a in path1.windows(2) {
        for b in path2.windows(2) {
            if let Some(hit) = line_intersection(&[a[0], a[1]], &[b[0], b[1]]) {
                hits.push(hit);
            }
        }
    }
    hits
}

/// Choose the edge of `nodes` closest to the planar `point`.
///
/// Node locations are projected with `projection.forward`. For each segment
/// the distance is taken to the orthogonal foot of `point` when it falls
/// within the segment, otherwise to the nearer endpoint. The first segment
/// with the strictly smallest distance wins.
///
/// Segments whose distance is not a finite number are never chosen.
///
/// Returns `None` for fewer than two nodes, or when every segment has zero
/// length (such segments are skipped) or a non-finite distance.
pub fn choose_edge<N, P>(nodes: &[N], point: Point, projection: &P) -> Option<EdgeChoice>
where
    N: Locatable,
    P: Projection + ?Sized,
{
    let points: Vec<Point> = nodes
        .iter()
        .map(|n| projection.forward(n.location()))
        .collect();

    let mut min = f64::INFINITY;
    let mut best: Option<(usize, Point)> = None;
    for (i, w) in points.windows(2).enumerate() {
        let (o, end) = (w[0], w[1]);
        let s = end - o;
        let ss = s.dot(&s);
        if ss == 0.0 {
            trace!(segment = i, "skipping zero-length segment");
            continue;
        }
        let proj = (point - o).dot(&s) / ss;
        let foot = if proj < 0.0 {
            o
        } else if proj > 1.0 {
            end
        } else {
            o + s * proj
        };
        let d = distance(foot, point);
        // NaN distances (non-finite input) never compare below `min`
        if d < min {
            min = d;
            best = Some((i + 1, foot));
        }
    }

    best.map(|(index, foot)| EdgeChoice {
        index,
        loc: projection.invert(foot),
        distance: min,
    })
}

/// Sum of segment lengths; zero for empty and single-point paths.
pub fn path_length(path: &[Point]) -> f64 {
    path.windows(2).map(|w| distance(w[0], w[1])).sum()
}
