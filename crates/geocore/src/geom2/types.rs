//! Basic 2D types and the two caller-supplied capabilities.
//!
//! - `Point`: a plain `Vector2<f64>`; (x, y) or (lon, lat) by context.
//! - `Segment`: two endpoints, directed from `[0]` to `[1]`.
//! - `Projection`: geographic ↔ planar transform owned by the caller.
//! - `Locatable`: anything that can report a geographic location.
//! - `EdgeChoice`: result of `choose_edge`.

use nalgebra::Vector2;

/// A 2D point or vector.
pub type Point = Vector2<f64>;

/// Finite segment `[start, end]`.
pub type Segment = [Point; 2];

/// Bidirectional geographic ↔ planar transform.
///
/// `forward` and `invert` should be approximate inverses over the valid
/// domain of the implementation; exact round-trip equality is not expected.
/// Implementations may carry state (zoom, origin) and are only borrowed for
/// the duration of a call.
pub trait Projection {
    /// Geographic (lon, lat) → planar.
    fn forward(&self, loc: Point) -> Point;
    /// Planar → geographic (lon, lat).
    fn invert(&self, p: Point) -> Point;
}

impl<P: Projection + ?Sized> Projection for &P {
    #[inline]
    fn forward(&self, loc: Point) -> Point {
        (**self).forward(loc)
    }
    #[inline]
    fn invert(&self, p: Point) -> Point {
        (**self).invert(p)
    }
}

/// Something with a geographic location, typically an editor node.
pub trait Locatable {
    fn location(&self) -> Point;
}

impl Locatable for Point {
    #[inline]
    fn location(&self) -> Point {
        *self
    }
}

impl<T: Locatable + ?Sized> Locatable for &T {
    #[inline]
    fn location(&self) -> Point {
        (**self).location()
    }
}

/// Nearest edge found by `choose_edge`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeChoice {
    /// Index of the edge's second endpoint: the edge runs `nodes[index - 1] → nodes[index]`.
    pub index: usize,
    /// Closest location on that edge, mapped back to geographic space.
    pub loc: Point,
    /// Planar distance from the query point to the projected closest location.
    pub distance: f64,
}
