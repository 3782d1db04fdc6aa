//! 2D geometry over plain point sequences.
//!
//! Purpose
//! - Orientation, intersection, containment and nearest-edge queries over
//!   paths and rings given as `&[Point]`.
//! - Brute force throughout: O(n) or O(n·m), no spatial index.
//!
//! Conventions
//! - A path is an ordered point sequence; consecutive points form segments.
//! - A ring is a path whose first and last points coincide. Rings are not
//!   validated or auto-closed (see `point_in_polygon` for what an open ring
//!   means).
//! - Distances are Euclidean in whatever plane the inputs live in. Do not
//!   feed raw (lon, lat) degrees to them; project first or use
//!   `units::spherical_distance`.

mod angle;
mod polygon;
mod segment;
mod types;
mod vector;

pub use angle::angle;
pub use polygon::{point_in_polygon, polygon_contains_polygon, polygon_intersects_polygon};
pub use segment::{choose_edge, edge_equal, line_intersection, path_intersections, path_length};
pub use types::{EdgeChoice, Locatable, Point, Projection, Segment};
pub use vector::{cross, distance, interpolate, rotate, round_coords};

#[cfg(test)]
mod tests;
