//! Planar geometry and map unit conversion for an editing front end.
//!
//! Layout
//! - `geom2`: vector primitives, segment/path queries, ring containment,
//!   bearings, plus the `Projection` and `Locatable` capabilities.
//! - `units`: degree ↔ meter ↔ tile-offset conversions (WGS84 constants).
//! - `projection`: ready-made `Projection` implementations.
//! - `sample`: seeded random rings and paths for tests and benchmarks.
//!
//! Every function is pure. Inputs are plain coordinates; "no result" is
//! reported with `Option`, never with a panic.

pub mod geom2;
pub mod projection;
pub mod sample;
pub mod units;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{EdgeChoice, Locatable, Point, Projection, Segment};
pub use nalgebra::Vector2 as Vec2;

/// Common geometry exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::{
        angle, choose_edge, cross, distance, edge_equal, interpolate, line_intersection,
        path_intersections, path_length, point_in_polygon, polygon_contains_polygon,
        polygon_intersects_polygon, rotate, round_coords, EdgeChoice, Locatable, Point,
        Projection, Segment,
    };
    pub use crate::projection::{Identity, LocalMeters, Mercator};
    pub use crate::units::{
        lat_to_meters, lon_to_meters, meters_to_lat, meters_to_lon, meters_to_offset,
        offset_to_meters, spherical_distance,
    };
    pub use nalgebra::Vector2 as Vec2;
}
