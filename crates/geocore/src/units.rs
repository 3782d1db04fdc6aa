//! Degree ↔ meter ↔ tile-offset conversions.
//!
//! Model
//! - The WGS84 ellipsoid is treated locally as two spheres: latitude degrees
//!   scale with the polar radius, longitude degrees with the equatorial radius
//!   times `|cos(lat)|`.
//! - Longitude conversions return exactly `0.0` at and beyond the poles
//!   (`|lat| >= 90`) instead of dividing by a vanishing cosine.
//! - Tile offsets are fractions of a 256 px slippy-map tile at zoom 0; their y
//!   axis points down while meters point up.
//!
//! All functions are pure and total. NaN inputs propagate.

use std::f64::consts::TAU;

use crate::geom2::Point;

/// WGS84 polar radius in meters.
pub const POLAR_RADIUS: f64 = 6_356_752.314_245_179;
/// WGS84 equatorial radius in meters.
pub const EQUATORIAL_RADIUS: f64 = 6_378_137.0;
/// Meters per degree of latitude: `2π · POLAR_RADIUS / 360`.
pub const METERS_PER_DEG_LAT: f64 = 110_946.257_617;
/// Meters per degree of longitude at the equator: `2π · EQUATORIAL_RADIUS / 360`.
pub const METERS_PER_DEG_LON: f64 = 111_319.490_793;
/// Slippy-map tile edge in pixels.
pub const TILE_SIZE: f64 = 256.0;

#[inline]
fn at_pole(at_lat: f64) -> bool {
    at_lat.abs() >= 90.0
}

/// Latitude delta (degrees) → meters.
#[inline]
pub fn lat_to_meters(dlat: f64) -> f64 {
    dlat * METERS_PER_DEG_LAT
}

/// Longitude delta (degrees) at latitude `at_lat` → meters.
#[inline]
pub fn lon_to_meters(dlon: f64, at_lat: f64) -> f64 {
    if at_pole(at_lat) {
        0.0
    } else {
        dlon * METERS_PER_DEG_LON * at_lat.to_radians().cos().abs()
    }
}

/// Meters → latitude delta (degrees).
#[inline]
pub fn meters_to_lat(m: f64) -> f64 {
    m / METERS_PER_DEG_LAT
}

/// Meters → longitude delta (degrees) at latitude `at_lat`.
#[inline]
pub fn meters_to_lon(m: f64, at_lat: f64) -> f64 {
    if at_pole(at_lat) {
        0.0
    } else {
        m / METERS_PER_DEG_LON / at_lat.to_radians().cos().abs()
    }
}

// Note the pairing: x scales by the polar radius, y by the equatorial one.
const OFFSET_SCALE_X: f64 = TAU * POLAR_RADIUS / TILE_SIZE;
const OFFSET_SCALE_Y: f64 = TAU * EQUATORIAL_RADIUS / TILE_SIZE;

/// Tile-pixel offset → meters (y flipped: down becomes up).
#[inline]
pub fn offset_to_meters(offset: Point) -> Point {
    Point::new(offset.x * OFFSET_SCALE_X, -offset.y * OFFSET_SCALE_Y)
}

/// Meters → tile-pixel offset (y flipped: up becomes down).
#[inline]
pub fn meters_to_offset(meters: Point) -> Point {
    Point::new(meters.x / OFFSET_SCALE_X, -meters.y / OFFSET_SCALE_Y)
}

/// Equirectangular distance in meters between two (lon, lat) points.
///
/// The longitude delta is scaled at the mean latitude. Good at local scales;
/// no antimeridian handling.
pub fn spherical_distance(a: Point, b: Point) -> f64 {
    let x = lon_to_meters(a.x - b.x, (a.y + b.y) / 2.0);
    let y = lat_to_meters(a.y - b.y);
    x.hypot(y)
}
