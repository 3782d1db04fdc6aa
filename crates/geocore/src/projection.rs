//! Ready-made `Projection` implementations.
//!
//! - `Identity`: no-op, for callers whose coordinates are already planar.
//! - `Mercator`: spherical web-mercator in screen pixels (y down), scaled by
//!   zoom and shifted by a pixel translation.
//! - `LocalMeters`: equirectangular plane in meters around an origin, built
//!   on the `units` conversions.
//!
//! Geographic points are (lon, lat) in degrees throughout.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, TAU};

use crate::geom2::{Point, Projection};
use crate::units::{lat_to_meters, lon_to_meters, meters_to_lat, meters_to_lon, TILE_SIZE};

/// Passes points through unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Identity;

impl Projection for Identity {
    #[inline]
    fn forward(&self, loc: Point) -> Point {
        loc
    }
    #[inline]
    fn invert(&self, p: Point) -> Point {
        p
    }
}

/// Spherical web-mercator: `x = λ·k + tx`, `y = ty − ln(tan(π/4 + φ/2))·k`.
///
/// `k` is pixels per radian; at zoom `z` with 256 px tiles, `k = 256·2^z / 2π`.
/// Valid for latitudes strictly inside (−90, 90).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mercator {
    pub k: f64,
    pub translate: Point,
}

impl Default for Mercator {
    fn default() -> Self {
        Self::at_zoom(0.0)
    }
}

impl Mercator {
    #[inline]
    pub fn new(k: f64, translate: Point) -> Self {
        Self { k, translate }
    }

    /// Zoom level `z` (fractional allowed), no translation.
    pub fn at_zoom(z: f64) -> Self {
        Self::new(TILE_SIZE * z.exp2() / TAU, Point::zeros())
    }

    /// Zoom level implied by `k`.
    pub fn zoom(&self) -> f64 {
        (self.k * TAU / TILE_SIZE).log2()
    }

    /// Same projection shifted so that `loc` lands on pixel `at`.
    pub fn centered(self, loc: Point, at: Point) -> Self {
        let raw = Self::new(self.k, Point::zeros()).forward(loc);
        Self::new(self.k, at - raw)
    }
}

impl Projection for Mercator {
    fn forward(&self, loc: Point) -> Point {
        let lambda = loc.x.to_radians();
        let phi = loc.y.to_radians();
        let merc_y = (FRAC_PI_4 + phi / 2.0).tan().ln();
        Point::new(
            lambda * self.k + self.translate.x,
            self.translate.y - merc_y * self.k,
        )
    }

    fn invert(&self, p: Point) -> Point {
        let lambda = (p.x - self.translate.x) / self.k;
        let phi = 2.0 * ((self.translate.y - p.y) / self.k).exp().atan() - FRAC_PI_2;
        Point::new(lambda.to_degrees(), phi.to_degrees())
    }
}

/// Flat plane in meters centered on `origin` (lon, lat), y up.
///
/// Longitude is scaled at the origin latitude, so accuracy drops with
/// distance from the origin. An origin at a pole collapses longitude to 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocalMeters {
    pub origin: Point,
}

impl LocalMeters {
    #[inline]
    pub fn new(origin: Point) -> Self {
        Self { origin }
    }
}

impl Projection for LocalMeters {
    fn forward(&self, loc: Point) -> Point {
        let d = loc - self.origin;
        Point::new(lon_to_meters(d.x, self.origin.y), lat_to_meters(d.y))
    }

    fn invert(&self, p: Point) -> Point {
        Point::new(
            self.origin.x + meters_to_lon(p.x, self.origin.y),
            self.origin.y + meters_to_lat(p.y),
        )
    }
}
