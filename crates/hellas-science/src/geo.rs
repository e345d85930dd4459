//! Great-circle distances

use serde::{Deserialize, Serialize};

/// Mean earth radius used by [`haversine`]
pub const EARTH_RADIUS_KM: f64 = 6367.0;

/// A position in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Longitude in decimal degrees
    pub lon: f64,
    /// Latitude in decimal degrees
    pub lat: f64,
}

impl GeoPoint {
    /// Create point from longitude and latitude
    #[inline]
    #[must_use]
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Distance to another point in kilometres
    #[inline]
    #[must_use]
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        distance_points(*self, *other)
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((lon, lat): (f64, f64)) -> Self {
        Self { lon, lat }
    }
}

/// Great-circle distance in kilometres between two positions in decimal degrees
///
/// # Example
/// ```rust
/// use hellas_science::haversine;
///
/// let km = haversine(-0.126, 51.50, 2.350, 48.856);
/// assert!((km - 342.553_752_724_548_6).abs() < 1e-9);
/// ```
#[must_use]
pub fn haversine(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    let (lon1, lat1, lon2, lat2) = (
        lon1.to_radians(),
        lat1.to_radians(),
        lon2.to_radians(),
        lat2.to_radians(),
    );
    let dlon = lon2 - lon1;
    let dlat = lat2 - lat1;
    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // rounding can push `a` just past 1 for near-antipodal points
    let c = 2.0 * a.sqrt().min(1.0).asin();
    EARTH_RADIUS_KM * c
}

/// [`haversine`] over two points
#[must_use]
pub fn distance_points(a: impl Into<GeoPoint>, b: impl Into<GeoPoint>) -> f64 {
    let (a, b) = (a.into(), b.into());
    haversine(a.lon, a.lat, b.lon, b.lat)
}
