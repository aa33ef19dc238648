//! Geographic points and the distance check used for layer coverage.

use std::fmt;

/// Mean earth radius in metres, spherical model.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A geographic position in degrees.
///
/// Coverage tests only need great-circle distances of a few hundred
/// kilometres, so a spherical earth is plenty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Creates a point from latitude and longitude in degrees.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns the latitude in degrees.
    pub fn latitude(self) -> f64 {
        self.latitude
    }

    /// Returns the longitude in degrees.
    pub fn longitude(self) -> f64 {
        self.longitude
    }

    /// Great-circle distance to another point, in metres.
    pub fn distance_to(self, other: GeoPoint) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let dlat = (other.latitude - self.latitude).to_radians();
        let dlon = (other.longitude - self.longitude).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.latitude, self.longitude)
    }
}
