use serde::{Deserialize, Serialize};

/// Absolute tolerance, in degrees, under which two coordinates are the same point.
pub const COINCIDENT_EPSILON: f64 = 1e-7;

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_near(&self, other: &GeoPoint) -> bool {
        (self.lat - other.lat).abs() <= COINCIDENT_EPSILON
            && (self.lng - other.lng).abs() <= COINCIDENT_EPSILON
    }

    /// `[lat, lng]`, the order the web client draws polylines in.
    pub fn to_lat_lng(&self) -> [f64; 2] {
        [self.lat, self.lng]
    }
}

impl From<&GeoPoint> for geo_types::Point {
    fn from(point: &GeoPoint) -> Self {
        geo_types::Point::new(point.lng, point.lat)
    }
}
