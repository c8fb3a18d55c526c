use serde::{Deserialize, Serialize};

use crate::geopoint::GeoPoint;

/// A route as returned by the shortest-path provider, latitude-first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    pub points: Vec<GeoPoint>,

    /// Meters
    pub distance_meters: f64,

    /// Seconds
    pub duration_seconds: f64,
}

impl RouteResult {
    pub fn new(points: Vec<GeoPoint>, distance_meters: f64, duration_seconds: f64) -> Self {
        Self {
            points,
            distance_meters,
            duration_seconds,
        }
    }

    /// A single point or an empty polyline means there is no route to draw.
    pub fn is_empty(&self) -> bool {
        self.points.len() < 2
    }

    pub fn first_point(&self) -> Option<&GeoPoint> {
        self.points.first()
    }

    pub fn last_point(&self) -> Option<&GeoPoint> {
        self.points.last()
    }

    /// Appends `next` to this route. `next` must start where this route ends;
    /// its first point is the shared junction and is dropped once.
    pub fn join(mut self, next: RouteResult) -> RouteResult {
        self.points.extend(next.points.into_iter().skip(1));
        self.distance_meters += next.distance_meters;
        self.duration_seconds += next.duration_seconds;
        self
    }

    pub fn to_lat_lng(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(GeoPoint::to_lat_lng).collect()
    }
}
