use std::{
    future::Future,
    sync::atomic::{AtomicUsize, Ordering},
};

use crate::{
    geopoint::GeoPoint,
    profile::TravelProfile,
    provider::{ProviderError, RouteProvider},
    route_result::RouteResult,
};

/// Average speed used by the stubs to derive a duration, 36 km/h.
const STUB_SPEED_MPS: f64 = 10.0;

/// Length of one degree of arc on the mean Earth sphere.
const METERS_PER_DEGREE: f64 = 111_195.0;

/// Flat-earth length of `from`-`to`, good enough at city scale.
pub fn stub_distance(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let dx = (to.lng - from.lng) * from.lat.to_radians().cos();
    let dy = to.lat - from.lat;
    dx.hypot(dy) * METERS_PER_DEGREE
}

pub fn route_between(from: GeoPoint, to: GeoPoint, distance_meters: f64) -> RouteResult {
    RouteResult::new(
        vec![from, to],
        distance_meters,
        distance_meters / STUB_SPEED_MPS,
    )
}

/// Answers every leg with the straight segment between its endpoints.
pub struct StraightLineProvider;

impl RouteProvider for StraightLineProvider {
    async fn fetch_route(
        &self,
        from: GeoPoint,
        to: GeoPoint,
        _profile: TravelProfile,
    ) -> Result<RouteResult, ProviderError> {
        Ok(route_between(from, to, stub_distance(&from, &to)))
    }
}

/// Answers every leg with a polyline that bows out sideways through a point
/// off the straight line, like a road following a river.
pub struct CurvingProvider;

impl RouteProvider for CurvingProvider {
    async fn fetch_route(
        &self,
        from: GeoPoint,
        to: GeoPoint,
        _profile: TravelProfile,
    ) -> Result<RouteResult, ProviderError> {
        // a quarter of the leg sideways: both halves run ~26.6° off the leg
        let dlat = to.lat - from.lat;
        let dlng = to.lng - from.lng;
        let middle = GeoPoint::new(
            (from.lat + to.lat) / 2.0 + dlng / 4.0,
            (from.lng + to.lng) / 2.0 - dlat / 4.0,
        );

        let distance = stub_distance(&from, &middle) + stub_distance(&middle, &to);
        Ok(RouteResult::new(
            vec![from, middle, to],
            distance,
            distance / STUB_SPEED_MPS,
        ))
    }
}

/// Answers every leg with the given polyline, whatever the endpoints.
pub struct FixedProvider(pub RouteResult);

impl RouteProvider for FixedProvider {
    async fn fetch_route(
        &self,
        _from: GeoPoint,
        _to: GeoPoint,
        _profile: TravelProfile,
    ) -> Result<RouteResult, ProviderError> {
        Ok(self.0.clone())
    }
}

/// Fails every call with the same error.
pub struct FailingProvider(pub ProviderError);

impl RouteProvider for FailingProvider {
    async fn fetch_route(
        &self,
        _from: GeoPoint,
        _to: GeoPoint,
        _profile: TravelProfile,
    ) -> Result<RouteResult, ProviderError> {
        Err(self.0.clone())
    }
}

/// Counts how many calls reach the wrapped provider.
pub struct CountingProvider<P> {
    inner: P,
    calls: AtomicUsize,
}

impl<P> CountingProvider<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<P> RouteProvider for CountingProvider<P>
where
    P: RouteProvider,
{
    fn fetch_route(
        &self,
        from: GeoPoint,
        to: GeoPoint,
        profile: TravelProfile,
    ) -> impl Future<Output = Result<RouteResult, ProviderError>> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch_route(from, to, profile)
    }
}
