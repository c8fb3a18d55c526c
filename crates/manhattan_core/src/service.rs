use futures::join;
use tracing::{info, warn};

use crate::{
    geopoint::GeoPoint,
    profile::TravelMode,
    provider::RouteProvider,
    response::{ResponseBody, assemble},
    synthesizer::ManhattanSynthesizer,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteRequest {
    pub origin: GeoPoint,
    pub destination: GeoPoint,
    pub mode: TravelMode,
}

/// The request path: one plain route, plus the Manhattan alternative when the
/// mode asks for it.
pub struct RouteService<P> {
    provider: P,
    synthesizer: ManhattanSynthesizer,
}

impl<P> RouteService<P>
where
    P: RouteProvider,
{
    pub fn new(provider: P, synthesizer: ManhattanSynthesizer) -> Self {
        Self {
            provider,
            synthesizer,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub async fn compute(&self, request: &RouteRequest) -> ResponseBody {
        let profile = request.mode.profile();

        let plain = self
            .provider
            .fetch_route(request.origin, request.destination, profile);

        let manhattan = async {
            if request.mode.wants_manhattan() {
                Some(
                    self.synthesizer
                        .synthesize(&self.provider, request.origin, request.destination, profile)
                        .await,
                )
            } else {
                None
            }
        };

        let (plain, manhattan) = join!(plain, manhattan);

        if let Err(error) = &plain {
            warn!(
                "Plain route {:?} -> {:?} ({}) failed: {}",
                request.origin, request.destination, profile, error
            );
        }

        let body = assemble(plain, manhattan);
        info!(
            "Route {:?} -> {:?} mode={} plain={:?} manhattan={:?}",
            request.origin,
            request.destination,
            request.mode,
            body.distance_meters,
            body.manhattan_distance_meters
        );
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        provider::ProviderError,
        route_result::RouteResult,
        synthesizer::SynthesizerParams,
        test_utils::{
            CountingProvider, CurvingProvider, FailingProvider, FixedProvider, StraightLineProvider,
        },
    };

    fn service<P: RouteProvider>(provider: P) -> RouteService<P> {
        RouteService::new(
            provider,
            ManhattanSynthesizer::new(SynthesizerParams::default()),
        )
    }

    #[tokio::test]
    async fn test_plain_route_requested_once() {
        let service = service(CountingProvider::new(StraightLineProvider));
        let request = RouteRequest {
            origin: GeoPoint::new(19.40, -99.17),
            destination: GeoPoint::new(19.40, -99.10),
            mode: TravelMode::Auto,
        };

        let body = service.compute(&request).await;

        assert_eq!(service.provider().calls(), 1);
        assert!(body.distance_meters.is_some());
        assert!(body.manhattan_route.is_empty());
        assert!(body.is_viable());
    }

    #[tokio::test]
    async fn test_manhattan_on_shared_latitude_matches_plain() {
        let service = service(StraightLineProvider);
        let request = RouteRequest {
            origin: GeoPoint::new(19.40, -99.17),
            destination: GeoPoint::new(19.40, -99.10),
            mode: TravelMode::Manhattan,
        };

        let body = service.compute(&request).await;

        let plain = body.distance_meters.unwrap();
        let manhattan = body.manhattan_distance_meters.unwrap();
        assert!((plain - manhattan).abs() < 0.01);
        assert_eq!(body.manhattan_route.first(), body.route.first());
        assert_eq!(body.manhattan_route.last(), body.route.last());
    }

    #[tokio::test]
    async fn test_curving_streets_still_return_plain_route() {
        let service = service(CurvingProvider);
        let request = RouteRequest {
            origin: GeoPoint::new(19.40, -99.17),
            destination: GeoPoint::new(19.45, -99.10),
            mode: TravelMode::Manhattan,
        };

        let body = service.compute(&request).await;

        assert_eq!(body.route.len(), 3);
        assert!(body.manhattan_route.is_empty());
        assert_eq!(body.manhattan_distance_meters, None);
        assert!(body.manhattan_message.contains("ortogonal"));
        assert!(body.is_viable());
    }

    #[tokio::test]
    async fn test_timeouts_everywhere_are_not_viable() {
        let service = service(CountingProvider::new(FailingProvider(ProviderError::Timeout)));
        let request = RouteRequest {
            origin: GeoPoint::new(19.40, -99.17),
            destination: GeoPoint::new(19.45, -99.10),
            mode: TravelMode::Manhattan,
        };

        let body = service.compute(&request).await;

        assert!(body.message.contains("no respondió a tiempo"));
        assert!(body.manhattan_route.is_empty());
        assert!(body.manhattan_message.contains("no respondió a tiempo"));
        assert!(!body.is_viable());
        assert!(service.provider().calls() <= 5);
    }

    #[tokio::test]
    async fn test_empty_provider_routes_are_not_reported_as_found() {
        let service = service(FixedProvider(RouteResult::new(vec![], 0.0, 0.0)));
        let request = RouteRequest {
            origin: GeoPoint::new(19.40, -99.17),
            destination: GeoPoint::new(19.45, -99.10),
            mode: TravelMode::Manhattan,
        };

        let body = service.compute(&request).await;

        assert!(body.route.is_empty());
        assert_eq!(body.distance_meters, None);
        assert!(body.manhattan_route.is_empty());
        assert_eq!(body.manhattan_distance_meters, None);
        assert!(!body.manhattan_message.contains("encontrada"));
        assert!(!body.is_viable());
    }
}
