use std::future::Future;

use thiserror::Error;

use crate::{geopoint::GeoPoint, profile::TravelProfile, route_result::RouteResult};

/// Why a single call to the shortest-path provider failed.
///
/// The messages end up in the `mensaje*` fields of the reply, hence Spanish.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProviderError {
    #[error("el proveedor de rutas no respondió a tiempo")]
    Timeout,

    #[error("no se pudo conectar con el proveedor de rutas")]
    Unreachable,

    #[error("el proveedor no encontró un camino entre los puntos")]
    NoRoute,

    #[error("el proveedor de rutas devolvió una respuesta inválida")]
    ProviderFault,

    #[error("error del proveedor de rutas: {0}")]
    Other(String),
}

/// Something that can compute a shortest path between two points.
///
/// One call per invocation, no retries: the caller decides whether a failure
/// is fatal.
pub trait RouteProvider: Send + Sync {
    fn fetch_route(
        &self,
        from: GeoPoint,
        to: GeoPoint,
        profile: TravelProfile,
    ) -> impl Future<Output = Result<RouteResult, ProviderError>> + Send;
}
