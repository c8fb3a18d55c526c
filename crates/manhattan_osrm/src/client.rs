use std::time::Duration;

use geojson::{Geometry, Value};
use manhattan_core::{
    geopoint::GeoPoint,
    profile::TravelProfile,
    provider::{ProviderError, RouteProvider},
    route_result::RouteResult,
};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum OsrmError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("OSRM answered {code}: {message}")]
    Api { code: String, message: String },

    #[error("OSRM answered HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("OSRM returned no routes")]
    EmptyRoutes,

    #[error("Incomplete response: {0}")]
    IncompleteResponse(&'static str),
}

impl From<OsrmError> for ProviderError {
    fn from(error: OsrmError) -> Self {
        match error {
            OsrmError::Request(error) if error.is_timeout() => ProviderError::Timeout,
            OsrmError::Request(error) if error.is_connect() => ProviderError::Unreachable,
            OsrmError::Request(error) if error.is_decode() || error.is_body() => {
                ProviderError::ProviderFault
            }
            OsrmError::Request(error) => ProviderError::Other(error.to_string()),
            OsrmError::Api { code, .. } if code == OSRM_NO_ROUTE_CODE => ProviderError::NoRoute,
            OsrmError::Api { code, message } => ProviderError::Other(format!("{code}: {message}")),
            OsrmError::Status { status, .. } => ProviderError::Other(format!("HTTP {status}")),
            OsrmError::EmptyRoutes => ProviderError::NoRoute,
            OsrmError::Deserialize(_) | OsrmError::IncompleteResponse(_) => {
                ProviderError::ProviderFault
            }
        }
    }
}

#[derive(Deserialize)]
struct OsrmRouteResponse {
    code: String,

    #[serde(default)]
    message: Option<String>,

    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Deserialize)]
struct OsrmRoute {
    geometry: Geometry,

    /// Meters
    distance: f64,

    /// Seconds
    duration: f64,
}

pub struct OsrmRouteClientParams {
    pub osrm_url: String,
    pub timeout: Duration,
}

pub const OSRM_ROUTE_API_PATH: &str = "/route/v1/";
pub const OSRM_OK_CODE: &str = "Ok";
pub const OSRM_NO_ROUTE_CODE: &str = "NoRoute";

pub struct OsrmRouteClient {
    params: OsrmRouteClientParams,
    client: reqwest::Client,
}

impl OsrmRouteClient {
    pub fn new(params: OsrmRouteClientParams) -> Result<Self, OsrmError> {
        let client = reqwest::Client::builder().timeout(params.timeout).build()?;

        Ok(Self { params, client })
    }

    pub fn osrm_url(&self) -> &str {
        &self.params.osrm_url
    }

    /// `{base}/route/v1/{profile}/{lng},{lat};{lng},{lat}`, longitude first.
    pub fn route_url(&self, from: &GeoPoint, to: &GeoPoint, profile: TravelProfile) -> String {
        let from: geo_types::Point = from.into();
        let to: geo_types::Point = to.into();

        let mut url = self.params.osrm_url.trim_end_matches('/').to_string();
        url.push_str(OSRM_ROUTE_API_PATH);
        url.push_str(&format!(
            "{}/{},{};{},{}",
            profile,
            from.x(),
            from.y(),
            to.x(),
            to.y()
        ));
        url
    }

    pub async fn request_route(
        &self,
        from: GeoPoint,
        to: GeoPoint,
        profile: TravelProfile,
    ) -> Result<RouteResult, OsrmError> {
        let url = self.route_url(&from, &to, profile);
        debug!("OSRM: requesting {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("overview", "simplified"),
                ("geometries", "geojson"),
                ("steps", "false"),
                ("alternatives", "false"),
            ])
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        // OSRM reports NoRoute and friends as JSON on a 400
        let body: OsrmRouteResponse = match serde_json::from_str(&text) {
            Ok(body) => body,
            Err(_) if !status.is_success() => {
                return Err(OsrmError::Status {
                    status: status.as_u16(),
                    body: text,
                });
            }
            Err(error) => return Err(OsrmError::Deserialize(error)),
        };

        parse_route_response(body)
    }
}

fn parse_route_response(body: OsrmRouteResponse) -> Result<RouteResult, OsrmError> {
    if body.code != OSRM_OK_CODE {
        return Err(OsrmError::Api {
            code: body.code,
            message: body.message.unwrap_or_default(),
        });
    }

    let route = body.routes.into_iter().next().ok_or(OsrmError::EmptyRoutes)?;

    let coordinates = match route.geometry.value {
        Value::LineString(coordinates) => coordinates,
        _ => return Err(OsrmError::IncompleteResponse("geometry is not a LineString")),
    };

    let points = coordinates
        .iter()
        .map(|position| match position.as_slice() {
            [lng, lat, ..] => Ok(GeoPoint::new(*lat, *lng)),
            _ => Err(OsrmError::IncompleteResponse("position without two coordinates")),
        })
        .collect::<Result<Vec<GeoPoint>, OsrmError>>()?;

    if !route.distance.is_finite() || route.distance < 0.0 {
        return Err(OsrmError::IncompleteResponse("invalid distance"));
    }

    if !route.duration.is_finite() || route.duration < 0.0 {
        return Err(OsrmError::IncompleteResponse("invalid duration"));
    }

    if points.len() < 2 && route.distance > 0.0 {
        return Err(OsrmError::IncompleteResponse("geometry shorter than its distance"));
    }

    Ok(RouteResult::new(points, route.distance, route.duration))
}

impl RouteProvider for OsrmRouteClient {
    async fn fetch_route(
        &self,
        from: GeoPoint,
        to: GeoPoint,
        profile: TravelProfile,
    ) -> Result<RouteResult, ProviderError> {
        self.request_route(from, to, profile)
            .await
            .map_err(|error| {
                warn!("OSRM: {:?} -> {:?} failed: {}", from, to, error);
                ProviderError::from(error)
            })
    }
}
