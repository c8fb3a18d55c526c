use serde::{Deserialize, Serialize};

use crate::{provider::ProviderError, route_result::RouteResult, synthesizer::ManhattanOutcome};

pub const PLAIN_ROUTE_OK_MESSAGE: &str = "Ruta calculada correctamente.";
pub const MANHATTAN_NOT_REQUESTED_MESSAGE: &str =
    "Ruta Manhattan no solicitada. Usa el modo 'manhattan' para calcularla.";

/// The reply to a route request, with the field names the web client reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseBody {
    #[serde(rename = "ruta")]
    pub route: Vec<[f64; 2]>,

    #[serde(rename = "distancia_metros")]
    pub distance_meters: Option<f64>,

    #[serde(rename = "tiempo_segundos")]
    pub duration_seconds: Option<f64>,

    #[serde(rename = "mensaje")]
    pub message: String,

    #[serde(rename = "ruta_manhattan")]
    pub manhattan_route: Vec<[f64; 2]>,

    #[serde(rename = "distancia_manhattan_metros")]
    pub manhattan_distance_meters: Option<f64>,

    #[serde(rename = "tiempo_manhattan_segundos")]
    pub manhattan_duration_seconds: Option<f64>,

    #[serde(rename = "mensaje_manhattan")]
    pub manhattan_message: String,
}

impl ResponseBody {
    /// False when there is nothing to draw at all.
    pub fn is_viable(&self) -> bool {
        !self.route.is_empty() || !self.manhattan_route.is_empty()
    }
}

fn round_2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

struct Leg {
    points: Vec<[f64; 2]>,
    distance_meters: Option<f64>,
    duration_seconds: Option<f64>,
}

impl Leg {
    fn empty() -> Self {
        Self {
            points: Vec::new(),
            distance_meters: None,
            duration_seconds: None,
        }
    }

    fn from_route(route: &RouteResult) -> Self {
        Self {
            points: route.to_lat_lng(),
            distance_meters: Some(round_2(route.distance_meters)),
            duration_seconds: Some(round_2(route.duration_seconds)),
        }
    }
}

/// Merges the plain route and the optional Manhattan outcome into one reply.
///
/// Each half is reported independently: a failure on one side never hides
/// the other, and every absent route comes with a message saying why.
pub fn assemble(
    plain: Result<RouteResult, ProviderError>,
    manhattan: Option<ManhattanOutcome>,
) -> ResponseBody {
    let (plain_leg, message) = match &plain {
        Ok(route) if route.is_empty() => (
            Leg::empty(),
            format!("No se pudo calcular la ruta: {}.", ProviderError::NoRoute),
        ),
        Ok(route) => (Leg::from_route(route), PLAIN_ROUTE_OK_MESSAGE.to_string()),
        Err(error) => (Leg::empty(), format!("No se pudo calcular la ruta: {error}.")),
    };

    let (manhattan_leg, manhattan_message) = match manhattan {
        Some(ManhattanOutcome {
            route: Some(route),
            message,
        }) => (Leg::from_route(&route), message),
        Some(ManhattanOutcome {
            route: None,
            message,
        }) => (Leg::empty(), message),
        None => (Leg::empty(), MANHATTAN_NOT_REQUESTED_MESSAGE.to_string()),
    };

    ResponseBody {
        route: plain_leg.points,
        distance_meters: plain_leg.distance_meters,
        duration_seconds: plain_leg.duration_seconds,
        message,
        manhattan_route: manhattan_leg.points,
        manhattan_distance_meters: manhattan_leg.distance_meters,
        manhattan_duration_seconds: manhattan_leg.duration_seconds,
        manhattan_message,
    }
}
