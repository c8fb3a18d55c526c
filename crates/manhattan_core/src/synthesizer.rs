use futures::future::{join_all, try_join};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{
    candidates::{Candidate, generate_candidates},
    geometry::{all_segments_orthogonal, is_orthogonal},
    geopoint::GeoPoint,
    profile::TravelProfile,
    provider::{ProviderError, RouteProvider},
    route_result::RouteResult,
};

pub const DEFAULT_TREND_TOLERANCE_DEGREES: f64 = 20.0;
pub const DEFAULT_SEGMENT_TOLERANCE_DEGREES: f64 = 10.0;

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesizerParams {
    /// Tolerance for the idealized origin-corner-destination lines, checked
    /// before any provider call.
    pub trend_tolerance_degrees: f64,

    /// Tolerance for every segment of the polylines the provider returns.
    pub segment_tolerance_degrees: f64,
}

impl Default for SynthesizerParams {
    fn default() -> Self {
        Self {
            trend_tolerance_degrees: DEFAULT_TREND_TOLERANCE_DEGREES,
            segment_tolerance_degrees: DEFAULT_SEGMENT_TOLERANCE_DEGREES,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ManhattanOutcome {
    pub route: Option<RouteResult>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CandidateRejection {
    NotOrthogonalTrend,
    Provider(ProviderError),
    NotOrthogonalSegments,
}

pub struct ManhattanSynthesizer {
    params: SynthesizerParams,
}

impl ManhattanSynthesizer {
    pub fn new(params: SynthesizerParams) -> Self {
        Self { params }
    }

    /// Builds the shortest L-shaped route between `origin` and `destination`
    /// whose legs both follow the grid, or explains why there is none.
    ///
    /// At most two provider calls per candidate, four in total.
    pub async fn synthesize<P>(
        &self,
        provider: &P,
        origin: GeoPoint,
        destination: GeoPoint,
        profile: TravelProfile,
    ) -> ManhattanOutcome
    where
        P: RouteProvider,
    {
        let candidates = generate_candidates(&origin, &destination);

        // join_all keeps generation order, which select_best relies on for ties
        let evaluations = join_all(
            candidates
                .iter()
                .map(|candidate| self.evaluate(provider, candidate, profile)),
        )
        .await;

        let outcome = select_best(evaluations);
        info!(
            "Manhattan synthesis {:?} -> {:?}: {}",
            origin, destination, outcome.message
        );
        outcome
    }

    pub fn passes_trend_check(&self, candidate: &Candidate) -> bool {
        let tolerance = self.params.trend_tolerance_degrees;
        is_orthogonal(&candidate.origin, &candidate.corner, tolerance)
            && is_orthogonal(&candidate.corner, &candidate.destination, tolerance)
    }

    pub fn passes_segment_check(&self, first: &RouteResult, second: &RouteResult) -> bool {
        let tolerance = self.params.segment_tolerance_degrees;
        all_segments_orthogonal(&first.points, tolerance)
            && all_segments_orthogonal(&second.points, tolerance)
    }

    async fn evaluate<P>(
        &self,
        provider: &P,
        candidate: &Candidate,
        profile: TravelProfile,
    ) -> Result<RouteResult, CandidateRejection>
    where
        P: RouteProvider,
    {
        if !self.passes_trend_check(candidate) {
            debug!("Corner {:?} rejected: not orthogonal", candidate.corner);
            return Err(CandidateRejection::NotOrthogonalTrend);
        }

        let (first_from, first_to) = candidate.first_leg();
        let (second_from, second_to) = candidate.second_leg();

        let (first, second) = try_join(
            provider.fetch_route(first_from, first_to, profile),
            provider.fetch_route(second_from, second_to, profile),
        )
        .await
        .map_err(|error| {
            warn!(
                "Corner {:?} dropped, provider failed: {}",
                candidate.corner, error
            );
            CandidateRejection::Provider(error)
        })?;

        // fewer than two points is no route, and would break the join at the corner
        if first.is_empty() || second.is_empty() {
            debug!("Corner {:?} dropped: a leg has no route", candidate.corner);
            return Err(CandidateRejection::Provider(ProviderError::NoRoute));
        }

        if !self.passes_segment_check(&first, &second) {
            debug!(
                "Corner {:?} rejected: provider geometry leaves the grid",
                candidate.corner
            );
            return Err(CandidateRejection::NotOrthogonalSegments);
        }

        Ok(first.join(second))
    }
}

fn keep_shorter(best: Option<RouteResult>, candidate: RouteResult) -> Option<RouteResult> {
    match best {
        // strictly shorter only, so the earlier candidate keeps a tie
        Some(current) if candidate.distance_meters >= current.distance_meters => Some(current),
        _ => Some(candidate),
    }
}

/// Reduces evaluated candidates to the outcome: the shortest valid route, the
/// first one on ties, or a message for the most informative rejection.
pub fn select_best<I>(evaluations: I) -> ManhattanOutcome
where
    I: IntoIterator<Item = Result<RouteResult, CandidateRejection>>,
{
    let mut rejections = Vec::new();

    let best = evaluations
        .into_iter()
        .filter_map(|evaluation| evaluation.map_err(|rejection| rejections.push(rejection)).ok())
        .fold(None, keep_shorter);

    match best {
        Some(route) => ManhattanOutcome {
            message: format!(
                "Ruta Manhattan encontrada: {:.2} metros.",
                route.distance_meters
            ),
            route: Some(route),
        },
        None => ManhattanOutcome {
            route: None,
            message: rejection_message(&rejections),
        },
    }
}

fn rejection_message(rejections: &[CandidateRejection]) -> String {
    if rejections
        .iter()
        .any(|rejection| matches!(rejection, CandidateRejection::NotOrthogonalSegments))
    {
        return "No se encontró una ruta ortogonal válida: las calles de esta zona no siguen una cuadrícula."
            .to_string();
    }

    if let Some(error) = rejections.iter().find_map(|rejection| match rejection {
        CandidateRejection::Provider(error) => Some(error),
        _ => None,
    }) {
        return format!("No se pudo calcular la ruta Manhattan: {error}.");
    }

    "No se pudo formar una esquina ortogonal entre el origen y el destino.".to_string()
}
