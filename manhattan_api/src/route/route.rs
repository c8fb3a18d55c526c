use crate::error::ApiError;
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use manhattan_core::geopoint::GeoPoint;
use manhattan_core::profile::TravelMode;
use manhattan_core::response::ResponseBody;
use manhattan_core::service::RouteRequest;
use serde::Deserialize;
use std::sync::Arc;

pub struct RouteResponse(ResponseBody);

impl IntoResponse for RouteResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self.0)).into_response()
    }
}

#[derive(Deserialize)]
pub struct RouteRequestBody {
    origen: Option<GeoPoint>,
    destino: Option<GeoPoint>,
    modo: Option<String>,
}

impl RouteRequestBody {
    fn into_route_request(self) -> Result<RouteRequest, ApiError> {
        let origin = self
            .origen
            .ok_or_else(|| ApiError::BadRequest("Falta el campo 'origen'.".to_string()))?;
        let destination = self
            .destino
            .ok_or_else(|| ApiError::BadRequest("Falta el campo 'destino'.".to_string()))?;

        Ok(RouteRequest {
            origin,
            destination,
            mode: TravelMode::from_request(self.modo.as_deref()),
        })
    }
}

pub async fn route_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<RouteRequestBody>, JsonRejection>,
) -> Result<RouteResponse, ApiError> {
    let Json(body) = body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let request = body.into_route_request()?;

    let reply = state.service.compute(&request).await;

    if !reply.is_viable() {
        return Err(ApiError::NoViableRoute(reply));
    }

    Ok(RouteResponse(reply))
}
