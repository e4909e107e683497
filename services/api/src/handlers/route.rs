use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::types::{Route, RouteFields};
use crate::error::ApiServiceError;
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;
use crate::usecase::route::{
    CreateRouteUseCase, DeleteRouteUseCase, GetRouteUseCase, ListRoutesUseCase,
    UpdateRouteUseCase,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResponse {
    pub id: i64,
    pub name: String,
    pub distance: f64,
    pub duration: f64,
    pub user_id: Option<i64>,
}

impl From<Route> for RouteResponse {
    fn from(route: Route) -> Self {
        Self {
            id: route.id,
            name: route.name,
            distance: route.distance,
            duration: route.duration,
            user_id: route.user_id,
        }
    }
}

/// Body for both create and full-replace update.
#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RouteRequest {
    #[validate(length(min = 1))]
    pub name: String,
    pub distance: f64,
    pub duration: f64,
    #[serde(default)]
    pub user_id: Option<i64>,
}

impl From<RouteRequest> for RouteFields {
    fn from(body: RouteRequest) -> Self {
        Self {
            name: body.name,
            distance: body.distance,
            duration: body.duration,
            user_id: body.user_id,
        }
    }
}

// ── GET /routes ──────────────────────────────────────────────────────────────

pub async fn list_routes(
    State(state): State<AppState>,
) -> Result<Json<Vec<RouteResponse>>, ApiServiceError> {
    let usecase = ListRoutesUseCase {
        repo: state.route_repo(),
    };
    let routes = usecase.execute().await?;
    Ok(Json(routes.into_iter().map(RouteResponse::from).collect()))
}

// ── GET /routes/{id} ─────────────────────────────────────────────────────────

pub async fn get_route(
    State(state): State<AppState>,
    ApiPath(route_id): ApiPath<i64>,
) -> Result<Json<RouteResponse>, ApiServiceError> {
    let usecase = GetRouteUseCase {
        repo: state.route_repo(),
    };
    let route = usecase.execute(route_id).await?;
    Ok(Json(route.into()))
}

// ── POST /routes ─────────────────────────────────────────────────────────────

pub async fn create_route(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<RouteRequest>,
) -> Result<(StatusCode, Json<RouteResponse>), ApiServiceError> {
    body.validate()?;
    let usecase = CreateRouteUseCase {
        users: state.user_repo(),
        routes: state.route_repo(),
    };
    let route = usecase.execute(body.into()).await?;
    Ok((StatusCode::CREATED, Json(route.into())))
}

// ── PUT /routes/{id} ─────────────────────────────────────────────────────────

pub async fn update_route(
    State(state): State<AppState>,
    ApiPath(route_id): ApiPath<i64>,
    ApiJson(body): ApiJson<RouteRequest>,
) -> Result<Json<RouteResponse>, ApiServiceError> {
    body.validate()?;
    let usecase = UpdateRouteUseCase {
        users: state.user_repo(),
        routes: state.route_repo(),
    };
    let route = usecase.execute(route_id, body.into()).await?;
    Ok(Json(route.into()))
}

// ── DELETE /routes/{id} ──────────────────────────────────────────────────────

pub async fn delete_route(
    State(state): State<AppState>,
    ApiPath(route_id): ApiPath<i64>,
) -> Result<StatusCode, ApiServiceError> {
    let usecase = DeleteRouteUseCase {
        repo: state.route_repo(),
    };
    usecase.execute(route_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
