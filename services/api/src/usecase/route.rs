use tracing::info;

use crate::domain::repository::{RouteRepository, UserRepository};
use crate::domain::types::{Route, RouteFields};
use crate::error::ApiServiceError;

/// Resolve the optional owner before a route references it.
async fn ensure_owner<U: UserRepository>(
    users: &U,
    user_id: Option<i64>,
) -> Result<(), ApiServiceError> {
    if let Some(id) = user_id {
        users
            .find_by_id(id)
            .await?
            .ok_or(ApiServiceError::UserNotFound)?;
    }
    Ok(())
}

// ── ListRoutes ───────────────────────────────────────────────────────────────

pub struct ListRoutesUseCase<R: RouteRepository> {
    pub repo: R,
}

impl<R: RouteRepository> ListRoutesUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Route>, ApiServiceError> {
        self.repo.find_all().await
    }
}

// ── GetRoute ─────────────────────────────────────────────────────────────────

pub struct GetRouteUseCase<R: RouteRepository> {
    pub repo: R,
}

impl<R: RouteRepository> GetRouteUseCase<R> {
    pub async fn execute(&self, route_id: i64) -> Result<Route, ApiServiceError> {
        self.repo
            .find_by_id(route_id)
            .await?
            .ok_or(ApiServiceError::RouteNotFound)
    }
}

// ── CreateRoute ──────────────────────────────────────────────────────────────

pub struct CreateRouteUseCase<U: UserRepository, R: RouteRepository> {
    pub users: U,
    pub routes: R,
}

impl<U: UserRepository, R: RouteRepository> CreateRouteUseCase<U, R> {
    pub async fn execute(&self, input: RouteFields) -> Result<Route, ApiServiceError> {
        ensure_owner(&self.users, input.user_id).await?;
        let route = self.routes.create(&input).await?;
        info!(route_id = route.id, user_id = ?route.user_id, "route created");
        Ok(route)
    }
}

// ── UpdateRoute ──────────────────────────────────────────────────────────────

pub struct UpdateRouteUseCase<U: UserRepository, R: RouteRepository> {
    pub users: U,
    pub routes: R,
}

impl<U: UserRepository, R: RouteRepository> UpdateRouteUseCase<U, R> {
    /// Full replace: name, distance, duration and owner all take the new
    /// values, so a missing `user_id` detaches the route.
    pub async fn execute(
        &self,
        route_id: i64,
        input: RouteFields,
    ) -> Result<Route, ApiServiceError> {
        self.routes
            .find_by_id(route_id)
            .await?
            .ok_or(ApiServiceError::RouteNotFound)?;
        ensure_owner(&self.users, input.user_id).await?;
        let route = self
            .routes
            .update(route_id, &input)
            .await?
            .ok_or(ApiServiceError::RouteNotFound)?;
        info!(route_id, "route updated");
        Ok(route)
    }
}

// ── DeleteRoute ──────────────────────────────────────────────────────────────

pub struct DeleteRouteUseCase<R: RouteRepository> {
    pub repo: R,
}

impl<R: RouteRepository> DeleteRouteUseCase<R> {
    pub async fn execute(&self, route_id: i64) -> Result<(), ApiServiceError> {
        if !self.repo.delete(route_id).await? {
            return Err(ApiServiceError::RouteNotFound);
        }
        info!(route_id, "route deleted");
        Ok(())
    }
}
