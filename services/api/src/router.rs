use axum::{
    Router,
    routing::{delete, get},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use viabus_core::health::healthz;
use viabus_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    address::{create_address, get_address, update_address},
    health::readyz,
    route::{create_route, delete_route, get_route, list_routes, update_route},
    telephone::{add_telephone, delete_telephone, list_telephones},
    user::{create_user, delete_user, get_user, list_users, update_user},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Users
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        // Address
        .route(
            "/users/{id}/address",
            get(get_address).post(create_address).put(update_address),
        )
        // Telephones
        .route(
            "/users/{id}/phones",
            get(list_telephones).post(add_telephone),
        )
        .route("/users/{id}/phones/{phone_id}", delete(delete_telephone))
        // Routes
        .route("/routes", get(list_routes).post(create_route))
        .route(
            "/routes/{id}",
            get(get_route).put(update_route).delete(delete_route),
        )
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(TraceLayer::new_for_http())
                .layer(propagate_request_id_layer()),
        )
        .with_state(state)
}
