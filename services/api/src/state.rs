use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbAddressRepository, DbRouteRepository, DbTelephoneRepository, DbUserRepository,
};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: Arc::clone(&self.db),
        }
    }

    pub fn address_repo(&self) -> DbAddressRepository {
        DbAddressRepository {
            db: Arc::clone(&self.db),
        }
    }

    pub fn telephone_repo(&self) -> DbTelephoneRepository {
        DbTelephoneRepository {
            db: Arc::clone(&self.db),
        }
    }

    pub fn route_repo(&self) -> DbRouteRepository {
        DbRouteRepository {
            db: Arc::clone(&self.db),
        }
    }
}
