#![allow(async_fn_in_trait)]

use crate::domain::types::{
    Address, AddressFields, NewUser, Route, RouteFields, Telephone, User, UserIdentity,
};
use crate::error::ApiServiceError;

/// Repository for users.
pub trait UserRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<User>, ApiServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, ApiServiceError>;
    async fn create(&self, user: &NewUser) -> Result<User, ApiServiceError>;

    /// Overwrite name, email and cpf in one transaction.
    /// Returns `None` if the user does not exist.
    async fn update_identity(
        &self,
        id: i64,
        identity: &UserIdentity,
    ) -> Result<Option<User>, ApiServiceError>;

    /// Delete a user with its address and telephones, detaching its routes.
    /// Returns `true` if a user row was deleted.
    async fn delete(&self, id: i64) -> Result<bool, ApiServiceError>;
}

/// Repository for addresses (one per user).
pub trait AddressRepository: Send + Sync {
    async fn find_by_user_id(&self, user_id: i64) -> Result<Option<Address>, ApiServiceError>;
    async fn create(
        &self,
        user_id: i64,
        fields: &AddressFields,
    ) -> Result<Address, ApiServiceError>;

    /// Overwrite street and city name of the user's address in one transaction.
    /// Returns `None` if the user has no address.
    async fn update_street_city(
        &self,
        user_id: i64,
        street: &str,
        city_name: &str,
    ) -> Result<Option<Address>, ApiServiceError>;
}

/// Repository for telephones.
pub trait TelephoneRepository: Send + Sync {
    async fn list_by_user_id(&self, user_id: i64) -> Result<Vec<Telephone>, ApiServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Telephone>, ApiServiceError>;
    async fn create(
        &self,
        user_id: i64,
        phone_number: &str,
    ) -> Result<Telephone, ApiServiceError>;

    /// Delete a telephone in one transaction, failing with
    /// `TelephoneNotFound` or `TelephoneNotOwned` instead of deleting.
    async fn delete_owned(&self, user_id: i64, id: i64) -> Result<(), ApiServiceError>;
}

/// Repository for routes.
pub trait RouteRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Route>, ApiServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Route>, ApiServiceError>;
    async fn create(&self, fields: &RouteFields) -> Result<Route, ApiServiceError>;

    /// Replace every field in one transaction. Returns `None` if the route does not exist.
    async fn update(&self, id: i64, fields: &RouteFields)
    -> Result<Option<Route>, ApiServiceError>;

    /// Returns `true` if a route was deleted.
    async fn delete(&self, id: i64) -> Result<bool, ApiServiceError>;
}
