use tracing::info;

use crate::domain::repository::{AddressRepository, UserRepository};
use crate::domain::types::{Address, AddressFields};
use crate::error::ApiServiceError;

// ── GetAddress ───────────────────────────────────────────────────────────────

pub struct GetAddressUseCase<R: AddressRepository> {
    pub repo: R,
}

impl<R: AddressRepository> GetAddressUseCase<R> {
    /// A user without an address is not an error.
    pub async fn execute(&self, user_id: i64) -> Result<Option<Address>, ApiServiceError> {
        self.repo.find_by_user_id(user_id).await
    }
}

// ── CreateAddress ────────────────────────────────────────────────────────────

pub struct CreateAddressUseCase<U: UserRepository, A: AddressRepository> {
    pub users: U,
    pub addresses: A,
}

impl<U: UserRepository, A: AddressRepository> CreateAddressUseCase<U, A> {
    /// A second address for the same user is rejected by the store's
    /// one-to-one key, not checked here.
    pub async fn execute(
        &self,
        user_id: i64,
        input: AddressFields,
    ) -> Result<Address, ApiServiceError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(ApiServiceError::UserNotFound)?;
        let address = self.addresses.create(user.id, &input).await?;
        info!(user_id, address_id = address.id, "address created");
        Ok(address)
    }
}

// ── UpdateAddress ────────────────────────────────────────────────────────────

/// Only street and city name are merged into the stored address.
pub struct UpdateAddressInput {
    pub street: String,
    pub city_name: String,
}

pub struct UpdateAddressUseCase<R: AddressRepository> {
    pub repo: R,
}

impl<R: AddressRepository> UpdateAddressUseCase<R> {
    pub async fn execute(
        &self,
        user_id: i64,
        input: UpdateAddressInput,
    ) -> Result<Address, ApiServiceError> {
        let address = self
            .repo
            .update_street_city(user_id, &input.street, &input.city_name)
            .await?
            .ok_or(ApiServiceError::AddressNotFound)?;
        info!(user_id, address_id = address.id, "address updated");
        Ok(address)
    }
}
