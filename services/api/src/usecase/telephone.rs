use tracing::info;

use crate::domain::repository::{TelephoneRepository, UserRepository};
use crate::domain::types::Telephone;
use crate::error::ApiServiceError;

// ── ListTelephones ───────────────────────────────────────────────────────────

pub struct ListTelephonesUseCase<R: TelephoneRepository> {
    pub repo: R,
}

impl<R: TelephoneRepository> ListTelephonesUseCase<R> {
    pub async fn execute(&self, user_id: i64) -> Result<Vec<Telephone>, ApiServiceError> {
        self.repo.list_by_user_id(user_id).await
    }
}

// ── AddTelephone ─────────────────────────────────────────────────────────────

pub struct AddTelephoneInput {
    pub phone_number: String,
}

pub struct AddTelephoneUseCase<U: UserRepository, T: TelephoneRepository> {
    pub users: U,
    pub telephones: T,
}

impl<U: UserRepository, T: TelephoneRepository> AddTelephoneUseCase<U, T> {
    pub async fn execute(
        &self,
        user_id: i64,
        input: AddTelephoneInput,
    ) -> Result<Telephone, ApiServiceError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(ApiServiceError::UserNotFound)?;
        let telephone = self
            .telephones
            .create(user.id, &input.phone_number)
            .await?;
        info!(user_id, telephone_id = telephone.id, "telephone added");
        Ok(telephone)
    }
}

// ── DeleteTelephone ──────────────────────────────────────────────────────────

pub struct DeleteTelephoneUseCase<R: TelephoneRepository> {
    pub repo: R,
}

impl<R: TelephoneRepository> DeleteTelephoneUseCase<R> {
    pub async fn execute(&self, user_id: i64, telephone_id: i64) -> Result<(), ApiServiceError> {
        self.repo.delete_owned(user_id, telephone_id).await?;
        info!(user_id, telephone_id, "telephone deleted");
        Ok(())
    }
}
