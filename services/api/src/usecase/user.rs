use chrono::Utc;
use tracing::info;

use crate::domain::repository::UserRepository;
use crate::domain::types::{NewUser, User, UserIdentity};
use crate::error::ApiServiceError;

// ── ListUsers ────────────────────────────────────────────────────────────────

pub struct ListUsersUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> ListUsersUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<User>, ApiServiceError> {
        self.repo.find_all().await
    }
}

// ── GetUser ──────────────────────────────────────────────────────────────────

pub struct GetUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetUserUseCase<R> {
    pub async fn execute(&self, user_id: i64) -> Result<User, ApiServiceError> {
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or(ApiServiceError::UserNotFound)
    }
}

// ── CreateUser ───────────────────────────────────────────────────────────────

pub struct CreateUserInput {
    pub cpf: String,
    pub name: String,
    pub email: String,
    pub photo_url: Option<String>,
    pub role: String,
}

pub struct CreateUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> CreateUserUseCase<R> {
    /// Uniqueness of cpf and email is left to the store.
    pub async fn execute(&self, input: CreateUserInput) -> Result<User, ApiServiceError> {
        let user = self
            .repo
            .create(&NewUser {
                cpf: input.cpf,
                name: input.name,
                email: input.email,
                photo_url: input.photo_url,
                role: input.role,
                created_at: Utc::now(),
            })
            .await?;
        info!(user_id = user.id, "user created");
        Ok(user)
    }
}

// ── UpdateUser ───────────────────────────────────────────────────────────────

/// Only these three fields are touched by an update. Role, photo url,
/// address and telephones keep their stored values.
pub struct UpdateUserInput {
    pub name: String,
    pub email: String,
    pub cpf: String,
}

pub struct UpdateUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> UpdateUserUseCase<R> {
    pub async fn execute(
        &self,
        user_id: i64,
        input: UpdateUserInput,
    ) -> Result<User, ApiServiceError> {
        let identity = UserIdentity {
            name: input.name,
            email: input.email,
            cpf: input.cpf,
        };
        let user = self
            .repo
            .update_identity(user_id, &identity)
            .await?
            .ok_or(ApiServiceError::UserNotFound)?;
        info!(user_id, "user updated");
        Ok(user)
    }
}

// ── DeleteUser ───────────────────────────────────────────────────────────────

pub struct DeleteUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> DeleteUserUseCase<R> {
    /// Deleting an unknown id succeeds without doing anything.
    pub async fn execute(&self, user_id: i64) -> Result<(), ApiServiceError> {
        let deleted = self.repo.delete(user_id).await?;
        if deleted {
            info!(user_id, "user deleted");
        }
        Ok(())
    }
}
