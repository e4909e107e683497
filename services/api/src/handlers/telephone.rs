use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::types::Telephone;
use crate::error::ApiServiceError;
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;
use crate::usecase::telephone::{
    AddTelephoneInput, AddTelephoneUseCase, DeleteTelephoneUseCase, ListTelephonesUseCase,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TelephoneResponse {
    pub id: i64,
    pub user_id: i64,
    pub phone_number: String,
}

impl From<Telephone> for TelephoneResponse {
    fn from(telephone: Telephone) -> Self {
        Self {
            id: telephone.id,
            user_id: telephone.user_id,
            phone_number: telephone.phone_number,
        }
    }
}

// ── GET /users/{id}/phones ───────────────────────────────────────────────────

pub async fn list_telephones(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i64>,
) -> Result<Json<Vec<TelephoneResponse>>, ApiServiceError> {
    let usecase = ListTelephonesUseCase {
        repo: state.telephone_repo(),
    };
    let telephones = usecase.execute(user_id).await?;
    Ok(Json(
        telephones.into_iter().map(TelephoneResponse::from).collect(),
    ))
}

// ── POST /users/{id}/phones ──────────────────────────────────────────────────

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddTelephoneRequest {
    #[validate(length(min = 1, max = 50))]
    pub phone_number: String,
}

pub async fn add_telephone(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i64>,
    ApiJson(body): ApiJson<AddTelephoneRequest>,
) -> Result<(StatusCode, Json<TelephoneResponse>), ApiServiceError> {
    body.validate()?;
    let usecase = AddTelephoneUseCase {
        users: state.user_repo(),
        telephones: state.telephone_repo(),
    };
    let telephone = usecase
        .execute(
            user_id,
            AddTelephoneInput {
                phone_number: body.phone_number,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(telephone.into())))
}

// ── DELETE /users/{id}/phones/{phone_id} ─────────────────────────────────────

pub async fn delete_telephone(
    State(state): State<AppState>,
    ApiPath((user_id, telephone_id)): ApiPath<(i64, i64)>,
) -> Result<StatusCode, ApiServiceError> {
    let usecase = DeleteTelephoneUseCase {
        repo: state.telephone_repo(),
    };
    usecase.execute(user_id, telephone_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
