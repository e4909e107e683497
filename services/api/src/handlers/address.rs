use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::types::{Address, AddressFields};
use crate::error::ApiServiceError;
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;
use crate::usecase::address::{
    CreateAddressUseCase, GetAddressUseCase, UpdateAddressInput, UpdateAddressUseCase,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressResponse {
    pub id: i64,
    pub user_id: i64,
    pub street: String,
    pub number: i32,
    pub complement: Option<String>,
    pub neighborhood: String,
    pub city_name: String,
    pub state: String,
    pub cep: String,
}

impl From<Address> for AddressResponse {
    fn from(address: Address) -> Self {
        Self {
            id: address.id,
            user_id: address.user_id,
            street: address.street,
            number: address.number,
            complement: address.complement,
            neighborhood: address.neighborhood,
            city_name: address.city_name,
            state: address.state,
            cep: address.cep,
        }
    }
}

// ── GET /users/{id}/address ──────────────────────────────────────────────────

/// Responds with `null` when the user has no address.
pub async fn get_address(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i64>,
) -> Result<Json<Option<AddressResponse>>, ApiServiceError> {
    let usecase = GetAddressUseCase {
        repo: state.address_repo(),
    };
    let address = usecase.execute(user_id).await?;
    Ok(Json(address.map(AddressResponse::from)))
}

// ── POST /users/{id}/address ─────────────────────────────────────────────────

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAddressRequest {
    #[validate(length(min = 1, max = 255))]
    pub street: String,
    pub number: i32,
    #[validate(length(max = 255))]
    pub complement: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub neighborhood: String,
    #[validate(length(min = 1, max = 100))]
    pub city_name: String,
    #[validate(length(min = 1, max = 100))]
    pub state: String,
    #[validate(length(min = 1, max = 20))]
    pub cep: String,
}

pub async fn create_address(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i64>,
    ApiJson(body): ApiJson<CreateAddressRequest>,
) -> Result<(StatusCode, Json<AddressResponse>), ApiServiceError> {
    body.validate()?;
    let usecase = CreateAddressUseCase {
        users: state.user_repo(),
        addresses: state.address_repo(),
    };
    let address = usecase
        .execute(
            user_id,
            AddressFields {
                street: body.street,
                number: body.number,
                complement: body.complement,
                neighborhood: body.neighborhood,
                city_name: body.city_name,
                state: body.state,
                cep: body.cep,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(address.into())))
}

// ── PUT /users/{id}/address ──────────────────────────────────────────────────

/// Only `street` and `cityName` are applied; other address fields in the
/// body are ignored.
#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAddressRequest {
    #[validate(length(min = 1, max = 255))]
    pub street: String,
    #[validate(length(min = 1, max = 100))]
    pub city_name: String,
}

pub async fn update_address(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i64>,
    ApiJson(body): ApiJson<UpdateAddressRequest>,
) -> Result<Json<AddressResponse>, ApiServiceError> {
    body.validate()?;
    let usecase = UpdateAddressUseCase {
        repo: state.address_repo(),
    };
    let address = usecase
        .execute(
            user_id,
            UpdateAddressInput {
                street: body.street,
                city_name: body.city_name,
            },
        )
        .await?;
    Ok(Json(address.into()))
}
