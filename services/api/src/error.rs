use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sea_orm::{DbErr, SqlErr, TransactionError};

/// API service error variants.
#[derive(Debug, thiserror::Error)]
pub enum ApiServiceError {
    #[error("user not found")]
    UserNotFound,
    #[error("address not found")]
    AddressNotFound,
    #[error("telephone not found")]
    TelephoneNotFound,
    #[error("route not found")]
    RouteNotFound,
    #[error("telephone does not belong to user")]
    TelephoneNotOwned,
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
    #[error("invalid payload: {0}")]
    Validation(String),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ApiServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::AddressNotFound => "ADDRESS_NOT_FOUND",
            Self::TelephoneNotFound => "TELEPHONE_NOT_FOUND",
            Self::RouteNotFound => "ROUTE_NOT_FOUND",
            Self::TelephoneNotOwned => "TELEPHONE_NOT_OWNED",
            Self::ConstraintViolation(_) => "CONSTRAINT_VIOLATION",
            Self::Validation(_) => "VALIDATION",
            Self::Internal(_) => "INTERNAL",
        }
    }

    /// Classify a store error. Unique and foreign-key violations surface as
    /// [`ApiServiceError::ConstraintViolation`]; everything else is internal.
    pub fn from_db(err: DbErr, context: &'static str) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail))
            | Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                Self::ConstraintViolation(detail)
            }
            _ => Self::Internal(anyhow::Error::new(err).context(context)),
        }
    }

    /// Same as [`ApiServiceError::from_db`] for errors coming out of
    /// `TransactionTrait::transaction`.
    pub fn from_txn(err: TransactionError<Self>, context: &'static str) -> Self {
        match err {
            TransactionError::Connection(db_err) => Self::from_db(db_err, context),
            TransactionError::Transaction(err) => err,
        }
    }
}

impl IntoResponse for ApiServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::UserNotFound
            | Self::AddressNotFound
            | Self::TelephoneNotFound
            | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::TelephoneNotOwned => StatusCode::FORBIDDEN,
            Self::ConstraintViolation(_) => StatusCode::CONFLICT,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for ApiServiceError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}
