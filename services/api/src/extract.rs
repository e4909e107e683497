use axum::extract::{FromRequest, FromRequestParts};
use axum::extract::rejection::{JsonRejection, PathRejection};

use crate::error::ApiServiceError;

/// `axum::Json` whose rejections are reported as [`ApiServiceError::Validation`].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiServiceError))]
pub struct ApiJson<T>(pub T);

/// `axum::extract::Path` whose rejections are reported as
/// [`ApiServiceError::Validation`].
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiServiceError))]
pub struct ApiPath<T>(pub T);

impl From<JsonRejection> for ApiServiceError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for ApiServiceError {
    fn from(rejection: PathRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}
