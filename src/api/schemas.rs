//! Envelope shapes referenced by the `#[utoipa::path]` responses of every handler.
//! The runtime envelope itself is built by `shared::api::ApiResponse`.

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

/// `code` is SCREAMING_SNAKE and stable across releases; `message` is for humans.
#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    #[schema(example = "REQUEST_ALREADY_RESOLVED")]
    pub code: String,

    #[schema(example = "Friend request has already been resolved")]
    pub message: String,
}
