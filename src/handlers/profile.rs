use crate::error::{AppError, AppResult};
use crate::models::UserProfile;
use crate::response::ApiResponse;
use crate::services::profile::ProfileUpdate;
use crate::services::SharedProfile;
use axum::{response::IntoResponse, Extension, Json};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,
    #[validate(length(min = 1, max = 30))]
    pub phone: Option<String>,
    #[validate(length(max = 200))]
    pub address: Option<String>,
    /// One of the known villages
    pub village: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/profile",
    responses(
        (status = 200, description = "Current profile", body = UserProfile),
    ),
    tag = "profile"
)]
pub async fn get_profile(Extension(profile): Extension<SharedProfile>) -> impl IntoResponse {
    ApiResponse::ok(profile.read().await.profile().clone())
}

#[utoipa::path(
    put,
    path = "/api/v1/profile",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = UserProfile),
        (status = 400, description = "Validation error", body = AppError),
    ),
    tag = "profile"
)]
pub async fn update_profile(
    Extension(profile): Extension<SharedProfile>,
    Json(payload): Json<UpdateProfileRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;

    let updated = profile.write().await.update(ProfileUpdate {
        first_name: payload.first_name,
        last_name: payload.last_name,
        phone: payload.phone,
        address: payload.address,
        village: payload.village,
    })?;

    Ok(ApiResponse::with_message(updated, "Changes saved".to_string()))
}
