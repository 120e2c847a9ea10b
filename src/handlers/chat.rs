use crate::error::AppResult;
use crate::models::ChatMessage;
use crate::response::ApiResponse;
use crate::services::chat::ChatService;
use axum::{response::IntoResponse, Extension, Json};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SendMessageRequest {
    /// Message text (1-1000 characters)
    #[validate(length(min = 1, max = 1000))]
    pub text: String,
    /// Category label the message refers to, e.g. "Fire"
    #[validate(length(max = 50))]
    pub category: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/chat/messages",
    responses(
        (status = 200, description = "Conversation so far", body = Vec<ChatMessage>),
    ),
    tag = "chat"
)]
pub async fn list_messages(Extension(chat): Extension<ChatService>) -> impl IntoResponse {
    ApiResponse::ok(chat.messages().await)
}

#[utoipa::path(
    post,
    path = "/api/v1/chat/messages",
    request_body = SendMessageRequest,
    responses(
        (status = 200, description = "Message accepted; the reply follows after a delay", body = ChatMessage),
        (status = 400, description = "Validation error", body = crate::error::AppError),
    ),
    tag = "chat"
)]
pub async fn send_message(
    Extension(chat): Extension<ChatService>,
    Json(payload): Json<SendMessageRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;

    let message = chat
        .send(&payload.text, payload.category.as_deref())
        .await?;
    Ok(ApiResponse::ok(message))
}
