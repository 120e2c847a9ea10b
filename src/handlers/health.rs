use crate::services::SharedReportStore;
use axum::{response::IntoResponse, Extension, Json};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Health check successful", body = serde_json::Value)
    )
)]
pub async fn health_check(Extension(store): Extension<SharedReportStore>) -> impl IntoResponse {
    let reports = store.read().await.len();

    Json(json!({
        "status": "ok",
        "service": "Emergency Reports API",
        "version": env!("CARGO_PKG_VERSION"),
        "reports": reports,
    }))
}
