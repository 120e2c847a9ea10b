use crate::handlers;
use axum::{routing, Router};

pub fn create_routes() -> Router {
    Router::new()
        .route("/", routing::get(handlers::health::health_check))
        .nest("/api/v1", api_routes())
}

fn api_routes() -> Router {
    Router::new()
        // Reports
        .route(
            "/reports",
            routing::get(handlers::report::list_reports).post(handlers::report::create_report),
        )
        .route(
            "/reports/{id}",
            routing::get(handlers::report::get_report)
                .put(handlers::report::update_report)
                .delete(handlers::report::delete_report),
        )
        .route(
            "/reports/{id}/status",
            routing::put(handlers::report::set_report_status),
        )
        // Chat
        .route(
            "/chat/messages",
            routing::get(handlers::chat::list_messages).post(handlers::chat::send_message),
        )
        // Profile
        .route(
            "/profile",
            routing::get(handlers::profile::get_profile).put(handlers::profile::update_profile),
        )
}
