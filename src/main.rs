use axum::{extract::Extension, Router};
use desas::config::{app::AppConfig, server::ServerConfig};
use desas::services::{
    chat::ChatService, profile::ProfileService, report::ReportStore, shared_profile, shared_store,
};
use desas::routes;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        desas::handlers::health::health_check,
        // Report routes
        desas::handlers::report::list_reports,
        desas::handlers::report::get_report,
        desas::handlers::report::create_report,
        desas::handlers::report::update_report,
        desas::handlers::report::set_report_status,
        desas::handlers::report::delete_report,
        // Chat routes
        desas::handlers::chat::list_messages,
        desas::handlers::chat::send_message,
        // Profile routes
        desas::handlers::profile::get_profile,
        desas::handlers::profile::update_profile,
    ),
    components(
        schemas(
            desas::response::ApiResponse<serde_json::Value>,
            desas::response::PaginatedResponse<serde_json::Value>,
            desas::error::AppError,
            // Reports
            desas::models::Category,
            desas::models::Severity,
            desas::models::Status,
            desas::services::report::SortKey,
            desas::handlers::report::ReportResponse,
            desas::handlers::report::CreateReportRequest,
            desas::handlers::report::UpdateReportRequest,
            desas::handlers::report::SetStatusRequest,
            // Chat
            desas::models::ChatMessage,
            desas::handlers::chat::SendMessageRequest,
            // Profile
            desas::models::UserProfile,
            desas::handlers::profile::UpdateProfileRequest,
        )
    ),
    tags(
        (name = "reports", description = "Emergency report operations"),
        (name = "chat", description = "Scripted assistant conversation"),
        (name = "profile", description = "User profile operations"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "desas=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Fail fast on malformed configuration
    let server_config = ServerConfig::from_env()?;
    let app_config = AppConfig::from_env();

    tracing::info!("Starting Emergency Reports API v{}...", env!("CARGO_PKG_VERSION"));

    let store = if app_config.seed_sample_data {
        ReportStore::with_sample_data()
    } else {
        ReportStore::new()
    };
    tracing::info!("Report store ready with {} reports", store.len());

    let chat = ChatService::new(app_config.chat_reply_delay);
    tracing::info!(
        "Chat replies delayed by {} ms",
        app_config.chat_reply_delay.as_millis()
    );

    let app = create_app(&server_config)
        .layer(Extension(shared_store(store)))
        .layer(Extension(shared_profile(ProfileService::default())))
        .layer(Extension(chat));

    let addr = server_config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server shut down gracefully");
    Ok(())
}

fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    use axum::http::{header, HeaderValue, Method};

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE]);

    match &config.cors_origins {
        None => cors.allow_origin(tower_http::cors::Any),
        Some(origins) => {
            let origins: Vec<HeaderValue> =
                origins.iter().filter_map(|s| s.parse().ok()).collect();
            cors.allow_origin(origins)
        }
    }
}

fn create_app(config: &ServerConfig) -> Router {
    Router::new()
        .merge(routes::create_routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(config))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install CTRL+C signal handler: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, gracefully shutting down...");
}
