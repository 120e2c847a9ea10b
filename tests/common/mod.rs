#![allow(dead_code)]

use desas::services::{
    chat::ChatService, profile::ProfileService, report::ReportStore, shared_profile, shared_store,
    SharedReportStore,
};
use reqwest::Client;
use std::net::SocketAddr;
use std::sync::Once;
use std::time::Duration;

static INIT: Once = Once::new();

pub const CHAT_DELAY: Duration = Duration::from_millis(200);

fn init_env() {
    INIT.call_once(|| {
        dotenv::dotenv().ok();
    });
}

pub struct TestApp {
    pub addr: String,
    pub store: SharedReportStore,
    pub client: Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.addr, path)
    }
}

/// Spawn the app on a random port with an empty report store.
pub async fn spawn_app() -> TestApp {
    spawn_app_with(ReportStore::new()).await
}

pub async fn spawn_app_with(store: ReportStore) -> TestApp {
    init_env();

    let store = shared_store(store);
    let app = desas::routes::create_routes()
        .layer(axum::extract::Extension(store.clone()))
        .layer(axum::extract::Extension(shared_profile(
            ProfileService::default(),
        )))
        .layer(axum::extract::Extension(ChatService::new(CHAT_DELAY)));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .unwrap();
    });

    TestApp {
        addr: format!("http://{}", addr),
        store,
        client: Client::new(),
    }
}

/// Create a report through the API and return its id.
pub async fn create_test_report(
    app: &TestApp,
    title: &str,
    category: &str,
    severity: &str,
) -> String {
    let resp = app
        .client
        .post(app.url("/reports"))
        .json(&serde_json::json!({
            "title": title,
            "description": "desc",
            "location": "Zona Sur",
            "category": category,
            "severity": severity,
            "reporter_role": "Ciudadano"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200, "create report failed");
    let body: serde_json::Value = resp.json().await.unwrap();
    body["data"]["id"].as_str().unwrap().to_string()
}
