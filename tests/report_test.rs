mod common;

use serde_json::Value;

#[tokio::test]
async fn create_report_defaults() {
    let app = common::spawn_app().await;

    let resp = app
        .client
        .post(app.url("/reports"))
        .json(&serde_json::json!({
            "title": "Incendio Forestal",
            "description": "desc",
            "location": "Zona Sur",
            "category": "fire",
            "severity": "critical"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert!(body["success"].as_bool().unwrap());
    assert_eq!(body["data"]["status"], "active");
    assert_eq!(body["data"]["affected"], 0);
    assert_eq!(body["data"]["severity_priority"], 4);
    assert_eq!(body["data"]["image_ref"], "fire");
}

#[tokio::test]
async fn create_report_requires_text_fields() {
    let app = common::spawn_app().await;

    for (title, description, location) in [("", "d", "l"), ("t", "", "l"), ("t", "d", "")] {
        let resp = app
            .client
            .post(app.url("/reports"))
            .json(&serde_json::json!({
                "title": title,
                "description": description,
                "location": location,
                "category": "storm",
                "severity": "low"
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 400);
    }

    assert_eq!(app.store.read().await.len(), 0);
}

#[tokio::test]
async fn create_report_rejects_negative_affected() {
    let app = common::spawn_app().await;

    let resp = app
        .client
        .post(app.url("/reports"))
        .json(&serde_json::json!({
            "title": "t",
            "description": "d",
            "location": "l",
            "category": "flood",
            "severity": "high",
            "affected": -3
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    assert_eq!(app.store.read().await.len(), 0);
}

#[tokio::test]
async fn create_report_rejects_affected_past_u32() {
    let app = common::spawn_app().await;

    let resp = app
        .client
        .post(app.url("/reports"))
        .json(&serde_json::json!({
            "title": "t",
            "description": "d",
            "location": "l",
            "category": "flood",
            "severity": "high",
            "affected": 4294967296u64
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    assert_eq!(app.store.read().await.len(), 0);
}

#[tokio::test]
async fn list_newest_first() {
    let app = common::spawn_app().await;
    let a = common::create_test_report(&app, "A", "fire", "low").await;
    let b = common::create_test_report(&app, "B", "fire", "low").await;

    let resp = app.client.get(app.url("/reports")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"], b.as_str());
    assert_eq!(items[1]["id"], a.as_str());
    assert_eq!(body["data"]["total"], 2);
}

#[tokio::test]
async fn list_filters_by_category() {
    let app = common::spawn_app().await;
    common::create_test_report(&app, "f1", "fire", "low").await;
    common::create_test_report(&app, "s1", "storm", "low").await;
    common::create_test_report(&app, "f2", "fire", "high").await;
    common::create_test_report(&app, "q1", "earthquake", "high").await;

    let resp = app
        .client
        .get(app.url("/reports?category=fire"))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|r| r["category"] == "fire"));
}

#[tokio::test]
async fn list_sorts_by_severity() {
    let app = common::spawn_app().await;
    common::create_test_report(&app, "medium", "flood", "medium").await;
    common::create_test_report(&app, "critical", "flood", "critical").await;
    common::create_test_report(&app, "low", "flood", "low").await;

    let resp = app
        .client
        .get(app.url("/reports?sort=severity_desc"))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    let severities: Vec<&str> = body["data"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["severity"].as_str().unwrap())
        .collect();
    assert_eq!(severities, vec!["critical", "medium", "low"]);
}

#[tokio::test]
async fn search_matches_location() {
    let app = common::spawn_app().await;

    let resp = app
        .client
        .post(app.url("/reports"))
        .json(&serde_json::json!({
            "title": "Calle anegada",
            "description": "Agua hasta las rodillas",
            "location": "Avenida Inundación 123",
            "category": "flood",
            "severity": "high"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    common::create_test_report(&app, "Incendio", "fire", "high").await;

    let resp = app
        .client
        .get(app.url("/reports?q=inund"))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "Calle anegada");
}

#[tokio::test]
async fn empty_results_explain_why() {
    let app = common::spawn_app().await;

    let resp = app.client.get(app.url("/reports")).send().await.unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "No reports registered");

    common::create_test_report(&app, "x", "fire", "low").await;
    let resp = app
        .client
        .get(app.url("/reports?status=closed"))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["total"], 0);
    assert_eq!(body["message"], "No reports match the applied filters");
}

#[tokio::test]
async fn status_change_flow() {
    let app = common::spawn_app().await;
    let id = common::create_test_report(&app, "Incendio Forestal", "fire", "critical").await;

    let resp = app
        .client
        .put(app.url(&format!("/reports/{}/status", id)))
        .json(&serde_json::json!({ "status": "resolved" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["status"], "resolved");

    let resp = app
        .client
        .get(app.url("/reports?status=active"))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["total"], 0);

    let resp = app
        .client
        .get(app.url("/reports?status=resolved"))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["items"][0]["id"], id.as_str());
}

#[tokio::test]
async fn update_report_fields() {
    let app = common::spawn_app().await;
    let id = common::create_test_report(&app, "old", "fire", "low").await;

    let resp = app
        .client
        .put(app.url(&format!("/reports/{}", id)))
        .json(&serde_json::json!({
            "title": "new",
            "affected": 40,
            "tags": ["evacuación"]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["id"], id.as_str());
    assert_eq!(body["data"]["title"], "new");
    assert_eq!(body["data"]["location"], "Zona Sur");
    assert_eq!(body["data"]["affected"], 40);
    assert_eq!(body["data"]["tags"][0], "evacuación");
}

#[tokio::test]
async fn update_unknown_report_is_not_found() {
    let app = common::spawn_app().await;
    common::create_test_report(&app, "x", "fire", "low").await;

    let resp = app
        .client
        .put(app.url(&format!("/reports/{}", uuid::Uuid::new_v4())))
        .json(&serde_json::json!({ "title": "nope" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    assert_eq!(app.store.read().await.len(), 1);
}

#[tokio::test]
async fn delete_twice() {
    let app = common::spawn_app().await;
    let id = common::create_test_report(&app, "x", "fire", "low").await;
    common::create_test_report(&app, "y", "fire", "low").await;

    let resp = app
        .client
        .delete(app.url(&format!("/reports/{}", id)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(app.store.read().await.len(), 1);

    let resp = app
        .client
        .delete(app.url(&format!("/reports/{}", id)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let resp = app
        .client
        .get(app.url(&format!("/reports/{}", id)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn pagination() {
    let app = common::spawn_app().await;
    for i in 0..5 {
        common::create_test_report(&app, &format!("r{i}"), "storm", "low").await;
    }

    let resp = app
        .client
        .get(app.url("/reports?page=2&per_page=2"))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["total"], 5);
    assert_eq!(body["data"]["total_pages"], 3);
    let titles: Vec<&str> = body["data"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["r2", "r1"]);
}

#[tokio::test]
async fn pagination_out_of_range_params() {
    let app = common::spawn_app().await;
    for i in 0..3 {
        common::create_test_report(&app, &format!("r{i}"), "fire", "low").await;
    }

    let resp = app
        .client
        .get(app.url(&format!("/reports?page={}", u64::MAX)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["total"], 3);
    assert!(body["data"]["items"].as_array().unwrap().is_empty());

    let resp = app
        .client
        .get(app.url("/reports?per_page=0"))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["per_page"], 1);
    assert_eq!(body["data"]["total_pages"], 3);
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn health_reports_store_size() {
    let app = common::spawn_app_with(desas::ReportStore::with_sample_data()).await;

    let resp = app
        .client
        .get(format!("{}/", app.addr))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["reports"], 3);
}
