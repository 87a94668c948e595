mod common;

use reqwest::StatusCode;
use tokio::task::JoinSet;
use uuid::Uuid;

use common::spawn_app;
use sonargreet::routes::sonarqube::GREETING;

const EXPECTED_BODY: &str = "Hello, I'm cloud SonarQube!";

#[tokio::test]
async fn greeting_returns_fixed_text() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{address}/api/sonarqube"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/plain"), "got {content_type}");

    let cache_control = response
        .headers()
        .get(reqwest::header::CACHE_CONTROL)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    assert_eq!(cache_control.as_deref(), Some("public, max-age=3600"));

    assert_eq!(response.text().await.unwrap(), EXPECTED_BODY);
    assert_eq!(GREETING, EXPECTED_BODY);
}

#[tokio::test]
async fn repeated_requests_are_identical() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    for _ in 0..5 {
        let response = client
            .get(format!("{address}/api/sonarqube"))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.text().await.unwrap(), EXPECTED_BODY);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_requests_each_get_the_greeting() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let mut tasks = JoinSet::new();

    for _ in 0..100 {
        let client = client.clone();
        let url = format!("{address}/api/sonarqube");
        tasks.spawn(async move {
            let response = client.get(url).send().await.expect("request failed");
            let status = response.status();
            (status, response.text().await.unwrap())
        });
    }

    let mut completed = 0;
    while let Some(result) = tasks.join_next().await {
        let (status, body) = result.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, EXPECTED_BODY);
        completed += 1;
    }
    assert_eq!(completed, 100);
}

#[tokio::test]
async fn head_request_is_answered_without_body() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .head(format!("{address}/api/sonarqube"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.bytes().await.unwrap().is_empty());
}

#[tokio::test]
async fn query_string_is_ignored() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{address}/api/sonarqube?name=ignored"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), EXPECTED_BODY);
}

#[tokio::test]
async fn unknown_api_path_is_not_found() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{address}/api/unknown"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.text().await.unwrap(), "Not found: /api/unknown");
}

#[tokio::test]
async fn path_outside_api_is_not_found() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{address}/sonarqube"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn wrong_method_is_not_allowed() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{address}/api/sonarqube"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert!(
        response
            .headers()
            .get(reqwest::header::CACHE_CONTROL)
            .is_none(),
        "error responses must not be cacheable"
    );
}

#[tokio::test]
async fn each_response_carries_a_distinct_request_id() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let mut ids = Vec::new();
    for path in ["/api/sonarqube", "/api/sonarqube", "/api/unknown"] {
        let response = client
            .get(format!("{address}{path}"))
            .send()
            .await
            .expect("Failed to execute request");

        let id = response
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| Uuid::parse_str(v).ok())
            .expect("missing or malformed x-request-id");
        ids.push(id);
    }

    assert_ne!(ids[0], ids[1]);
    assert_ne!(ids[1], ids[2]);
    assert_ne!(ids[0], ids[2]);
}
