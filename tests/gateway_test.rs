use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use httpmock::prelude::*;
use site_relay::{build_router, AppState, GatewayConfig};
use tower::ServiceExt;

fn router_with(config: GatewayConfig) -> Router {
    build_router(AppState::from_config(config))
}

fn default_router() -> Router {
    router_with(GatewayConfig::default())
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_returns_ok() {
    let response = default_router()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!({"status": "ok"}));
}

#[tokio::test]
async fn test_options_preflight_returns_200_with_cors_headers() {
    for uri in [
        "/create-checkout",
        "/get-all-bugs",
        "/save-beta-signup",
        "/send-course-welcome-email",
    ] {
        let response = default_router()
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri(uri)
                    .header(header::ORIGIN, "https://site.example")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "preflight for {}", uri);
        assert!(
            response
                .headers()
                .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            "missing CORS header for {}",
            uri
        );

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(bytes.is_empty(), "preflight body for {} not empty", uri);
    }
}

#[tokio::test]
async fn test_bare_options_without_preflight_headers_returns_200() {
    // Browsers send the preflight headers, but a plain OPTIONS must not 405.
    let response = default_router()
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/save-beta-signup")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn test_wrong_method_on_post_route_returns_405() {
    for uri in [
        "/create-checkout",
        "/save-beta-signup",
        "/send-course-welcome-email",
    ] {
        let response = default_router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(
            response.status(),
            StatusCode::METHOD_NOT_ALLOWED,
            "GET {}",
            uri
        );
    }
}

#[tokio::test]
async fn test_signup_missing_email_returns_400() {
    let response = default_router()
        .oneshot(post_json("/save-beta-signup", serde_json::json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("email"));
}

#[tokio::test]
async fn test_signup_ack_matches_contract() {
    let response = default_router()
        .oneshot(post_json(
            "/save-beta-signup",
            serde_json::json!({"email": "a@b.com"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({
            "success": true,
            "message": "Welcome to the beta program!",
            "email": "a@b.com",
        })
    );
}

#[tokio::test]
async fn test_enrollment_missing_email_returns_400() {
    let response = default_router()
        .oneshot(post_json(
            "/send-course-welcome-email",
            serde_json::json!({"courseName": "Rust 101"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_enrollment_ack_echoes_email() {
    let response = default_router()
        .oneshot(post_json(
            "/send-course-welcome-email",
            serde_json::json!({"email": "student@example.com", "courseName": "Rust 101"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["email"], "student@example.com");
}

#[tokio::test]
async fn test_checkout_without_secret_key_returns_500() {
    // No payment secret configured: input does not matter.
    let response = default_router()
        .oneshot(post_json(
            "/create-checkout",
            serde_json::json!({"priceId": "price_pro", "email": "a@b.com"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Internal server error");
}

#[tokio::test]
async fn test_checkout_relays_provider_session() {
    let server = MockServer::start();
    let session_mock = server.mock(|when, then| {
        when.method(POST).path("/v1/checkout/sessions");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "id": "cs_test_123",
                "url": "https://checkout.example/pay/cs_test_123",
            }));
    });

    let config = GatewayConfig {
        payment_api_base: server.base_url(),
        payment_secret_key: Some("sk_test_abc".to_string()),
        ..Default::default()
    };

    let response = router_with(config)
        .oneshot(post_json(
            "/create-checkout",
            serde_json::json!({"customerEmail": "a@b.com"}),
        ))
        .await
        .unwrap();

    session_mock.assert();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({
            "sessionId": "cs_test_123",
            "url": "https://checkout.example/pay/cs_test_123",
        })
    );
}

#[tokio::test]
async fn test_checkout_provider_failure_returns_500() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/checkout/sessions");
        then.status(400)
            .json_body(serde_json::json!({"error": {"message": "no such price"}}));
    });

    let config = GatewayConfig {
        payment_api_base: server.base_url(),
        payment_secret_key: Some("sk_test_abc".to_string()),
        ..Default::default()
    };

    let response = router_with(config)
        .oneshot(post_json("/create-checkout", serde_json::json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_bugs_missing_repo_returns_empty_list() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/repos/example/site/issues");
        then.status(404)
            .json_body(serde_json::json!({"message": "Not Found"}));
    });

    let config = GatewayConfig {
        tracker_api_base: server.base_url(),
        ..Default::default()
    };

    let response = router_with(config)
        .oneshot(
            Request::builder()
                .uri("/get-all-bugs")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["bugs"], serde_json::json!([]));
    assert_eq!(body["total"], 0);
    assert_eq!(body["open"], 0);
    assert_eq!(body["closed"], 0);
}

#[tokio::test]
async fn test_bugs_upstream_failure_returns_500_with_empty_list() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/repos/example/site/issues");
        then.status(500);
    });

    let config = GatewayConfig {
        tracker_api_base: server.base_url(),
        ..Default::default()
    };

    let response = router_with(config)
        .oneshot(
            Request::builder()
                .uri("/get-all-bugs")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["bugs"], serde_json::json!([]));
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_bugs_listing_is_reshaped_and_counted() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/repos/example/site/issues");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {
                    "number": 7,
                    "title": "Checkout button dead",
                    "body": "Clicking does nothing",
                    "state": "open",
                    "labels": [{"name": "bug"}, {"name": "priority: high"}],
                    "created_at": "2025-01-10T08:00:00Z",
                    "updated_at": "2025-01-11T09:30:00Z",
                    "html_url": "https://tracker.example/example/site/issues/7",
                },
                {
                    "number": 8,
                    "title": "Typo on landing page",
                    "body": null,
                    "state": "closed",
                    "labels": [{"name": "bug"}],
                    "created_at": "2025-01-12T08:00:00Z",
                    "updated_at": "2025-01-13T09:30:00Z",
                    "html_url": "https://tracker.example/example/site/issues/8",
                },
                {
                    "number": 9,
                    "title": "Fix checkout button",
                    "state": "open",
                    "labels": [{"name": "bug"}],
                    "created_at": "2025-01-14T08:00:00Z",
                    "updated_at": "2025-01-14T09:30:00Z",
                    "html_url": "https://tracker.example/example/site/pull/9",
                    "pull_request": {"url": "https://tracker.example/pulls/9"},
                },
            ]));
    });

    let config = GatewayConfig {
        tracker_api_base: server.base_url(),
        ..Default::default()
    };

    let response = router_with(config)
        .oneshot(
            Request::builder()
                .uri("/get-all-bugs")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["total"], 2);
    assert_eq!(body["open"], 1);
    assert_eq!(body["closed"], 1);
    assert_eq!(body["bugs"][0]["priority"], "high");
    assert_eq!(body["bugs"][0]["status"], "open");
    assert_eq!(body["bugs"][1]["description"], "");
    assert!(body["timestamp"].is_string());
}
