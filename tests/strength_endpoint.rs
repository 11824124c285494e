//! Integration tests for the HTTP strength client.
//!
//! A small actix-web app stands in for the remote evaluator on an ephemeral
//! port, so these tests cover the real request/response path:
//! - JSON request body and content type
//! - Successful responses shown verbatim
//! - Non-2xx statuses, malformed bodies and unreachable hosts

use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use serde_json::{json, Value};

use passpass::strength::{
    CheckOutcome, HttpEvaluator, StrengthCheckError, StrengthChecker, StrengthEvaluator,
};
use passpass::core::config::Config;
use passpass::StrengthResult;

// ============================================================================
// Mock evaluator
// ============================================================================

#[derive(Clone)]
struct MockState {
    hits: Arc<AtomicUsize>,
}

// Mirrors the real service's contract: strong passwords pass, "pwned" is breached
async fn check(req: HttpRequest, body: web::Bytes, state: web::Data<MockState>) -> HttpResponse {
    state.hits.fetch_add(1, Ordering::SeqCst);

    let content_type = req
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if !content_type.starts_with("application/json") {
        return HttpResponse::UnsupportedMediaType().finish();
    }

    let payload: Value = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(_) => return HttpResponse::BadRequest().finish(),
    };
    let password = match payload.get("password").and_then(Value::as_str) {
        Some(password) => password.to_string(),
        None => return HttpResponse::UnprocessableEntity().finish(),
    };

    if password == "pwned" {
        return HttpResponse::Ok().json(json!({
            "strength_score": 1,
            "strength_category": "Weak",
            "is_breached": true,
            "suggestions": [
                "This password has been found in known data breaches. DO NOT use it.",
                "Use at least 8 characters."
            ]
        }));
    }

    HttpResponse::Ok().json(json!({
        "strength_score": 4,
        "strength_category": "Strong",
        "is_breached": false,
        "suggestions": []
    }))
}

async fn server_error() -> HttpResponse {
    HttpResponse::InternalServerError().json(json!({ "detail": "boom" }))
}

async fn not_json() -> HttpResponse {
    HttpResponse::Ok().content_type("text/html").body("<h1>hello</h1>")
}

async fn wrong_shape() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "strength_score": "four",
        "strength_category": "Strong",
        "is_breached": false,
        "suggestions": []
    }))
}

async fn out_of_range() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "strength_score": 7,
        "strength_category": "Excellent",
        "is_breached": false,
        "suggestions": []
    }))
}

// Answers correctly, but only after any sane client timeout
async fn slow() -> HttpResponse {
    actix_web::rt::time::sleep(Duration::from_secs(3)).await;
    HttpResponse::Ok().json(json!({
        "strength_score": 4,
        "strength_category": "Strong",
        "is_breached": false,
        "suggestions": []
    }))
}

struct MockServer {
    base: String,
    hits: Arc<AtomicUsize>,
}

impl MockServer {
    fn start() -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let state = MockState { hits: Arc::clone(&hits) };

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();

        let server = HttpServer::new(move || {
            App::new()
                .app_data(web::Data::new(state.clone()))
                .route("/check", web::post().to(check))
                .route("/broken", web::post().to(server_error))
                .route("/html", web::post().to(not_json))
                .route("/wrong-shape", web::post().to(wrong_shape))
                .route("/excellent", web::post().to(out_of_range))
                .route("/slow", web::post().to(slow))
        })
        .workers(1)
        .listen(listener)
        .unwrap()
        .run();

        actix_web::rt::spawn(server);

        Self {
            base: format!("http://127.0.0.1:{}", port),
            hits,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

fn closed_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/check", port)
}

// ============================================================================
// HttpEvaluator
// ============================================================================

#[actix_web::test]
async fn test_success_response_is_parsed() {
    let server = MockServer::start();
    let evaluator = HttpEvaluator::new(server.url("/check"));

    let result = evaluator.evaluate("Tr0ub4dor&3").await.unwrap();
    assert_eq!(
        result,
        StrengthResult {
            strength_score: 4,
            strength_category: "Strong".to_string(),
            is_breached: false,
            suggestions: vec![],
        }
    );
    assert_eq!(server.hits(), 1);
}

#[actix_web::test]
async fn test_breach_and_suggestion_order_preserved() {
    let server = MockServer::start();
    let evaluator = HttpEvaluator::new(server.url("/check"));

    let result = evaluator.evaluate("pwned").await.unwrap();
    assert!(result.is_breached);
    assert_eq!(result.strength_category, "Weak");
    assert_eq!(result.suggestions.len(), 2);
    assert!(result.suggestions[0].contains("data breaches"));
}

#[actix_web::test]
async fn test_non_success_status_is_an_error() {
    let server = MockServer::start();
    let evaluator = HttpEvaluator::new(server.url("/broken"));

    match evaluator.evaluate("anything").await {
        Err(StrengthCheckError::Status { status, body }) => {
            assert_eq!(status, 500);
            assert!(body.contains("boom"));
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[actix_web::test]
async fn test_unknown_route_is_an_error() {
    let server = MockServer::start();
    let evaluator = HttpEvaluator::new(server.url("/missing"));

    assert!(matches!(
        evaluator.evaluate("anything").await,
        Err(StrengthCheckError::Status { status: 404, .. })
    ));
}

#[actix_web::test]
async fn test_malformed_body_is_an_error() {
    let server = MockServer::start();

    let html = HttpEvaluator::new(server.url("/html"));
    assert!(matches!(
        html.evaluate("anything").await,
        Err(StrengthCheckError::MalformedResponse(_))
    ));

    let wrong = HttpEvaluator::new(server.url("/wrong-shape"));
    assert!(matches!(
        wrong.evaluate("anything").await,
        Err(StrengthCheckError::MalformedResponse(_))
    ));
}

#[actix_web::test]
async fn test_unreachable_host_is_transport_error() {
    let evaluator = HttpEvaluator::new(closed_endpoint());
    assert!(matches!(
        evaluator.evaluate("anything").await,
        Err(StrengthCheckError::Transport(_))
    ));
}

#[actix_web::test]
async fn test_configured_timeout_is_transport_error() {
    let server = MockServer::start();
    let config = Config {
        strength_endpoint: server.url("/slow"),
        check_timeout: Some(Duration::from_secs(1)),
        ..Config::default()
    };
    let evaluator = HttpEvaluator::from_config(&config).unwrap();
    assert_eq!(evaluator.endpoint(), server.url("/slow"));

    match evaluator.evaluate("anything").await {
        Err(StrengthCheckError::Transport(e)) => assert!(e.is_timeout()),
        other => panic!("expected timeout, got {:?}", other),
    }
}

// ============================================================================
// StrengthChecker over HTTP
// ============================================================================

#[actix_web::test]
async fn test_checker_shows_strong_result_at_eighty_percent() {
    let server = MockServer::start();
    let checker = StrengthChecker::new(HttpEvaluator::new(server.url("/check")));

    let outcome = checker.check_strength("Tr0ub4dor&3").await;
    let result = match outcome {
        CheckOutcome::Completed(result) => result,
        other => panic!("unexpected outcome {:?}", other),
    };
    assert_eq!(result.strength_category, "Strong");
    assert!((result.fill_percent() - 80.0).abs() < 1e-9);
    assert_eq!(checker.result(), Some(result));
}

#[actix_web::test]
async fn test_checker_empty_password_sends_nothing() {
    let server = MockServer::start();
    let checker = StrengthChecker::new(HttpEvaluator::new(server.url("/check")));

    assert_eq!(checker.check_strength("").await, CheckOutcome::Skipped);
    assert_eq!(server.hits(), 0);
    assert_eq!(checker.result(), None);
}

#[actix_web::test]
async fn test_checker_failures_render_placeholder() {
    let server = MockServer::start();

    for path in ["/broken", "/html", "/wrong-shape"] {
        let checker = StrengthChecker::new(HttpEvaluator::new(server.url(path)));
        checker.check_strength("anything").await;
        assert_eq!(checker.result(), Some(StrengthResult::unreachable()), "path {}", path);
    }

    let offline = StrengthChecker::new(HttpEvaluator::new(closed_endpoint()));
    offline.check_strength("anything").await;
    assert_eq!(offline.result(), Some(StrengthResult::unreachable()));
}

#[actix_web::test]
async fn test_checker_keeps_out_of_range_score() {
    let server = MockServer::start();
    let checker = StrengthChecker::new(HttpEvaluator::new(server.url("/excellent")));

    checker.check_strength("anything").await;
    let result = checker.result().unwrap();
    assert_eq!(result.strength_score, 7);
    assert!(result.fill_percent() > 100.0);
    assert_eq!(result.style_class(), "excellent");
}

#[actix_web::test]
async fn test_checker_timeout_renders_placeholder_and_clears_pending() {
    let server = MockServer::start();
    let config = Config {
        strength_endpoint: server.url("/slow"),
        check_timeout: Some(Duration::from_secs(1)),
        ..Config::default()
    };
    let checker = StrengthChecker::new(HttpEvaluator::from_config(&config).unwrap());

    assert_eq!(
        checker.check_strength("anything").await,
        CheckOutcome::Completed(StrengthResult::unreachable())
    );
    assert_eq!(checker.result(), Some(StrengthResult::unreachable()));
    assert!(!checker.is_pending());
    assert!(checker.can_check());
}
