//! End-to-end analysis flow against an in-process stub service
//!
//! Drives the real reqwest client, the TEA state machine, and the headless
//! commands against an axum server that answers from fixtures.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use tokio::sync::mpsc;

use threatlens::headless;
use threatlens_app::message::Message;
use threatlens_app::process::process_message;
use threatlens_app::url_input::UrlInput;
use threatlens_app::{AppState, InputKey, Route, Screen};
use threatlens_client::{parse_predict_response, AnalysisService, HttpAnalysisClient};

const HIGH_RISK: &str = include_str!("fixtures/predict_responses/high_risk.json");
const SAFE_MINIMAL: &str = include_str!("fixtures/predict_responses/safe_minimal.json");
const MISSING_VERDICT: &str = include_str!("fixtures/predict_responses/missing_verdict.json");

/// Replies the stub hands out, in order; the last one repeats
#[derive(Clone)]
struct Stub {
    replies: Arc<Mutex<Vec<(StatusCode, &'static str)>>>,
    received: Arc<Mutex<Vec<serde_json::Value>>>,
}

impl Stub {
    fn new(replies: Vec<(StatusCode, &'static str)>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(replies)),
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn received(&self) -> Vec<serde_json::Value> {
        self.received.lock().unwrap().clone()
    }
}

async fn predict(State(stub): State<Stub>, Json(body): Json<serde_json::Value>) -> impl IntoResponse {
    stub.received.lock().unwrap().push(body);
    let mut replies = stub.replies.lock().unwrap();
    let reply = if replies.len() > 1 {
        replies.remove(0)
    } else {
        replies[0]
    };
    (reply.0, reply.1)
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "message": "Backend is running" }))
}

async fn spawn_stub(stub: Stub) -> HttpAnalysisClient {
    let app = Router::new()
        .route("/predict", post(predict))
        .route("/test", get(health))
        .with_state(stub);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    HttpAnalysisClient::new(&format!("http://{addr}"), Some(Duration::from_secs(5))).unwrap()
}

/// Submit whatever is in the detector input and apply the service's answer
async fn submit_and_settle(state: &mut AppState, client: &HttpAnalysisClient) {
    let (tx, mut rx) = mpsc::channel(8);
    process_message(state, Message::Key(InputKey::Enter), &tx, client);
    assert!(state.detector.loading);

    let reply = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("service did not answer")
        .expect("channel closed");
    process_message(state, reply, &tx, client);
}

fn detector(url: &str) -> AppState {
    let mut state = AppState::new();
    state.navigate(Route::Detector);
    state.detector.input = UrlInput::with_value(url);
    state
}

#[test]
fn test_fixtures_parse() {
    let verdict = parse_predict_response(HIGH_RISK.as_bytes()).unwrap();
    assert_eq!(verdict.verdict, "🛑 HIGH RISK");
    assert_eq!(verdict.http_status.unwrap().to_string(), "N/A");

    let verdict = parse_predict_response(SAFE_MINIMAL.as_bytes()).unwrap();
    assert!(verdict.reasons.is_none());

    let err = parse_predict_response(MISSING_VERDICT.as_bytes()).unwrap_err();
    assert!(err.is_malformed());
}

#[tokio::test]
async fn test_submit_displays_verdict() {
    let stub = Stub::new(vec![(StatusCode::OK, SAFE_MINIMAL)]);
    let client = spawn_stub(stub.clone()).await;
    let mut state = detector("https://example.com");

    submit_and_settle(&mut state, &client).await;

    assert!(state.detector.showing_result);
    let verdict = state.detector.verdict.as_ref().unwrap();
    assert_eq!(verdict.verdict, "safe");
    assert_eq!(verdict.probability.to_string(), "0.12");
    assert_eq!(verdict.features_summary(), "1/10");

    assert_eq!(
        stub.received(),
        vec![serde_json::json!({ "url": "https://example.com" })]
    );
}

#[tokio::test]
async fn test_server_error_then_retry() {
    let stub = Stub::new(vec![
        (StatusCode::INTERNAL_SERVER_ERROR, r#"{"error":"model crashed"}"#),
        (StatusCode::OK, HIGH_RISK),
    ]);
    let client = spawn_stub(stub.clone()).await;
    let mut state = detector("http://paypa1-secure-login.xyz/verify");

    submit_and_settle(&mut state, &client).await;
    assert!(state
        .detector
        .error
        .as_deref()
        .unwrap()
        .contains("Failed to connect to the server"));
    assert!(state.detector.verdict.is_none());

    // input survives the failure, so a second Enter resubmits it
    submit_and_settle(&mut state, &client).await;
    assert!(state.detector.error.is_none());
    assert_eq!(
        state.detector.verdict.as_ref().unwrap().reasons.as_deref(),
        Some("Missing HTTPS, Phishing-related keywords found")
    );
    assert_eq!(stub.received().len(), 2);
}

#[tokio::test]
async fn test_malformed_response_is_reported() {
    let stub = Stub::new(vec![(StatusCode::OK, MISSING_VERDICT)]);
    let client = spawn_stub(stub).await;
    let mut state = detector("https://example.com");

    submit_and_settle(&mut state, &client).await;

    assert!(state
        .detector
        .error
        .as_deref()
        .unwrap()
        .starts_with("Malformed response from the server"));
    assert!(!state.detector.showing_result);
}

#[tokio::test]
async fn test_verdict_hands_off_to_result_view() {
    let stub = Stub::new(vec![(StatusCode::OK, HIGH_RISK)]);
    let client = spawn_stub(stub).await;
    let mut state = detector("http://paypa1-secure-login.xyz/verify");
    submit_and_settle(&mut state, &client).await;

    let (tx, _rx) = mpsc::channel(1);
    process_message(&mut state, Message::Key(InputKey::Char('o')), &tx, &client);

    match &state.screen {
        Screen::Result(view) => {
            assert_eq!(view.verdict.as_ref().unwrap().domain, "paypa1-secure-login.xyz")
        }
        other => panic!("expected result screen, got {:?}", other),
    }

    // leaving and coming back finds nothing
    process_message(&mut state, Message::Key(InputKey::Char('h')), &tx, &client);
    process_message(&mut state, Message::OpenResultView { verdict: None }, &tx, &client);
    assert!(matches!(&state.screen, Screen::Result(view) if !view.has_result()));
}

#[tokio::test]
async fn test_headless_check_and_health() {
    let stub = Stub::new(vec![(StatusCode::OK, HIGH_RISK)]);
    let client = spawn_stub(stub).await;

    let mut out = Vec::new();
    headless::run_check(&client, "http://paypa1-secure-login.xyz/verify", &mut out)
        .await
        .unwrap();
    let printed: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let fixture: serde_json::Value = serde_json::from_str(HIGH_RISK).unwrap();
    assert_eq!(printed, fixture);

    assert_eq!(client.health().await.unwrap(), "Backend is running");
}
