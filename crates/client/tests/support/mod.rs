//! In-process WebDriver remote end for hermetic client tests.
//!
//! Behavior is keyed off the CSS selector so each test picks the scenario
//! it needs: `#missing` never resolves, `#late` resolves after a
//! configurable number of attempts, `#hidden` resolves but reports itself
//! invisible, `#boom` answers with a non-retryable error, and `#rows`
//! matches one element for a configurable number of polls before going
//! empty. Every other selector resolves to an element whose id is the
//! selector with the leading `#` stripped.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use url::Url;

pub const SESSION_ID: &str = "stub-session";
/// base64 of the bytes `PNG`, served by the screenshot endpoint.
pub const SCREENSHOT_B64: &str = "UE5H";

#[derive(Default)]
pub struct StubState {
    /// Failed `#late` lookups before it starts resolving.
    pub element_appears_after: AtomicUsize,
    pub find_attempts: AtomicUsize,
    /// Polls for which `#rows` still matches one element.
    pub rows_present_for: AtomicUsize,
    pub elements_attempts: AtomicUsize,
    pub new_session_body: Mutex<Option<Value>>,
    pub current_url: Mutex<String>,
    pub clicks: AtomicUsize,
    pub keys: Mutex<Vec<String>>,
    pub sessions_deleted: AtomicUsize,
}

pub struct StubServer {
    pub endpoint: Url,
    pub state: Arc<StubState>,
}

/// Bind a stub remote end on an ephemeral port and serve it in the
/// background for the rest of the test.
pub async fn spawn() -> StubServer {
    let state = Arc::new(StubState::default());
    let app = Router::new()
        .route("/session", post(new_session))
        .route("/session/{id}", delete(delete_session))
        .route("/session/{id}/url", post(navigate).get(current_url))
        .route("/session/{id}/screenshot", get(screenshot))
        .route("/session/{id}/element", post(find_element))
        .route("/session/{id}/elements", post(find_elements))
        .route("/session/{id}/element/{eid}/click", post(click))
        .route("/session/{id}/element/{eid}/value", post(send_keys))
        .route("/session/{id}/element/{eid}/displayed", get(displayed))
        .with_state(Arc::clone(&state));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let endpoint = Url::parse(&format!("http://{}/", listener.local_addr().unwrap())).unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    StubServer { endpoint, state }
}

type Reply = (StatusCode, Json<Value>);

fn ok(value: Value) -> Reply {
    (StatusCode::OK, Json(json!({ "value": value })))
}

fn error(status: StatusCode, code: &str, message: &str) -> Reply {
    (
        status,
        Json(json!({
            "value": { "error": code, "message": message, "stacktrace": "" }
        })),
    )
}

fn element_ref(id: &str) -> Value {
    json!({ "element-6066-11e4-a52e-4f735466cecf": id })
}

fn selector_of(body: &Value) -> String {
    body["value"].as_str().unwrap_or_default().to_string()
}

async fn new_session(State(state): State<Arc<StubState>>, Json(body): Json<Value>) -> Reply {
    *state.new_session_body.lock().unwrap() = Some(body);
    ok(json!({ "sessionId": SESSION_ID, "capabilities": { "browserName": "chrome" } }))
}

async fn delete_session(State(state): State<Arc<StubState>>, Path(id): Path<String>) -> Reply {
    if id != SESSION_ID {
        return error(StatusCode::NOT_FOUND, "invalid session id", "no such session");
    }
    state.sessions_deleted.fetch_add(1, Ordering::SeqCst);
    ok(Value::Null)
}

async fn navigate(State(state): State<Arc<StubState>>, Json(body): Json<Value>) -> Reply {
    let url = body["url"].as_str().unwrap_or_default().to_string();
    *state.current_url.lock().unwrap() = url;
    ok(Value::Null)
}

async fn current_url(State(state): State<Arc<StubState>>) -> Reply {
    let url = state.current_url.lock().unwrap().clone();
    ok(Value::String(url))
}

async fn screenshot() -> Reply {
    ok(Value::String(SCREENSHOT_B64.into()))
}

async fn find_element(State(state): State<Arc<StubState>>, Json(body): Json<Value>) -> Reply {
    let selector = selector_of(&body);
    match selector.as_str() {
        "#missing" => error(
            StatusCode::NOT_FOUND,
            "no such element",
            "Unable to locate element",
        ),
        "#boom" => error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "unknown error",
            "the remote end fell over",
        ),
        "#late" => {
            let seen = state.find_attempts.fetch_add(1, Ordering::SeqCst);
            if seen < state.element_appears_after.load(Ordering::SeqCst) {
                error(
                    StatusCode::NOT_FOUND,
                    "no such element",
                    "Unable to locate element",
                )
            } else {
                ok(element_ref("late"))
            }
        }
        _ => ok(element_ref(selector.trim_start_matches('#'))),
    }
}

async fn find_elements(State(state): State<Arc<StubState>>, Json(body): Json<Value>) -> Reply {
    if selector_of(&body) == "#rows" {
        let seen = state.elements_attempts.fetch_add(1, Ordering::SeqCst);
        if seen < state.rows_present_for.load(Ordering::SeqCst) {
            return ok(json!([element_ref("row-0")]));
        }
        return ok(json!([]));
    }
    ok(json!([]))
}

async fn click(State(state): State<Arc<StubState>>, Path((_, eid)): Path<(String, String)>) -> Reply {
    state.clicks.fetch_add(1, Ordering::SeqCst);
    if eid == "go" {
        *state.current_url.lock().unwrap() = "http://stub.local/landed".into();
    }
    ok(Value::Null)
}

async fn send_keys(State(state): State<Arc<StubState>>, Json(body): Json<Value>) -> Reply {
    let text = body["text"].as_str().unwrap_or_default().to_string();
    state.keys.lock().unwrap().push(text);
    ok(Value::Null)
}

async fn displayed(Path((_, eid)): Path<(String, String)>) -> Reply {
    ok(Value::Bool(eid != "hidden"))
}
