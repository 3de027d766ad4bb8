//! In-process stand-in for the parking backend

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use slotwatch::http::client::{ClientOptions, HttpClient};

pub struct MockState {
    pub bookings: Mutex<Vec<Value>>,
    pub admin_status: Mutex<StatusCode>,
    pub device_delay: Mutex<Duration>,
    pub admin_delay: Mutex<Duration>,
    pub device_calls: AtomicUsize,
    pub fail_requests: AtomicBool,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            bookings: Mutex::new(Vec::new()),
            admin_status: Mutex::new(StatusCode::OK),
            device_delay: Mutex::new(Duration::ZERO),
            admin_delay: Mutex::new(Duration::ZERO),
            device_calls: AtomicUsize::new(0),
            fail_requests: AtomicBool::new(false),
        }
    }
}

pub struct MockBackend {
    pub base_url: String,
    pub state: Arc<MockState>,
}

impl MockBackend {
    pub async fn start() -> Self {
        let state = Arc::new(MockState::default());
        let app = Router::new()
            .route("/api/devices", get(devices))
            .route("/api/slots", get(slots))
            .route("/api/bookings/me", get(my_bookings))
            .route("/api/bookings/request", post(request_booking))
            .route("/api/admin/users/pending", get(pending_users))
            .route("/api/admin/bookings/pending", get(pending_bookings))
            .route("/api/cmd/open-gate", post(open_gate))
            .route("/api/version", get(|| async { Json(json!({"version": "1.2.3"})) }))
            .route("/api/db-check", get(|| async { Json(json!({"db": "ok"})) }))
            .route("/api/boom", get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }))
            .route("/api/not-json", get(|| async { "not-json" }))
            .route("/api/echo-headers", get(echo_headers).post(echo_headers))
            .with_state(state.clone());

        // bind to a random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    pub fn client(&self) -> Arc<HttpClient> {
        let options = ClientOptions {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(5),
            ..Default::default()
        };
        Arc::new(HttpClient::new(&options).unwrap())
    }

    pub fn set_admin_status(&self, status: StatusCode) {
        *self.state.admin_status.lock().unwrap() = status;
    }

    pub fn set_device_delay(&self, delay: Duration) {
        *self.state.device_delay.lock().unwrap() = delay;
    }

    pub fn set_admin_delay(&self, delay: Duration) {
        *self.state.admin_delay.lock().unwrap() = delay;
    }
}

async fn devices(State(state): State<Arc<MockState>>) -> Json<Value> {
    state.device_calls.fetch_add(1, Ordering::SeqCst);
    let delay = *state.device_delay.lock().unwrap();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
    Json(json!([{
        "deviceId": "gate-<1>",
        "lastSeen": "2026-10-19T08:00:00Z",
        "lastMsgCount": 42,
        "entranceCm": 37.0,
        "exitApproved": false,
        "isAdmin": true,
        "slots": {"available": 3, "occupied": 1}
    }]))
}

async fn slots() -> Json<Value> {
    Json(json!({
        "deviceId": "gate-1",
        "bookingTTLMin": 15,
        "userRole": "user",
        "slots": [
            {"id": 3, "state": "free", "occupied": false, "booked": false},
            {"id": 4, "state": "occupied", "occupied": true, "booked": false}
        ]
    }))
}

async fn my_bookings(State(state): State<Arc<MockState>>) -> Json<Value> {
    Json(Value::Array(state.bookings.lock().unwrap().clone()))
}

async fn request_booking(State(state): State<Arc<MockState>>, Json(body): Json<Value>) -> Response {
    if state.fail_requests.load(Ordering::SeqCst) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "slot table locked").into_response();
    }
    let mut bookings = state.bookings.lock().unwrap();
    let id = bookings.len() as i64 + 1;
    bookings.push(json!({
        "id": id,
        "slotId": body["slotId"],
        "status": "pending",
        "expiresAt": null
    }));
    Json(json!({"ok": true, "bookingId": id})).into_response()
}

async fn pending_users(State(state): State<Arc<MockState>>) -> Response {
    let delay = *state.admin_delay.lock().unwrap();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
    admin_list(&state, json!([{"id": 7, "fullName": "Ada", "email": "ada@example.com", "status": "pending"}]))
}

async fn pending_bookings(State(state): State<Arc<MockState>>) -> Response {
    admin_list(&state, json!([]))
}

fn admin_list(state: &MockState, list: Value) -> Response {
    let status = *state.admin_status.lock().unwrap();
    if status != StatusCode::OK {
        return (status, Json(json!({"detail": "Admin only"}))).into_response();
    }
    Json(list).into_response()
}

async fn open_gate() -> StatusCode {
    StatusCode::OK
}

async fn echo_headers(headers: HeaderMap) -> Json<Value> {
    let value_of = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    Json(json!({
        "cookie": value_of(header::COOKIE),
        "cacheControl": value_of(header::CACHE_CONTROL),
        "pragma": value_of(header::PRAGMA),
    }))
}
