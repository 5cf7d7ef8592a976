#![allow(dead_code)]
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::Router;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub headers: HeaderMap,
    pub body: serde_json::Value,
}

struct MockState {
    status: StatusCode,
    body: String,
    delay: Option<Duration>,
    requests: Mutex<Vec<CapturedRequest>>,
}

/// Local stand-in for the registry directory API.
pub struct MockRegistryServer {
    addr: SocketAddr,
    state: Arc<MockState>,
}

impl MockRegistryServer {
    pub async fn start(status: StatusCode, body: impl Into<String>) -> Self {
        Self::start_with_delay(status, body, None).await
    }

    pub async fn start_with_delay(
        status: StatusCode,
        body: impl Into<String>,
        delay: Option<Duration>,
    ) -> Self {
        let state = Arc::new(MockState {
            status,
            body: body.into(),
            delay,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/", post(describe_instance_all))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, state }
    }

    /// Response listing one registry per entry of `endpoints`.
    pub fn registries_body(endpoints: &[&str]) -> String {
        let registries: Vec<serde_json::Value> = endpoints
            .iter()
            .enumerate()
            .map(|(i, endpoint)| {
                serde_json::json!({
                    "RegistryId": format!("tcr-{}", i),
                    "RegistryName": "svc1",
                    "InternalEndpoint": endpoint,
                })
            })
            .collect();

        serde_json::json!({
            "Response": {
                "Registries": registries,
                "TotalCount": endpoints.len(),
                "RequestId": "mock-request",
            }
        })
        .to_string()
    }

    pub fn error_body(code: &str, message: &str) -> String {
        serde_json::json!({
            "Response": {
                "Error": { "Code": code, "Message": message },
                "RequestId": "mock-request",
            }
        })
        .to_string()
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn host(&self) -> String {
        self.addr.to_string()
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

async fn describe_instance_all(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, String) {
    let body = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    state
        .requests
        .lock()
        .unwrap()
        .push(CapturedRequest { headers, body });

    if let Some(delay) = state.delay {
        tokio::time::sleep(delay).await;
    }

    (state.status, state.body.clone())
}
