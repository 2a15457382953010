use crate::config::LlmSettings;
use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header::AUTHORIZATION};
use axum::routing::post;
use pf_core::server::default_config::DEFAULT_OPENAI_MODEL;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub authorization: Option<String>,
    pub body: Value,
}

struct MockState {
    status: StatusCode,
    body: String,
    delay: Duration,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Local stand-in for the chat-completion provider, serving `{base_url}/chat/completions`.
pub struct MockProvider {
    pub base_url: String,
    state: Arc<MockState>,
}

impl MockProvider {
    pub async fn spawn(status: StatusCode, body: String) -> Self {
        MockProvider::spawn_delayed(status, body, Duration::ZERO).await
    }

    pub async fn spawn_delayed(status: StatusCode, body: String, delay: Duration) -> Self {
        let state = Arc::new(MockState {
            status,
            body,
            delay,
            requests: Mutex::new(Vec::new()),
        });
        let router = axum::Router::new()
            .route("/v1/chat/completions", post(mock_completion))
            .with_state(state.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        MockProvider {
            base_url: format!("http://{addr}/v1"),
            state,
        }
    }

    pub fn hits(&self) -> usize {
        self.state.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

async fn mock_completion(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, String) {
    let authorization = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state
        .requests
        .lock()
        .unwrap()
        .push(RecordedRequest { authorization, body });
    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }
    (state.status, state.body.clone())
}

pub fn completion_body(content: &str) -> String {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
    .to_string()
}

pub fn llm_settings(api_key: Option<&str>, base_url: &str) -> LlmSettings {
    LlmSettings {
        api_key: api_key.map(str::to_string),
        model: DEFAULT_OPENAI_MODEL.to_string(),
        base_url: base_url.to_string(),
    }
}

pub const MULTIPART_BOUNDARY: &str = "promptify-test-boundary";

/// Encodes text fields and an optional `file` part as `multipart/form-data`.
pub fn multipart_body(fields: &[(&str, &str)], file: Option<(&str, &[u8])>) -> (String, Vec<u8>) {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{MULTIPART_BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((filename, data)) = file {
        body.extend_from_slice(
            format!(
                "--{MULTIPART_BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}--\r\n").as_bytes());
    (
        format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
        body,
    )
}
