//! Shared utilities for integration testing.
//!
//! Every mock is an in-process axum server on an ephemeral port that records
//! the JSON-RPC requests it receives.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Router;
use serde_json::Value;
use tokio::net::TcpListener;

use monero_rpc::MoneroRpc;

pub const REALM: &str = "monero-rpc";
pub const NONCE: &str = "dcd98b7102dd2f0e8b11d0f600bfb0c093";

/// A running mock JSON-RPC endpoint.
pub struct MockServer {
    pub url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

/// One request as seen by a mock.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub body: Value,
    pub authorization: Option<String>,
}

impl MockServer {
    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// JSON body of the most recent request.
    pub fn last_body(&self) -> Value {
        self.requests
            .lock()
            .unwrap()
            .last()
            .map(|r| r.body.clone())
            .expect("mock received no requests")
    }

    /// Wire method name of the most recent request.
    pub fn last_method(&self) -> String {
        self.last_body()["method"].as_str().unwrap_or_default().to_string()
    }

    /// Client for this mock, bypassing any system proxy.
    pub fn client(&self) -> MoneroRpc {
        MoneroRpc::new(&self.url, Some(test_client())).unwrap()
    }
}

#[derive(Clone)]
enum Behaviour {
    Fixed {
        status: StatusCode,
        body: String,
    },
    Digest {
        username: String,
        password: String,
        body: String,
    },
}

#[derive(Clone)]
struct MockState {
    behaviour: Behaviour,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

pub fn test_client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .build()
        .unwrap()
}

/// Mock that answers every request with `status` and `body`.
pub async fn start_mock(status: u16, body: &str) -> MockServer {
    spawn(Behaviour::Fixed {
        status: StatusCode::from_u16(status).unwrap(),
        body: body.to_string(),
    })
    .await
}

/// Mock answering with a JSON-RPC success envelope around `result`.
pub async fn start_result_mock(result: Value) -> MockServer {
    let body = serde_json::json!({"jsonrpc": "2.0", "id": "0", "result": result});
    start_mock(200, &body.to_string()).await
}

/// Mock requiring Digest auth (qop=auth, MD5) before answering with `body`.
pub async fn start_digest_mock(username: &str, password: &str, body: &str) -> MockServer {
    spawn(Behaviour::Digest {
        username: username.to_string(),
        password: password.to_string(),
        body: body.to_string(),
    })
    .await
}

/// A URL nothing is listening on.
pub async fn unused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/json_rpc", addr)
}

async fn spawn(behaviour: Behaviour) -> MockServer {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        behaviour,
        requests: requests.clone(),
    };
    let app = Router::new().fallback(handle).with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockServer {
        url: format!("http://{}/json_rpc", addr),
        requests,
    }
}

async fn handle(State(state): State<MockState>, headers: HeaderMap, body: Bytes) -> Response {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.requests.lock().unwrap().push(Recorded {
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
        authorization: authorization.clone(),
    });

    match state.behaviour {
        Behaviour::Fixed { status, body } => json_response(status, body),
        Behaviour::Digest {
            username,
            password,
            body,
        } => {
            let verified = authorization
                .as_deref()
                .is_some_and(|auth| verify_digest(auth, &username, &password));
            if verified {
                json_response(StatusCode::OK, body)
            } else {
                challenge()
            }
        }
    }
}

fn json_response(status: StatusCode, body: String) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}

fn challenge() -> Response {
    let value = format!(
        "Digest qop=\"auth\",algorithm=MD5,realm=\"{}\",nonce=\"{}\",stale=false",
        REALM, NONCE
    );
    let mut response = StatusCode::UNAUTHORIZED.into_response();
    response
        .headers_mut()
        .insert(header::WWW_AUTHENTICATE, HeaderValue::from_str(&value).unwrap());
    response
}

/// Recompute the RFC 2617 qop=auth response and compare.
fn verify_digest(header: &str, username: &str, password: &str) -> bool {
    let Some(params) = header.strip_prefix("Digest ") else {
        return false;
    };
    let field = |name: &str| -> Option<String> {
        params.split(',').find_map(|part| {
            let (key, value) = part.trim().split_once('=')?;
            (key.trim() == name).then(|| value.trim().trim_matches('"').to_string())
        })
    };

    let (Some(user), Some(realm), Some(nonce), Some(uri), Some(nc), Some(cnonce), Some(qop), Some(response)) = (
        field("username"),
        field("realm"),
        field("nonce"),
        field("uri"),
        field("nc"),
        field("cnonce"),
        field("qop"),
        field("response"),
    ) else {
        return false;
    };

    if user != username || realm != REALM || nonce != NONCE || uri != "/json_rpc" {
        return false;
    }

    let ha1 = md5_hex(&format!("{}:{}:{}", username, REALM, password));
    let ha2 = md5_hex(&format!("POST:{}", uri));
    let expected = md5_hex(&format!("{}:{}:{}:{}:{}:{}", ha1, nonce, nc, cnonce, qop, ha2));
    response == expected
}

fn md5_hex(input: &str) -> String {
    format!("{:x}", md5::compute(input.as_bytes()))
}
