//! In-process stand-in for the portfolio REST backend.
//!
//! Serves canned responses keyed by method + path and records every request it
//! sees so adapter tests can assert on what actually went over the wire.

use std::sync::Arc;

use actix_web::{
    dev::ServerHandle, http::header, http::StatusCode, web, App, HttpRequest, HttpResponse,
    HttpServer,
};
use parking_lot::Mutex;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn body_json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body is not JSON")
    }

    pub fn is_multipart(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("multipart/form-data"))
    }
}

#[derive(Debug, Clone)]
pub struct CannedResponse {
    method: String,
    path: String,
    status: u16,
    content_type: &'static str,
    body: String,
}

impl CannedResponse {
    pub fn json(method: &str, path: &str, status: u16, body: serde_json::Value) -> Self {
        Self {
            method: method.to_string(),
            path: path.to_string(),
            status,
            content_type: "application/json",
            body: body.to_string(),
        }
    }

    pub fn text(method: &str, path: &str, status: u16, body: &str) -> Self {
        Self {
            method: method.to_string(),
            path: path.to_string(),
            status,
            content_type: "text/plain",
            body: body.to_string(),
        }
    }

    pub fn empty(method: &str, path: &str, status: u16) -> Self {
        Self::text(method, path, status, "")
    }
}

struct FakeState {
    routes: Vec<CannedResponse>,
    recorded: Arc<Mutex<Vec<RecordedRequest>>>,
}

async fn record_and_respond(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<FakeState>,
) -> HttpResponse {
    let method = req.method().as_str().to_string();
    let path = req.path().to_string();

    state.recorded.lock().push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        content_type: req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: body.to_vec(),
    });

    match state
        .routes
        .iter()
        .find(|r| r.method == method && r.path == path)
    {
        Some(canned) => HttpResponse::build(
            StatusCode::from_u16(canned.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        )
        .content_type(canned.content_type)
        .body(canned.body.clone()),
        None => HttpResponse::NotFound().body(format!("no canned response for {method} {path}")),
    }
}

pub struct FakeBackend {
    base_url: String,
    recorded: Arc<Mutex<Vec<RecordedRequest>>>,
    handle: ServerHandle,
}

impl FakeBackend {
    /// Must be called from inside an actix runtime (`#[actix_web::test]`).
    pub async fn start(routes: Vec<CannedResponse>) -> Self {
        let recorded = Arc::new(Mutex::new(Vec::new()));
        let state = web::Data::new(FakeState {
            routes,
            recorded: Arc::clone(&recorded),
        });

        let server = HttpServer::new(move || {
            App::new()
                .app_data(state.clone())
                .default_service(web::to(record_and_respond))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("failed to bind fake backend");

        let addr = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        Self {
            base_url: format!("http://{addr}"),
            recorded,
            handle,
        }
    }

    pub fn base_url(&self) -> String {
        self.base_url.clone()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.recorded.lock().clone()
    }

    pub fn requests_to(&self, method: &str, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.path == path)
            .collect()
    }

    pub async fn stop(self) {
        self.handle.stop(true).await;
    }
}
