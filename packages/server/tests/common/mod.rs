//! Shared test support: stub generation backend and app builder.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use gemini_client::{FileHandle, GenerateOutcome, GenerateRequest};
use http_body_util::BodyExt;
use serde_json::Value;
use server_core::documents::Registry;
use server_core::extract::BaseGenerativeModel;
use server_core::server::build_app;

/// Stub backend replaying a canned outcome (or upload failure) and counting
/// calls, so tests can assert that invalid requests never reach the remote.
pub struct StubBackend {
    outcome: Mutex<GenerateOutcome>,
    upload_error: Mutex<Option<gemini_client::GeminiError>>,
    upload_calls: Mutex<Vec<PathBuf>>,
    generate_calls: Mutex<usize>,
}

impl StubBackend {
    pub fn with_outcome(outcome: GenerateOutcome) -> Arc<Self> {
        Arc::new(Self {
            outcome: Mutex::new(outcome),
            upload_error: Mutex::new(None),
            upload_calls: Mutex::new(Vec::new()),
            generate_calls: Mutex::new(0),
        })
    }

    pub fn with_upload_error(error: gemini_client::GeminiError) -> Arc<Self> {
        let stub = Self::with_outcome(GenerateOutcome::Structured(serde_json::Map::new()));
        *stub.upload_error.lock().unwrap() = Some(error);
        stub
    }

    pub fn upload_count(&self) -> usize {
        self.upload_calls.lock().unwrap().len()
    }

    pub fn generate_count(&self) -> usize {
        *self.generate_calls.lock().unwrap()
    }
}

#[async_trait]
impl BaseGenerativeModel for StubBackend {
    async fn upload(
        &self,
        path: &Path,
        _mime_type: Option<&str>,
        display_name: &str,
    ) -> gemini_client::Result<FileHandle> {
        self.upload_calls.lock().unwrap().push(path.to_path_buf());
        if let Some(error) = self.upload_error.lock().unwrap().take() {
            return Err(error);
        }
        Ok(FileHandle {
            name: "files/stub".into(),
            uri: "https://example.com/files/stub".into(),
            mime_type: Some("application/pdf".into()),
            display_name: Some(display_name.to_string()),
        })
    }

    async fn generate(&self, _request: GenerateRequest) -> gemini_client::Result<GenerateOutcome> {
        *self.generate_calls.lock().unwrap() += 1;
        Ok(self.outcome.lock().unwrap().clone())
    }
}

/// Build the app against a stub backend and the builtin registry.
pub fn test_app(backend: Arc<StubBackend>) -> Router {
    let registry = Registry::builtin().expect("builtin registry must validate");
    build_app(Arc::new(registry), backend)
}

/// GET request with a JSON body, the shape the metadata endpoint consumes.
pub fn json_request(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

/// Read a response body back as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("failed to read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body is not valid JSON")
}
