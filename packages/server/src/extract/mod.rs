//! Extraction orchestration.
//!
//! A linear, non-retrying pipeline per request:
//! validate content reference → resolve descriptor → upload → generate →
//! normalize. Any stage failure terminates the pipeline; there is no partial
//! result and no state shared between requests.

pub mod error;
pub mod request;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use gemini_client::{FileHandle, GeminiClient, GenerateOutcome, GenerateRequest};
use serde_json::{Map, Value};
use tracing::{debug, error, info};

use crate::documents::Registry;

pub use error::ExtractError;
pub use request::{DocumentMetadataRequest, GeminiModel};

/// A content reference that has been resolved to an existing regular file.
///
/// Constructed only through [`ContentFile::resolve`], so anything downstream
/// of validation can rely on the path being a real file.
#[derive(Debug, Clone)]
pub struct ContentFile(PathBuf);

impl ContentFile {
    /// Normalize a raw content string into a checked file reference.
    /// Directories and missing paths are distinct failures.
    pub fn resolve(raw: &str) -> Result<Self, ExtractError> {
        let path = PathBuf::from(raw);
        if path.is_dir() {
            return Err(ExtractError::IsADirectory(path));
        }
        if !path.exists() {
            return Err(ExtractError::NotFound(path));
        }
        Ok(Self(path))
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

/// Infrastructure seam over the generative model client: file upload plus
/// schema-constrained generation. No business logic behind this trait.
#[async_trait]
pub trait BaseGenerativeModel: Send + Sync {
    /// Upload a file, returning the artifact handle used as generation input.
    async fn upload(
        &self,
        path: &Path,
        mime_type: Option<&str>,
        display_name: &str,
    ) -> gemini_client::Result<FileHandle>;

    /// Run a schema-constrained generation over uploaded content.
    async fn generate(&self, request: GenerateRequest) -> gemini_client::Result<GenerateOutcome>;
}

#[async_trait]
impl BaseGenerativeModel for GeminiClient {
    async fn upload(
        &self,
        path: &Path,
        mime_type: Option<&str>,
        display_name: &str,
    ) -> gemini_client::Result<FileHandle> {
        self.upload_file(path, mime_type, display_name).await
    }

    async fn generate(&self, request: GenerateRequest) -> gemini_client::Result<GenerateOutcome> {
        self.generate_content(request).await
    }
}

/// The extraction orchestrator. Stateless across requests; the registry is
/// read-only and shared, so any number of extractions may run concurrently.
#[derive(Clone)]
pub struct ExtractionService {
    backend: Arc<dyn BaseGenerativeModel>,
    registry: Arc<Registry>,
}

impl ExtractionService {
    pub fn new(backend: Arc<dyn BaseGenerativeModel>, registry: Arc<Registry>) -> Self {
        Self { backend, registry }
    }

    /// Run one extraction end to end and return the normalized JSON object.
    ///
    /// An empty object is a valid success: it is the model's contractual
    /// answer for a document it could not identify, and it passes through
    /// unchanged. Required-ness of schema fields is a generation-time
    /// constraint; nothing is re-validated here.
    pub async fn extract(
        &self,
        request: DocumentMetadataRequest,
    ) -> Result<Map<String, Value>, ExtractError> {
        let content = ContentFile::resolve(&request.content)?;

        let descriptor = self
            .registry
            .resolve(&request.document_type)
            .ok_or_else(|| ExtractError::UnsupportedType(request.document_type.clone()))?;

        info!(
            document_type = %request.document_type,
            model = request.model.as_str(),
            "Starting document extraction"
        );

        let handle = self
            .backend
            .upload(
                content.path(),
                request.content_mime_type.as_deref(),
                &descriptor.name.to_uppercase(),
            )
            .await?;

        debug!(file = %handle.name, "Document uploaded");

        let mut generate = GenerateRequest::new(request.model.as_str(), vec![handle])
            .response_mime_type(descriptor.response_mime_type.clone())
            .response_schema(descriptor.response_schema.clone())
            .system_instruction(descriptor.system_instruction());
        if let Some(temperature) = request.temperature {
            generate = generate.temperature(temperature);
        }

        let outcome = self.backend.generate(generate).await?;

        let result = normalize(outcome)?;
        info!(
            document_type = %request.document_type,
            fields = result.len(),
            "Extraction complete"
        );
        Ok(result)
    }
}

/// Collapse the client-boundary union into the one canonical mapping type.
/// Both accepted shapes pass through field-for-field; anything else means
/// the backend broke its contract.
fn normalize(outcome: GenerateOutcome) -> Result<Map<String, Value>, ExtractError> {
    match outcome {
        GenerateOutcome::Structured(map) => Ok(map),
        GenerateOutcome::Raw(Value::Object(map)) => Ok(map),
        GenerateOutcome::Raw(other) => {
            let got = json_kind(&other);
            error!(got, "Generation backend returned a non-object payload");
            Err(ExtractError::ContractViolation { got })
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
