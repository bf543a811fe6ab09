//! Pure Google Gemini REST API client
//!
//! A clean, minimal client for the Gemini API with no domain-specific logic.
//! Supports file uploads (Files API) and schema-constrained JSON generation
//! over uploaded content.
//!
//! # Example
//!
//! ```rust,ignore
//! use gemini_client::{GeminiClient, GenerateRequest, Schema};
//!
//! let client = GeminiClient::from_env()?;
//!
//! // Upload a document
//! let handle = client
//!     .upload_file("invoice.pdf".as_ref(), None, "INVOICE")
//!     .await?;
//!
//! // Generate JSON constrained by a declarative schema
//! let outcome = client
//!     .generate_content(
//!         GenerateRequest::new("gemini-2.5-flash", vec![handle])
//!             .response_mime_type("application/json")
//!             .response_schema(Schema::object().property("total", Schema::number()))
//!             .system_instruction("Extract the invoice total."),
//!     )
//!     .await?;
//! ```

pub mod error;
pub mod schema;
pub mod types;

pub use error::{GeminiError, Result};
pub use schema::{Schema, SchemaType};
pub use types::{FileHandle, GenerateOutcome, GenerateRequest};

use std::path::Path;

use reqwest::Client;
use tracing::{debug, warn};

use types::{
    Content, GenerateContentBody, GenerateContentResponse, GenerationConfig, Part,
    UploadFileMetadata, UploadMetadata, UploadResponse,
};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Pure Gemini API client.
#[derive(Clone)]
pub struct GeminiClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    /// Create a new Gemini client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create from environment variable `GEMINI_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::Config("GEMINI_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set a custom base URL (for proxies, test servers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Upload a file to the Files API and return its handle.
    ///
    /// When `mime_type` is `None` the content type is guessed from the file
    /// extension, falling back to `application/octet-stream`.
    pub async fn upload_file(
        &self,
        path: &Path,
        mime_type: Option<&str>,
        display_name: &str,
    ) -> Result<FileHandle> {
        let mime_type = match mime_type {
            Some(m) => m.to_string(),
            None => mime_guess::from_path(path)
                .first_or_octet_stream()
                .to_string(),
        };

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| GeminiError::Io(format!("cannot read {}: {}", path.display(), e)))?;

        let metadata = UploadMetadata {
            file: UploadFileMetadata {
                display_name: display_name.to_string(),
            },
        };
        let metadata_json = serde_json::to_string(&metadata)
            .map_err(|e| GeminiError::Parse(format!("failed to serialize metadata: {}", e)))?;

        let form = reqwest::multipart::Form::new()
            .part(
                "metadata",
                reqwest::multipart::Part::text(metadata_json)
                    .mime_str("application/json")
                    .map_err(|e| GeminiError::Parse(e.to_string()))?,
            )
            .part(
                "file",
                reqwest::multipart::Part::bytes(bytes)
                    .mime_str(&mime_type)
                    .map_err(|e| GeminiError::Config(format!("invalid mime type: {}", e)))?,
            );

        let response = self
            .http_client
            .post(format!("{}/upload/v1beta/files", self.base_url))
            .header("x-goog-api-key", &self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Gemini upload request failed");
                GeminiError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %message, "Gemini upload error");
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let upload: UploadResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::Parse(e.to_string()))?;

        debug!(
            file = %upload.file.name,
            mime_type = %mime_type,
            "Uploaded file to Gemini"
        );

        Ok(upload.file)
    }

    /// Schema-constrained generation over uploaded content.
    ///
    /// Returns the first candidate decoded into [`GenerateOutcome`]: a
    /// structured object when the model honored the schema, or the raw JSON
    /// value otherwise.
    pub async fn generate_content(&self, request: GenerateRequest) -> Result<GenerateOutcome> {
        let start = std::time::Instant::now();

        let body = GenerateContentBody {
            contents: vec![Content {
                parts: request.contents.iter().map(Part::file).collect(),
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: request.response_mime_type.clone(),
                response_schema: request.response_schema.clone(),
                temperature: request.temperature,
            }),
            system_instruction: request.system_instruction.as_ref().map(|text| Content {
                parts: vec![Part::text(text.clone())],
            }),
        };

        let response = self
            .http_client
            .post(format!(
                "{}/v1beta/models/{}:generateContent",
                self.base_url, request.model
            ))
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Gemini generation request failed");
                GeminiError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %message, "Gemini API error");
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let generated: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::Parse(e.to_string()))?;

        let text = generated
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().find_map(|p| p.text))
            .ok_or_else(|| GeminiError::Parse("no candidate text in response".into()))?;

        debug!(
            model = %request.model,
            duration_ms = start.elapsed().as_millis(),
            "Gemini generation complete"
        );

        GenerateOutcome::from_json_text(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builder() {
        let client = GeminiClient::new("test-key").with_base_url("https://custom.api.com");

        assert_eq!(client.api_key, "test-key");
        assert_eq!(client.base_url(), "https://custom.api.com");
    }
}
