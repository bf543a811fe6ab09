//! Gemini API request and response types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::schema::Schema;

// =============================================================================
// Files API
// =============================================================================

/// An uploaded file resource, used as generation input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileHandle {
    /// Resource name, e.g. `files/abc-123`.
    pub name: String,

    /// URI referenced from generation requests.
    pub uri: String,

    /// Content type the service recorded for the upload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Wrapper the Files API puts around the uploaded resource.
#[derive(Debug, Deserialize)]
pub(crate) struct UploadResponse {
    pub file: FileHandle,
}

/// Metadata part of the multipart upload body.
#[derive(Debug, Serialize)]
pub(crate) struct UploadMetadata {
    pub file: UploadFileMetadata,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UploadFileMetadata {
    pub display_name: String,
}

// =============================================================================
// Generation
// =============================================================================

/// A schema-constrained generation request over uploaded content.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Model name, e.g. `gemini-2.5-flash`.
    pub model: String,

    /// Uploaded artifacts to ground the generation on.
    pub contents: Vec<FileHandle>,

    /// Content type the model must emit (`application/json` for structured
    /// output).
    pub response_mime_type: Option<String>,

    /// Output schema the model must conform to.
    pub response_schema: Option<Schema>,

    /// Grounding context prepended to the conversation.
    pub system_instruction: Option<String>,

    /// Sampling temperature. Range enforcement is left to the API.
    pub temperature: Option<f32>,
}

impl GenerateRequest {
    /// Create a request for the given model and uploaded contents.
    pub fn new(model: impl Into<String>, contents: Vec<FileHandle>) -> Self {
        Self {
            model: model.into(),
            contents,
            response_mime_type: None,
            response_schema: None,
            system_instruction: None,
            temperature: None,
        }
    }

    pub fn response_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.response_mime_type = Some(mime_type.into());
        self
    }

    pub fn response_schema(mut self, schema: Schema) -> Self {
        self.response_schema = Some(schema);
        self
    }

    pub fn system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// What a generation call handed back, decoded but not yet normalized.
///
/// The API returns JSON text; when it decodes to a top-level object the
/// result is `Structured` (the shape the response schema asked for). Any
/// other valid JSON value is surfaced as `Raw` so the caller decides whether
/// that shape is acceptable — the client never coerces.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateOutcome {
    /// The candidate decoded to a JSON object.
    Structured(Map<String, Value>),

    /// The candidate decoded to some other JSON value (array, scalar, null).
    Raw(Value),
}

impl GenerateOutcome {
    /// Decode a candidate's JSON text into the boundary union.
    pub(crate) fn from_json_text(text: &str) -> crate::error::Result<Self> {
        let value: Value = serde_json::from_str(text).map_err(|e| {
            crate::error::GeminiError::Parse(format!("candidate is not valid JSON: {}", e))
        })?;
        Ok(match value {
            Value::Object(map) => GenerateOutcome::Structured(map),
            other => GenerateOutcome::Raw(other),
        })
    }
}

// =============================================================================
// Generation wire types
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentBody {
    pub contents: Vec<Content>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
}

#[derive(Debug, Serialize)]
pub(crate) struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_data: Option<FileData>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            file_data: None,
        }
    }

    pub fn file(handle: &FileHandle) -> Self {
        Self {
            text: None,
            file_data: Some(FileData {
                file_uri: handle.uri.clone(),
                mime_type: handle.mime_type.clone(),
            }),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FileData {
    pub file_uri: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<Schema>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Candidate {
    pub content: CandidateContent,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CandidatePart {
    #[serde(default)]
    pub text: Option<String>,
}
