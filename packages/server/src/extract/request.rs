//! Inbound extraction request model.

use serde::Deserialize;

use crate::documents::DocumentTypeId;

/// Supported generative models. A closed set: requests naming anything else
/// fail structural validation before any work happens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum GeminiModel {
    #[default]
    #[serde(rename = "gemini-2.5-flash")]
    Flash25,

    #[serde(rename = "gemini-2.5-pro")]
    Pro25,
}

impl GeminiModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeminiModel::Flash25 => "gemini-2.5-flash",
            GeminiModel::Pro25 => "gemini-2.5-pro",
        }
    }
}

/// One extraction request. Constructed per inbound call, validated
/// immediately, discarded after orchestration — no state survives it.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentMetadataRequest {
    /// Model to run the extraction with.
    #[serde(default)]
    pub model: GeminiModel,

    /// Path to the document on the local filesystem. Resolved and checked
    /// before anything is uploaded.
    pub content: String,

    /// Which descriptor governs this extraction.
    #[serde(rename = "type")]
    pub document_type: DocumentTypeId,

    /// Content-type override; when absent the client inspects the file.
    #[serde(default)]
    pub content_mime_type: Option<String>,

    /// Sampling temperature, passed through to the model untouched.
    #[serde(default)]
    pub temperature: Option<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_model_defaults_to_flash() {
        let request: DocumentMetadataRequest = serde_json::from_value(json!({
            "content": "/tmp/doc.pdf",
            "type": "COMPROVANTE_RESIDENCIA",
        }))
        .unwrap();

        assert_eq!(request.model, GeminiModel::Flash25);
        assert_eq!(request.content_mime_type, None);
        assert_eq!(request.temperature, None);
    }

    #[test]
    fn test_full_request_deserializes() {
        let request: DocumentMetadataRequest = serde_json::from_value(json!({
            "model": "gemini-2.5-pro",
            "content": "/tmp/doc.png",
            "type": "REGISTRO_GERAL_PESCA",
            "content_mime_type": "image/png",
            "temperature": 0.1,
        }))
        .unwrap();

        assert_eq!(request.model, GeminiModel::Pro25);
        assert_eq!(request.model.as_str(), "gemini-2.5-pro");
        assert_eq!(request.document_type.as_str(), "REGISTRO_GERAL_PESCA");
        assert_eq!(request.content_mime_type.as_deref(), Some("image/png"));
        assert_eq!(request.temperature, Some(0.1));
    }

    #[test]
    fn test_unknown_model_is_a_structural_error() {
        let result: Result<DocumentMetadataRequest, _> = serde_json::from_value(json!({
            "model": "gpt-4o",
            "content": "/tmp/doc.pdf",
            "type": "COMPROVANTE_RESIDENCIA",
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_content_is_a_structural_error() {
        let result: Result<DocumentMetadataRequest, _> = serde_json::from_value(json!({
            "type": "COMPROVANTE_RESIDENCIA",
        }));
        let message = result.unwrap_err().to_string();
        assert!(message.contains("content"), "error should name the field: {}", message);
    }

    #[test]
    fn test_arbitrary_type_string_passes_structural_validation() {
        // Registry membership is a domain check, not a deserialization one.
        let request: DocumentMetadataRequest = serde_json::from_value(json!({
            "content": "/tmp/doc.pdf",
            "type": "NOTA_FISCAL",
        }))
        .unwrap();
        assert_eq!(request.document_type.as_str(), "NOTA_FISCAL");
    }
}
