// Document Metadata Extraction Service - Core
//
// This crate extracts structured metadata from Brazilian civil and benefit
// documents (PDF or image) by dispatching them to Gemini with a per-type
// output schema. The document-type registry and the extraction orchestrator
// live here; the Gemini REST client is the gemini-client package.

pub mod config;
pub mod documents;
pub mod extract;
pub mod server;

pub use config::*;
