//! Document-type registry and extraction descriptors.
//!
//! A [`Descriptor`] binds one document type to everything the model needs to
//! extract it: a domain instruction, the output schema, and the response MIME
//! contract. The [`Registry`] is the single source of truth for which types
//! the service supports; it is built once at startup, integrity-checked, and
//! read-only afterwards.

pub mod catalog;
pub mod fragments;

use std::collections::HashMap;
use std::fmt;

use gemini_client::Schema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier selecting which descriptor governs an extraction.
///
/// Structurally any string; membership in the supported set is a registry
/// lookup, so an unknown identifier surfaces as a domain error naming the
/// identifier rather than a deserialization failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentTypeId(String);

impl DocumentTypeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocumentTypeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Declarative bundle describing how one document type is extracted.
#[derive(Debug, Clone)]
pub struct Descriptor {
    /// Display name of the document type.
    pub name: String,

    /// Standard abbreviation, when the document type has one.
    pub sigla: Option<String>,

    /// Domain description of the document and its expected fields.
    pub instruction: String,

    /// Content type the model must emit.
    pub response_mime_type: String,

    /// Exact output shape the model must conform to.
    pub response_schema: Schema,
}

/// Output-discipline rules prepended to every instruction. The empty-object
/// fallback is part of the response contract: an unidentifiable document is
/// a successful `{}`, not an error.
const GENERAL_RULES: &str = "\
⚠️ Regras Gerais:
- Responda apenas com JSON válido;
- Se a informação não aparecer, não a inclua;
- Utilize datas no formato YYYY-MM-DD;
- Os documentos podem estar em formato PDF ou imagem (JPG/PNG);
- Sempre identifique o tipo de documento com base nos termos mais evidentes no conteúdo;
- Se não for possível identificar o documento, retorne um JSON vazio: `{}`;";

impl Descriptor {
    /// The full grounding instruction sent to the model: the fixed general
    /// rules followed by this type's domain context. Pure and deterministic.
    pub fn system_instruction(&self) -> String {
        format!("{}\n\n📜 Contexto\n{}", GENERAL_RULES, self.instruction)
    }
}

/// Registry construction failures. All of these indicate malformed
/// declarative data and are raised eagerly at startup.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("duplicate document type: {0}")]
    DuplicateType(DocumentTypeId),

    #[error("descriptor for {document_type} has an empty display name")]
    EmptyName { document_type: DocumentTypeId },

    #[error("descriptor for {document_type} requires fields missing from properties: {fields:?}")]
    MissingRequired {
        document_type: DocumentTypeId,
        fields: Vec<String>,
    },
}

/// Immutable map from document-type identifier to descriptor.
#[derive(Debug)]
pub struct Registry {
    entries: HashMap<DocumentTypeId, Descriptor>,
}

impl Registry {
    /// Build a registry, validating every descriptor eagerly: non-empty
    /// display name, and every `required` field present in `properties`
    /// (recursively, array items included).
    pub fn new(
        entries: impl IntoIterator<Item = (DocumentTypeId, Descriptor)>,
    ) -> Result<Self, RegistryError> {
        let mut map = HashMap::new();
        for (id, descriptor) in entries {
            if descriptor.name.trim().is_empty() {
                return Err(RegistryError::EmptyName { document_type: id });
            }
            let missing = descriptor.response_schema.missing_required();
            if !missing.is_empty() {
                return Err(RegistryError::MissingRequired {
                    document_type: id,
                    fields: missing,
                });
            }
            if map.insert(id.clone(), descriptor).is_some() {
                return Err(RegistryError::DuplicateType(id));
            }
        }
        Ok(Self { entries: map })
    }

    /// The registry of built-in document types.
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::new(catalog::entries())
    }

    /// Exact-match descriptor lookup. No fuzzy matching.
    pub fn resolve(&self, id: &DocumentTypeId) -> Option<&Descriptor> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Identifiers of every registered document type.
    pub fn document_types(&self) -> impl Iterator<Item = &DocumentTypeId> {
        self.entries.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(name: &str, schema: Schema) -> Descriptor {
        Descriptor {
            name: name.to_string(),
            sigla: None,
            instruction: "Documento de teste.".to_string(),
            response_mime_type: "application/json".to_string(),
            response_schema: schema,
        }
    }

    #[test]
    fn test_builtin_registry_is_valid() {
        let registry = Registry::builtin().expect("builtin registry must validate");
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn test_builtin_registry_resolves_all_known_types() {
        let registry = Registry::builtin().unwrap();
        for id in [
            catalog::CNIS,
            catalog::CAEPF,
            catalog::COMPROVANTE_RESIDENCIA,
            catalog::RGP,
        ] {
            assert!(
                registry.resolve(&DocumentTypeId::new(id)).is_some(),
                "missing descriptor for {}",
                id
            );
        }
    }

    #[test]
    fn test_resolve_is_exact_match_only() {
        let registry = Registry::builtin().unwrap();
        assert!(registry
            .resolve(&DocumentTypeId::new("comprovante_residencia"))
            .is_none());
        assert!(registry.resolve(&DocumentTypeId::new("CNIS")).is_none());
    }

    #[test]
    fn test_rejects_required_field_without_property() {
        let schema = Schema::object()
            .property("nome", Schema::string())
            .require(&["nome", "cpf"]);
        let err = Registry::new(vec![(DocumentTypeId::new("TESTE"), descriptor("Teste", schema))])
            .unwrap_err();

        match err {
            RegistryError::MissingRequired { fields, .. } => {
                assert_eq!(fields, vec!["cpf".to_string()]);
            }
            other => panic!("expected MissingRequired, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_empty_display_name() {
        let schema = Schema::object().property("nome", Schema::string());
        let err = Registry::new(vec![(DocumentTypeId::new("TESTE"), descriptor("  ", schema))])
            .unwrap_err();
        assert!(matches!(err, RegistryError::EmptyName { .. }));
    }

    #[test]
    fn test_rejects_duplicate_type() {
        let make = || descriptor("Teste", Schema::object().property("nome", Schema::string()));
        let err = Registry::new(vec![
            (DocumentTypeId::new("TESTE"), make()),
            (DocumentTypeId::new("TESTE"), make()),
        ])
        .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateType(_)));
    }

    #[test]
    fn test_system_instruction_is_deterministic_and_complete() {
        let registry = Registry::builtin().unwrap();
        let descriptor = registry
            .resolve(&DocumentTypeId::new(catalog::CNIS))
            .unwrap();

        let first = descriptor.system_instruction();
        let second = descriptor.system_instruction();
        assert_eq!(first, second);

        // General rules precede the domain context.
        assert!(first.starts_with("⚠️ Regras Gerais:"));
        assert!(first.contains("JSON vazio: `{}`"));
        assert!(first.contains("📜 Contexto"));
        assert!(first.contains(&descriptor.instruction));
    }
}
