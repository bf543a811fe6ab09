//! Declarative output schemas for Gemini structured generation.
//!
//! The Gemini API constrains generation with a `Schema` object (a subset of
//! OpenAPI 3.0): upper-case type tags, camelCase keys, `nullable`, `enum`,
//! nested `properties`/`items` and a `required` list. Schemas here are plain
//! data — built once, shared by reference, serialized as-is onto the wire —
//! so callers can declare document shapes without deriving anything from
//! Rust types.
//!
//! # Example
//!
//! ```rust,ignore
//! use gemini_client::Schema;
//!
//! let person = Schema::object()
//!     .property("name", Schema::string().describe("Full name."))
//!     .property("age", Schema::integer().nullable())
//!     .require(&["name"]);
//! ```

use std::collections::BTreeMap;

use serde::Serialize;

/// Primitive type tag of a schema node. Serializes to the upper-case
/// wire form (`"STRING"`, `"OBJECT"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SchemaType {
    String,
    Number,
    Integer,
    Boolean,
    Array,
    Object,
}

/// One node of a declarative output schema.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(rename = "type")]
    pub schema_type: SchemaType,

    /// Format tag, e.g. `"date"` for ISO dates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "is_false")]
    pub nullable: bool,

    /// Closed set of allowed values (strings only, per the wire contract).
    #[serde(rename = "enum", skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<String>,

    /// Element schema, for `Array` nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,

    /// Named fields, for `Object` nodes.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Schema>,

    /// Field names the model must always emit, for `Object` nodes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Schema {
    fn new(schema_type: SchemaType) -> Self {
        Self {
            schema_type,
            format: None,
            description: None,
            nullable: false,
            enum_values: Vec::new(),
            items: None,
            properties: BTreeMap::new(),
            required: Vec::new(),
        }
    }

    pub fn string() -> Self {
        Self::new(SchemaType::String)
    }

    pub fn number() -> Self {
        Self::new(SchemaType::Number)
    }

    pub fn integer() -> Self {
        Self::new(SchemaType::Integer)
    }

    pub fn boolean() -> Self {
        Self::new(SchemaType::Boolean)
    }

    pub fn object() -> Self {
        Self::new(SchemaType::Object)
    }

    pub fn array(items: Schema) -> Self {
        let mut schema = Self::new(SchemaType::Array);
        schema.items = Some(Box::new(items));
        schema
    }

    /// Set the format tag (e.g. `"date"`).
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Set the human-readable field description.
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark the field as nullable.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Restrict the field to a closed set of values.
    pub fn allowed(mut self, values: &[&str]) -> Self {
        self.enum_values = values.iter().map(|v| v.to_string()).collect();
        self
    }

    /// Add a named property (object schemas).
    pub fn property(mut self, name: &str, schema: Schema) -> Self {
        self.properties.insert(name.to_string(), schema);
        self
    }

    /// Declare which properties are required (object schemas).
    pub fn require(mut self, names: &[&str]) -> Self {
        self.required = names.iter().map(|n| n.to_string()).collect();
        self
    }

    /// Walk the schema tree and collect every `required` entry that has no
    /// matching property, as dotted paths. Empty means the schema is
    /// internally consistent. Nested objects and array element schemas are
    /// included in the walk.
    pub fn missing_required(&self) -> Vec<String> {
        let mut missing = Vec::new();
        collect_missing_required(self, "", &mut missing);
        missing
    }
}

fn collect_missing_required(schema: &Schema, prefix: &str, missing: &mut Vec<String>) {
    for name in &schema.required {
        if !schema.properties.contains_key(name) {
            missing.push(join_path(prefix, name));
        }
    }
    for (name, child) in &schema.properties {
        collect_missing_required(child, &join_path(prefix, name), missing);
    }
    if let Some(items) = &schema.items {
        collect_missing_required(items, &join_path(prefix, "[]"), missing);
    }
}

fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", prefix, name)
    }
}
