use indexmap::IndexMap;

use super::dto_names::strip_ref_prefix;
use crate::parse::schema::{Schema, SchemaOrRef};

/// Read-only lookup over the document's component schemas, keyed by raw key.
#[derive(Debug, Clone, Copy)]
pub struct SchemaIndex<'a> {
    schemas: &'a IndexMap<String, SchemaOrRef>,
}

impl<'a> SchemaIndex<'a> {
    pub fn new(schemas: &'a IndexMap<String, SchemaOrRef>) -> Self {
        Self { schemas }
    }

    /// Resolve a raw key or `$ref` value to its defining schema, following a
    /// single top-level alias hop.
    pub fn lookup(&self, raw_key: &str) -> Option<&'a Schema> {
        match self.schemas.get(strip_ref_prefix(raw_key))? {
            SchemaOrRef::Schema(schema) => Some(schema),
            SchemaOrRef::Ref { ref_path } => match self.schemas.get(strip_ref_prefix(ref_path))? {
                SchemaOrRef::Schema(schema) => Some(schema),
                SchemaOrRef::Ref { .. } => None,
            },
        }
    }

    /// Whether the referenced schema is enum-kind. Enum references surface
    /// as the numeric primitive in generated code, never as the DTO name.
    pub fn is_enum(&self, raw_key: &str) -> bool {
        self.lookup(raw_key).is_some_and(Schema::is_enum_kind)
    }
}
