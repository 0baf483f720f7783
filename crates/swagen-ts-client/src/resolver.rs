use log::warn;

use swagen_core::parse::schema::{AdditionalProperties, Schema, SchemaOrRef};
use swagen_core::transform::dto_names::{dto_interface_name, strip_ref_prefix};
use swagen_core::transform::SchemaIndex;

use crate::type_mapper::map_primitive;

/// A resolved field or body type: the TypeScript text plus the raw DTO key
/// it surfaced, so the caller can register it in the module's reachable set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedType {
    pub ts: String,
    pub dto_key: Option<String>,
}

impl ResolvedType {
    fn plain(ts: impl Into<String>) -> Self {
        Self {
            ts: ts.into(),
            dto_key: None,
        }
    }

    pub fn is_any(&self) -> bool {
        self.ts == "any"
    }
}

/// Resolve a `$ref` value. Enum-kind targets map to `number` (generated code
/// represents enums as plain numbers); everything else gets the flattened
/// DTO interface name. Unknown targets degrade to `any`.
pub fn ref_type(index: &SchemaIndex<'_>, ref_path: &str) -> ResolvedType {
    let key = strip_ref_prefix(ref_path);

    if index.lookup(key).is_none() {
        warn!("unresolvable schema reference: {ref_path}");
        return ResolvedType::plain("any");
    }

    let ts = if index.is_enum(key) {
        "number".to_string()
    } else {
        dto_interface_name(key)
    };

    ResolvedType {
        ts,
        dto_key: Some(key.to_string()),
    }
}

/// Resolve a field schema fragment to its TypeScript type.
pub fn field_type(index: &SchemaIndex<'_>, fragment: &SchemaOrRef) -> ResolvedType {
    match fragment {
        SchemaOrRef::Ref { ref_path } => ref_type(index, ref_path),
        SchemaOrRef::Schema(schema) => schema_type(index, schema),
    }
}

fn schema_type(index: &SchemaIndex<'_>, schema: &Schema) -> ResolvedType {
    match schema.schema_type.as_deref() {
        Some("array") => match &schema.items {
            Some(items) => {
                let inner = field_type(index, items);
                ResolvedType {
                    ts: format!("{}[]", inner.ts),
                    dto_key: inner.dto_key,
                }
            }
            None => ResolvedType::plain("any[]"),
        },
        Some("object") => match &schema.additional_properties {
            Some(AdditionalProperties::Schema(ap)) => match ap.as_ref() {
                SchemaOrRef::Ref { ref_path } => ref_type(index, ref_path),
                SchemaOrRef::Schema(_) => ResolvedType::plain("any"),
            },
            _ => ResolvedType::plain("any"),
        },
        Some(kind) => ResolvedType::plain(map_primitive(kind)),
        None => ResolvedType::plain("any"),
    }
}
