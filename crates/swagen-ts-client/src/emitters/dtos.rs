use indexmap::IndexMap;
use serde::Serialize;

use swagen_core::parse::schema::{Schema, SchemaOrRef};
use swagen_core::transform::dto_names::{dto_interface_name, strip_ref_prefix};
use swagen_core::transform::SchemaIndex;

use crate::resolver::field_type;

/// The DTO schemas reachable from one module's operations, keyed by raw
/// schema key in discovery order. Owned by a single module-emission call;
/// nothing survives past it, so no DTO can leak into the next module.
#[derive(Debug, Default)]
pub struct ReachableDtos {
    entries: IndexMap<String, Schema>,
}

impl ReachableDtos {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idempotent insertion keyed by raw key: the first registration wins,
    /// so a DTO referenced by many operations or fields is recorded exactly
    /// once. `$ref`-shaped spellings normalize to the same key.
    pub fn register(&mut self, index: &SchemaIndex<'_>, raw_key: &str) {
        let key = strip_ref_prefix(raw_key);
        if self.entries.contains_key(key) {
            return;
        }
        if let Some(schema) = index.lookup(key) {
            self.entries.insert(key.to_string(), schema.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, raw_key: &str) -> bool {
        self.entries.contains_key(raw_key)
    }

    fn get(&self, position: usize) -> Option<(String, Schema)> {
        self.entries
            .get_index(position)
            .map(|(key, schema)| (key.clone(), schema.clone()))
    }
}

/// One field of an emitted DTO interface.
#[derive(Debug, Clone, Serialize)]
pub struct DtoField {
    pub name: String,
    pub optional: bool,
    pub ts_type: String,
}

/// One emitted DTO interface declaration.
#[derive(Debug, Clone, Serialize)]
pub struct EmittedDto {
    pub name: String,
    pub fields: Vec<DtoField>,
}

/// Close the reachable set and emit one interface per object-kind DTO.
///
/// A worklist walk: the set is visited by index while field resolution keeps
/// appending newly discovered keys, until no entry is left unvisited. Enum
/// and primitive-wrapper schemas stay in the set (so they are never visited
/// twice) but produce no declaration; their consumers already inlined the
/// substitute type.
pub fn emit_dtos(index: &SchemaIndex<'_>, dtos: &mut ReachableDtos) -> Vec<EmittedDto> {
    let mut emitted = Vec::new();
    let mut position = 0;

    while let Some((raw_key, schema)) = dtos.get(position) {
        position += 1;

        if !schema.is_object_kind() {
            continue;
        }

        let fields = schema
            .properties
            .iter()
            .map(|(name, fragment)| {
                let resolved = field_type(index, fragment);
                if let Some(key) = &resolved.dto_key {
                    dtos.register(index, key);
                }
                DtoField {
                    name: name.clone(),
                    optional: fragment_nullable(fragment),
                    ts_type: resolved.ts,
                }
            })
            .collect();

        emitted.push(EmittedDto {
            name: dto_interface_name(&raw_key),
            fields,
        });
    }

    emitted
}

fn fragment_nullable(fragment: &SchemaOrRef) -> bool {
    match fragment {
        SchemaOrRef::Schema(schema) => schema.nullable.unwrap_or(false),
        SchemaOrRef::Ref { .. } => false,
    }
}
