use indexmap::IndexMap;

use super::operations::ApiOperation;
use crate::parse::schema::SchemaOrRef;

/// A module groups operations sharing a tag, keyed by the tag lower-cased.
#[derive(Debug, Clone)]
pub struct ApiModule {
    pub name: String,
    /// Indices into `ApiModel::operations`, in document order.
    pub operations: Vec<usize>,
}

/// The grouped, generator-ready view of a parsed document.
#[derive(Debug, Clone)]
pub struct ApiModel {
    pub operations: Vec<ApiOperation>,
    pub modules: Vec<ApiModule>,
    /// Component schemas by raw key, in document order.
    pub schemas: IndexMap<String, SchemaOrRef>,
}

impl ApiModel {
    pub fn module(&self, name: &str) -> Option<&ApiModule> {
        self.modules.iter().find(|m| m.name == name)
    }
}
