use serde::Serialize;

use swagen_core::ir::{ApiOperation, HttpMethod};
use swagen_core::parse::parameter::ParameterLocation;
use swagen_core::transform::naming::{function_base_name, pascal_segment};
use swagen_core::transform::SchemaIndex;

use super::dtos::ReachableDtos;
use crate::resolver::{field_type, ResolvedType};

/// Suffix on generated parameter-interface names.
const ITF_SUFFIX: &str = "Itf";

/// One field of a parameter interface. All parameters are declared required;
/// optionality is not modeled at this layer.
#[derive(Debug, Clone, Serialize)]
pub struct ItfField {
    pub name: String,
    pub ts_type: String,
    pub description: Option<String>,
}

/// The fully resolved record for one callable, built before any text so
/// tests can assert on it independently of formatting.
#[derive(Debug, Clone, Serialize)]
pub struct EmittedOperation {
    pub fn_name: String,
    pub itf_name: Option<String>,
    pub itf_fields: Vec<ItfField>,
    pub summary: Option<String>,
    pub http_fn: &'static str,
    pub args_sig: String,
    pub return_type: String,
    pub path_rhs: String,
    pub call_args: &'static str,
    pub query_names: Vec<String>,
}

/// Resolve one operation against the module it belongs to, registering every
/// surfaced DTO key into the module's reachable set.
pub fn emit_operation(
    op: &ApiOperation,
    module_pascal: &str,
    index: &SchemaIndex<'_>,
    dtos: &mut ReachableDtos,
) -> EmittedOperation {
    let base = function_base_name(&op.path, module_pascal);
    let fn_name = format!("{base}{}", pascal_segment(op.method.as_str()));

    let (itf_name, itf_fields, query_names) = if op.parameters.is_empty() {
        (None, Vec::new(), Vec::new())
    } else {
        let fields = op
            .parameters
            .iter()
            .map(|param| {
                let resolved = param
                    .schema
                    .as_ref()
                    .map(|fragment| field_type(index, fragment))
                    .unwrap_or(ResolvedType {
                        ts: "any".to_string(),
                        dto_key: None,
                    });
                if let Some(key) = &resolved.dto_key {
                    dtos.register(index, key);
                }
                ItfField {
                    name: param.name.clone(),
                    ts_type: resolved.ts,
                    description: param.description.clone(),
                }
            })
            .collect();

        let query = op
            .parameters
            .iter()
            .filter(|p| p.location == ParameterLocation::Query)
            .map(|p| p.name.clone())
            .collect();

        (Some(format!("{fn_name}{ITF_SUFFIX}")), fields, query)
    };

    let request = op.request_schema.as_ref().map(|f| field_type(index, f));
    if let Some(resolved) = &request {
        if let Some(key) = &resolved.dto_key {
            dtos.register(index, key);
        }
    }

    let response = op
        .response_schema
        .as_ref()
        .map(|f| field_type(index, f))
        .unwrap_or(ResolvedType {
            ts: "any".to_string(),
            dto_key: None,
        });
    if let Some(key) = &response.dto_key {
        dtos.register(index, key);
    }

    // A body argument only exists for non-GET methods with a usable request
    // type; "no request type" means "no data parameter" rather than a
    // dangling `data: any`.
    let data_type = match (op.method, request) {
        (HttpMethod::Get, _) => None,
        (_, Some(resolved)) if !resolved.is_any() => Some(resolved.ts),
        _ => None,
    };

    let path_expr = op.path.replace('{', "${params.");

    let path_rhs = if query_names.is_empty() || itf_name.is_none() {
        format!("`{path_expr}`")
    } else {
        let names = serde_json::to_string(&query_names).expect("query names serialize");
        format!("genQueryPath(params, {names}, `{path_expr}`)")
    };

    let mut args = Vec::new();
    if let Some(name) = &itf_name {
        args.push(format!("params: {name}"));
    }
    if let Some(ts) = &data_type {
        args.push(format!("data: {ts}"));
    }

    let call_args = if data_type.is_some() {
        "path, data"
    } else {
        "path"
    };

    EmittedOperation {
        fn_name,
        itf_name,
        itf_fields,
        summary: op.summary.clone(),
        http_fn: op.method.as_str(),
        args_sig: args.join(", "),
        return_type: response.ts,
        path_rhs,
        call_args,
        query_names,
    }
}
