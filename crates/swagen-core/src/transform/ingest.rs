use indexmap::IndexMap;
use log::debug;

use crate::ir::{ApiModel, ApiModule, ApiOperation, ApiParameter, HttpMethod};
use crate::parse::media_type::MediaType;
use crate::parse::operation::{Operation, PathItem};
use crate::parse::parameter::ParameterOrRef;
use crate::parse::request_body::RequestBodyOrRef;
use crate::parse::response::ResponseOrRef;
use crate::parse::schema::SchemaOrRef;
use crate::parse::spec::SwaggerDoc;

/// Status code whose response schema becomes the callable's return type.
const SUCCESS_STATUS: &str = "200";

/// Preferred request/response content type.
const JSON_CONTENT: &str = "application/json";

/// Walk the parsed document into the grouped model: one `ApiOperation` per
/// path/method pair, bucketed into modules by lower-cased first tag.
/// Operations without a tag are skipped.
pub fn ingest(doc: &SwaggerDoc) -> ApiModel {
    let mut operations = Vec::new();

    for (path, item) in &doc.paths {
        collect_operations(path, item, &mut operations);
    }

    let modules = group_by_tag(&operations);

    let schemas = doc
        .components
        .as_ref()
        .map(|c| c.schemas.clone())
        .unwrap_or_default();

    ApiModel {
        operations,
        modules,
        schemas,
    }
}

fn collect_operations(path: &str, item: &PathItem, out: &mut Vec<ApiOperation>) {
    let path_params = resolve_parameters(&item.parameters);

    macro_rules! add_op {
        ($method:expr, $op:expr) => {
            if let Some(ref op) = $op {
                match build_operation($method, path, op, &path_params) {
                    Some(built) => out.push(built),
                    None => debug!("skipping untagged operation {} {}", $method.as_str(), path),
                }
            }
        };
    }

    add_op!(HttpMethod::Get, item.get);
    add_op!(HttpMethod::Post, item.post);
    add_op!(HttpMethod::Put, item.put);
    add_op!(HttpMethod::Delete, item.delete);
    add_op!(HttpMethod::Patch, item.patch);
    add_op!(HttpMethod::Options, item.options);
    add_op!(HttpMethod::Head, item.head);
    add_op!(HttpMethod::Trace, item.trace);
}

fn build_operation(
    method: HttpMethod,
    path: &str,
    op: &Operation,
    path_params: &[ApiParameter],
) -> Option<ApiOperation> {
    // First tag wins; no tag means the operation belongs to no module.
    let tag = op.tags.first()?.clone();

    let mut parameters = path_params.to_vec();
    parameters.extend(resolve_parameters(&op.parameters));

    let request_schema = op.request_body.as_ref().and_then(request_schema);
    let response_schema = response_schema(op);

    Some(ApiOperation {
        method,
        path: path.to_string(),
        tag,
        summary: op.summary.clone(),
        parameters,
        request_schema,
        response_schema,
    })
}

fn resolve_parameters(params: &[ParameterOrRef]) -> Vec<ApiParameter> {
    params
        .iter()
        .filter_map(|p| match p {
            ParameterOrRef::Parameter(param) => Some(ApiParameter {
                name: param.name.clone(),
                location: param.location,
                schema: param.schema.clone(),
                description: param.description.clone(),
            }),
            // The loader collaborator pre-resolves parameter references.
            ParameterOrRef::Ref { .. } => None,
        })
        .collect()
}

fn request_schema(body: &RequestBodyOrRef) -> Option<SchemaOrRef> {
    match body {
        RequestBodyOrRef::RequestBody(rb) => content_schema(&rb.content),
        RequestBodyOrRef::Ref { .. } => None,
    }
}

fn response_schema(op: &Operation) -> Option<SchemaOrRef> {
    match op.responses.get(SUCCESS_STATUS)? {
        ResponseOrRef::Response(resp) => content_schema(&resp.content),
        ResponseOrRef::Ref { .. } => None,
    }
}

/// Prefer `application/json`, fall back to the first declared content type.
fn content_schema(content: &IndexMap<String, MediaType>) -> Option<SchemaOrRef> {
    content
        .get(JSON_CONTENT)
        .or_else(|| content.first().map(|(_, mt)| mt))?
        .schema
        .clone()
}

fn group_by_tag(operations: &[ApiOperation]) -> Vec<ApiModule> {
    let mut groups: IndexMap<String, Vec<usize>> = IndexMap::new();

    for (i, op) in operations.iter().enumerate() {
        groups.entry(op.tag.to_lowercase()).or_default().push(i);
    }

    groups
        .into_iter()
        .map(|(name, operations)| ApiModule { name, operations })
        .collect()
}
