use crate::parse::parameter::ParameterLocation;
use crate::parse::schema::SchemaOrRef;

/// HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
    Head,
    Trace,
}

impl HttpMethod {
    /// Lower-case name, used as the dispatch key on the generated HTTP client.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Delete => "delete",
            HttpMethod::Patch => "patch",
            HttpMethod::Options => "options",
            HttpMethod::Head => "head",
            HttpMethod::Trace => "trace",
        }
    }
}

/// A parameter on an operation, keeping its raw schema fragment for typing.
#[derive(Debug, Clone)]
pub struct ApiParameter {
    pub name: String,
    pub location: ParameterLocation,
    pub schema: Option<SchemaOrRef>,
    pub description: Option<String>,
}

/// One HTTP verb on one path, constructed once during ingestion.
///
/// Request and response schemas stay unresolved fragments: the raw schema
/// key is the DTO identity, and resolution happens per module at emission
/// time so each module tracks its own reachable DTO set.
#[derive(Debug, Clone)]
pub struct ApiOperation {
    pub method: HttpMethod,
    pub path: String,
    /// First declared tag; operations without tags never reach the model.
    pub tag: String,
    pub summary: Option<String>,
    pub parameters: Vec<ApiParameter>,
    pub request_schema: Option<SchemaOrRef>,
    pub response_schema: Option<SchemaOrRef>,
}
