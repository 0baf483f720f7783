pub mod media_type;
pub mod operation;
pub mod parameter;
pub mod request_body;
pub mod response;
pub mod schema;
pub mod spec;

use crate::error::ParseError;
use spec::SwaggerDoc;

/// Parse a Swagger/OpenAPI document from YAML.
pub fn from_yaml(input: &str) -> Result<SwaggerDoc, ParseError> {
    let doc: SwaggerDoc = serde_yaml_ng::from_str(input)?;
    validate_version(&doc)?;
    Ok(doc)
}

/// Parse a Swagger/OpenAPI document from JSON.
pub fn from_json(input: &str) -> Result<SwaggerDoc, ParseError> {
    let doc: SwaggerDoc = serde_json::from_str(input)?;
    validate_version(&doc)?;
    Ok(doc)
}

fn validate_version(doc: &SwaggerDoc) -> Result<(), ParseError> {
    if !doc.openapi.starts_with("3.") {
        return Err(ParseError::UnsupportedVersion(doc.openapi.clone()));
    }
    Ok(())
}
