use std::fs;
use std::time::Duration;

use anyhow::{Context, Result};
use log::info;

use swagen_core::parse;
use swagen_core::parse::spec::SwaggerDoc;

/// Timeout for fetching a remote document.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Load and parse a Swagger/OpenAPI document from an http(s) URL or a local
/// path. Any failure here happens before a single output file is written.
pub fn load_document(location: &str) -> Result<SwaggerDoc> {
    let content = if is_url(location) {
        fetch(location)?
    } else {
        fs::read_to_string(location).with_context(|| format!("failed to read {location}"))?
    };

    parse_content(location, &content)
}

fn is_url(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

fn fetch(url: &str) -> Result<String> {
    info!("fetching {url}");
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .context("failed to build HTTP client")?;

    let response = client
        .get(url)
        .send()
        .and_then(|r| r.error_for_status())
        .with_context(|| format!("failed to fetch {url}"))?;

    response
        .text()
        .with_context(|| format!("failed to read body of {url}"))
}

/// YAML by extension, otherwise JSON first with a YAML fallback; remote
/// documents are usually `swagger.json` or an extensionless endpoint.
fn parse_content(location: &str, content: &str) -> Result<SwaggerDoc> {
    let doc = if location.ends_with(".yaml") || location.ends_with(".yml") {
        parse::from_yaml(content)?
    } else {
        match parse::from_json(content) {
            Ok(doc) => doc,
            Err(json_err) => parse::from_yaml(content)
                .map_err(|_| json_err)
                .context("document is neither valid JSON nor YAML")?,
        }
    };
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_url() {
        assert!(is_url("https://example.com/swagger/v1/swagger.json"));
        assert!(is_url("http://localhost:44305/swagger.json"));
        assert!(!is_url("specs/identity.yaml"));
    }

    #[test]
    fn test_parse_json_without_extension() {
        let content = r#"{"openapi":"3.0.1","info":{"title":"T","version":"1"},"paths":{}}"#;
        let doc = parse_content("https://example.com/swagger", content).unwrap();
        assert_eq!(doc.info.title, "T");
    }

    #[test]
    fn test_parse_yaml_by_extension() {
        let content = "openapi: 3.0.1\ninfo:\n  title: T\n  version: '1'\n";
        let doc = parse_content("spec.yaml", content).unwrap();
        assert_eq!(doc.openapi, "3.0.1");
    }

    #[test]
    fn test_yaml_fallback_for_extensionless_content() {
        let content = "openapi: 3.0.1\ninfo:\n  title: T\n  version: '1'\n";
        let doc = parse_content("https://example.com/openapi", content).unwrap();
        assert_eq!(doc.openapi, "3.0.1");
    }
}
