use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Project configuration loaded from `.swagen.yaml`. Every field can also be
/// supplied by CLI flag or interactive prompt; flags win over the file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SwagenConfig {
    /// Document location: an http(s) URL or a local path.
    pub input: Option<String>,
    /// Module to generate, or `allapi` for every module.
    pub module: Option<String>,
    /// Output directory for the generated files.
    pub output: String,
}

impl Default for SwagenConfig {
    fn default() -> Self {
        Self {
            input: None,
            module: None,
            output: "src/api".to_string(),
        }
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".swagen.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<SwagenConfig>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
    let config: SwagenConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("failed to parse config {}: {}", path.display(), e))?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# swagen configuration
# input: https://localhost:44305/swagger/v1/swagger.json
# module: roles         # one module per run, or allapi for everything
output: src/api
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SwagenConfig::default();
        assert!(config.input.is_none());
        assert!(config.module.is_none());
        assert_eq!(config.output, "src/api");
    }

    #[test]
    fn test_parse_config_yaml() {
        let yaml = r#"
input: https://example.com/swagger/v1/swagger.json
module: roles
output: web/src/api
"#;
        let config: SwagenConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(
            config.input.as_deref(),
            Some("https://example.com/swagger/v1/swagger.json")
        );
        assert_eq!(config.module.as_deref(), Some("roles"));
        assert_eq!(config.output, "web/src/api");
    }

    #[test]
    fn test_parse_minimal_config() {
        let yaml = "module: users\n";
        let config: SwagenConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.module.as_deref(), Some("users"));
        // Defaults applied
        assert_eq!(config.output, "src/api");
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "module: roles\noutput: web/api\n").unwrap();

        let config = load_config(&path).unwrap().expect("config should load");
        assert_eq!(config.module.as_deref(), Some("roles"));
        assert_eq!(config.output, "web/api");
    }

    #[test]
    fn test_load_config_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        assert!(load_config(&path).unwrap().is_none());
    }
}
