//! Scorer configuration files
//!
//! ```yaml
//! metric: f1_macro
//! direction: maximize
//! response_method: predict
//! ```
//!
//! Values are kept as written and validated by
//! [`ScorerFactory::create_from_config`](super::ScorerFactory::create_from_config),
//! so a bad config fails with the same errors as a bad direct call.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

fn default_response_method() -> Option<String> {
    Some("predict".to_string())
}

/// Untyped scorer arguments as read from a config file
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScorerConfig {
    /// Metric name; any non-string value is rejected when the scorer is built
    pub metric: Value,
    /// `maximize` or `minimize`
    pub direction: String,
    /// Model output channel for named metrics (default: `predict`)
    #[serde(default = "default_response_method")]
    pub response_method: Option<String>,
}

impl ScorerConfig {
    pub fn new(metric: impl Into<Value>, direction: impl Into<String>) -> Self {
        Self {
            metric: metric.into(),
            direction: direction.into(),
            response_method: default_response_method(),
        }
    }

    pub fn with_response_method(mut self, response_method: impl Into<String>) -> Self {
        self.response_method = Some(response_method.into());
        self
    }

    /// Parse a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a `.json` file, or YAML for any other extension
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read scorer config {}", path.display()), e))?;

        let is_json = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let parsed = if is_json {
            serde_json::from_str(&content).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str(&content).map_err(|e| e.to_string())
        };

        parsed.map_err(|message| Error::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_yaml_defaults_response_method() {
        let config = ScorerConfig::from_yaml_str("metric: accuracy\ndirection: maximize\n").unwrap();
        assert_eq!(config.metric, json!("accuracy"));
        assert_eq!(config.direction, "maximize");
        assert_eq!(config.response_method.as_deref(), Some("predict"));
    }

    #[test]
    fn test_yaml_keeps_non_string_metric() {
        let config = ScorerConfig::from_yaml_str("metric: 42\ndirection: minimize\n").unwrap();
        assert_eq!(config.metric, json!(42));
    }

    #[test]
    fn test_explicit_null_response_method() {
        let config = ScorerConfig::from_json_str(
            r#"{"metric": "r2", "direction": "maximize", "response_method": null}"#,
        )
        .unwrap();
        assert_eq!(config.response_method, None);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let err = ScorerConfig::from_yaml_str("metric: r2\ndirection: maximize\ngreater_is_better: true\n");
        assert!(err.is_err());
    }

    #[test]
    fn test_missing_direction_rejected() {
        assert!(ScorerConfig::from_yaml_str("metric: r2\n").is_err());
    }

    #[test]
    fn test_builder_and_yaml_round_trip() {
        let config = ScorerConfig::new("roc_auc", "maximize").with_response_method("predict_proba");
        let yaml = config.to_yaml().unwrap();
        assert_eq!(ScorerConfig::from_yaml_str(&yaml).unwrap(), config);
    }

    #[test]
    fn test_from_file_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let yaml_path = dir.path().join("scorer.yaml");
        fs::write(&yaml_path, "metric: f1_macro\ndirection: maximize\n").unwrap();
        assert_eq!(ScorerConfig::from_file(&yaml_path).unwrap().metric, json!("f1_macro"));

        let json_path = dir.path().join("scorer.json");
        fs::write(&json_path, r#"{"metric": "r2", "direction": "maximize"}"#).unwrap();
        assert_eq!(ScorerConfig::from_file(&json_path).unwrap().metric, json!("r2"));
    }

    #[test]
    fn test_from_file_errors() {
        let dir = tempfile::tempdir().unwrap();

        let missing = ScorerConfig::from_file(dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(missing, Error::Io { .. }));

        let bad = dir.path().join("bad.yaml");
        fs::write(&bad, "metric: [unclosed\n").unwrap();
        let err = ScorerConfig::from_file(&bad).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().contains("bad.yaml"));
    }
}
