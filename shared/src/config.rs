//! Console configuration.

use crate::error::ConsoleError;
use crate::pagination::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};

/// localStorage key holding an optional JSON override of [`ConsoleConfig`].
pub const CONFIG_STORAGE_KEY: &str = "console_config";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Path of the GraphQL endpoint, relative to the page origin
    pub graphql_path: String,
    pub page_size: usize,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            graphql_path: "/v1/graphql".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ConsoleConfig {
    pub fn from_json_str(contents: &str) -> Result<Self, ConsoleError> {
        let mut config: ConsoleConfig =
            serde_json::from_str(contents).map_err(|e| ConsoleError::Config(e.to_string()))?;
        config.page_size = config.page_size.max(1);
        Ok(config)
    }

    /// Parse `contents` if present, falling back to defaults on any problem.
    pub fn load_or_default(contents: Option<&str>) -> Self {
        match contents.map(Self::from_json_str) {
            Some(Ok(config)) => {
                log::info!("Loaded console config override");
                config
            }
            Some(Err(e)) => {
                log::warn!("{}; using defaults", e);
                Self::default()
            }
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config = ConsoleConfig::from_json_str(r#"{"page_size": 10}"#).unwrap();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.graphql_path, "/v1/graphql");
    }

    #[test]
    fn zero_page_size_is_coerced() {
        let config = ConsoleConfig::from_json_str(r#"{"page_size": 0}"#).unwrap();
        assert_eq!(config.page_size, 1);
    }

    #[test]
    fn invalid_json_falls_back() {
        assert!(matches!(
            ConsoleConfig::from_json_str("{not json"),
            Err(ConsoleError::Config(_))
        ));
        assert_eq!(
            ConsoleConfig::load_or_default(Some("{not json")),
            ConsoleConfig::default()
        );
        assert_eq!(ConsoleConfig::load_or_default(None), ConsoleConfig::default());
    }
}
