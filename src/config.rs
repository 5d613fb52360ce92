/// Panel configuration, optionally supplied as JSON by the page that starts the panel

use crate::error::PanelError;
use serde::{Deserialize, Serialize};

/// 1x1 transparent PNG shown for tabs without a favicon
pub const EMPTY_ICON: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mNkYAAAAAYAAjCB0C8AAAAASUVORK5CYII=";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PanelConfig {
    pub empty_icon: String,
    pub log_level: String,
    pub suppress_native_context_menu: bool,
}

impl PanelConfig {
    pub fn from_json(json: &str) -> Result<PanelConfig, PanelError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Falls back to `Info` for unknown level names
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        PanelConfig {
            empty_icon: EMPTY_ICON.to_string(),
            log_level: "info".to_string(),
            suppress_native_context_menu: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_gives_defaults() {
        let config = PanelConfig::from_json("{}").unwrap();
        assert_eq!(config, PanelConfig::default());
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn test_partial_override() {
        let config = PanelConfig::from_json(
            r#"{ "logLevel": "debug", "suppressNativeContextMenu": false }"#,
        )
        .unwrap();

        assert_eq!(config.log_level(), log::Level::Debug);
        assert!(!config.suppress_native_context_menu);
        assert_eq!(config.empty_icon, EMPTY_ICON);
    }

    #[test]
    fn test_unknown_level_falls_back() {
        let config = PanelConfig {
            log_level: "chatty".to_string(),
            ..PanelConfig::default()
        };
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let error = PanelConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(error, PanelError::Config(_)));
        assert!(error.to_string().starts_with("invalid panel config"));
    }
}
