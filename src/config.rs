use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "/api";

/// Runtime settings the host hands to the browser client at `/config`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientConfig {
    pub api_base: String,
    pub debug_mode: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            debug_mode: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: ClientConfig = serde_json::from_str(r#"{"debugMode": true}"#).unwrap();
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert!(config.debug_mode);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(ClientConfig::default()).unwrap();
        assert_eq!(json["apiBase"], "/api");
        assert_eq!(json["debugMode"], false);
    }
}
