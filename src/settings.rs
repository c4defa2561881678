//! Extension configuration supplied by the host.
//!
//! Settings arrive as JSON (editor-produced) or RON (on-disk profiles).
//! Every field has a default, so a partial document is enough.

use crate::ports::{NamingError, PortNaming, PortType};
use crate::preview::DEFAULT_PREVIEW_HEIGHT;
use serde::{Deserialize, Serialize};

/// Configuration for one installed extension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Node type names this extension augments
    #[serde(default = "default_node_types")]
    pub node_types: Vec<String>,
    /// Prefix of the positional input names
    #[serde(default = "default_port_prefix")]
    pub port_prefix: String,
    /// Data type tag of appended inputs
    #[serde(default = "default_port_type")]
    pub port_type: PortType,
    /// Smallest allowed input count
    #[serde(default = "default_min_inputs")]
    pub min_inputs: u32,
    /// Largest allowed input count
    #[serde(default = "default_max_inputs")]
    pub max_inputs: u32,
    /// Count preselected on fresh nodes
    #[serde(default = "default_min_inputs")]
    pub default_inputs: u32,
    /// Base address of the host's resource server
    #[serde(default)]
    pub server_base: String,
    /// Height hint for the preview container
    #[serde(default = "default_preview_height")]
    pub preview_height: u32,
}

fn default_node_types() -> Vec<String> {
    vec!["ImageComposite".to_string()]
}

fn default_port_prefix() -> String {
    "image".to_string()
}

fn default_port_type() -> PortType {
    PortType::Image
}

fn default_min_inputs() -> u32 {
    1
}

fn default_max_inputs() -> u32 {
    10
}

fn default_preview_height() -> u32 {
    DEFAULT_PREVIEW_HEIGHT
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            node_types: default_node_types(),
            port_prefix: default_port_prefix(),
            port_type: default_port_type(),
            min_inputs: default_min_inputs(),
            max_inputs: default_max_inputs(),
            default_inputs: default_min_inputs(),
            server_base: String::new(),
            preview_height: default_preview_height(),
        }
    }
}

impl Settings {
    /// Parse and validate settings from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Parse and validate settings from a RON document.
    pub fn from_ron(s: &str) -> Result<Self, SettingsError> {
        let settings: Self = ron::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize to RON format
    pub fn to_ron(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
    }

    /// Check the count range and the naming prefix.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.min_inputs < 1 || self.max_inputs < self.min_inputs {
            return Err(SettingsError::BadCountRange {
                min: self.min_inputs,
                max: self.max_inputs,
            });
        }
        if self.default_inputs < self.min_inputs || self.default_inputs > self.max_inputs {
            return Err(SettingsError::BadDefaultCount(self.default_inputs));
        }
        self.naming()?;
        Ok(())
    }

    /// Compiled naming convention for the configured prefix.
    pub fn naming(&self) -> Result<PortNaming, NamingError> {
        PortNaming::new(&self.port_prefix)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid settings RON: {0}")]
    Ron(#[from] ron::error::SpannedError),

    #[error("Input count range {min}..{max} is empty or starts below 1")]
    BadCountRange { min: u32, max: u32 },

    #[error("Default input count {0} falls outside the allowed range")]
    BadDefaultCount(u32),

    #[error(transparent)]
    Naming(#[from] NamingError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_yields_defaults() {
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.min_inputs, 1);
        assert_eq!(settings.max_inputs, 10);
        assert_eq!(settings.port_prefix, "image");
    }

    #[test]
    fn test_partial_document_overrides_defaults() {
        let settings = Settings::from_json(
            r#"{"node_types":["AudioMix"],"port_prefix":"track","port_type":"Audio","max_inputs":8}"#,
        )
        .unwrap();
        assert_eq!(settings.node_types, ["AudioMix"]);
        assert_eq!(settings.port_prefix, "track");
        assert_eq!(settings.port_type, PortType::Audio);
        assert_eq!(settings.max_inputs, 8);
        assert_eq!(settings.min_inputs, 1);
    }

    #[test]
    fn test_rejects_inverted_count_range() {
        let err = Settings::from_json(r#"{"min_inputs":5,"max_inputs":2}"#).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::BadCountRange { min: 5, max: 2 }
        ));
    }

    #[test]
    fn test_rejects_zero_minimum() {
        let err = Settings::from_json(r#"{"min_inputs":0}"#).unwrap_err();
        assert!(matches!(err, SettingsError::BadCountRange { .. }));
    }

    #[test]
    fn test_rejects_default_outside_range() {
        let err = Settings::from_json(r#"{"default_inputs":12}"#).unwrap_err();
        assert!(matches!(err, SettingsError::BadDefaultCount(12)));
    }

    #[test]
    fn test_rejects_empty_prefix() {
        let err = Settings::from_json(r#"{"port_prefix":""}"#).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Naming(NamingError::EmptyPrefix)
        ));
    }

    #[test]
    fn test_ron_round_trip() {
        let mut settings = Settings::default();
        settings.server_base = "http://127.0.0.1:8188".to_string();

        let ron = settings.to_ron().unwrap();
        assert_eq!(Settings::from_ron(&ron).unwrap(), settings);
    }
}
