//! Port type tags and the positional input-naming convention.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// The type of data a port accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PortType {
    /// Raster image
    Image,
    /// Audio clip
    Audio,
    /// Video clip
    Video,
    /// Mask / alpha channel
    Mask,
    /// Any type (for generic nodes)
    Any,
}

impl PortType {
    /// Wire tag understood by the host editor.
    pub fn as_tag(&self) -> &'static str {
        match self {
            PortType::Image => "IMAGE",
            PortType::Audio => "AUDIO",
            PortType::Video => "VIDEO",
            PortType::Mask => "MASK",
            PortType::Any => "*",
        }
    }
}

/// Builds and recognizes positional input names of the form
/// `<prefix>_<n>`, with a 1-based suffix.
///
/// Names that do not follow the convention belong to the host's static
/// port declarations and are never touched by the reconciler.
#[derive(Debug, Clone)]
pub struct PortNaming {
    prefix: String,
    pattern: Regex,
}

impl PortNaming {
    /// Compile the convention for `prefix`.
    pub fn new(prefix: &str) -> Result<Self, NamingError> {
        if prefix.is_empty() {
            return Err(NamingError::EmptyPrefix);
        }
        let pattern = Regex::new(&format!("^{}_([1-9][0-9]*)$", regex::escape(prefix)))?;
        Ok(Self {
            prefix: prefix.to_string(),
            pattern,
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Name of the port at 1-based position `suffix`.
    pub fn port_name(&self, suffix: u32) -> String {
        format!("{}_{}", self.prefix, suffix)
    }

    /// Parse the 1-based suffix out of `name`, if it follows the convention.
    pub fn suffix_of(&self, name: &str) -> Option<u32> {
        self.pattern.captures(name)?.get(1)?.as_str().parse().ok()
    }

    /// Whether `name` follows the convention.
    pub fn matches(&self, name: &str) -> bool {
        self.pattern.is_match(name)
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum NamingError {
    #[error("Port name prefix must not be empty")]
    EmptyPrefix,
    #[error("Invalid port name pattern: {0}")]
    Pattern(#[from] regex::Error),
}
