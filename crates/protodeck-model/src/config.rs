//! Platform-wide configuration

use serde::{Deserialize, Serialize};

/// Static platform configuration
///
/// Branding strings shown on platform screens. The export-envelope version is
/// a separate constant; it tracks the file format, not the platform release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformConfig {
    /// Display name of the platform
    pub name: String,
    /// Platform release version
    pub version: String,
    /// One-line description shown on the landing screen
    pub description: String,
    /// Name of the design system the prototypes are built against
    pub design_system: Option<String>,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            name: "Protodeck Prototype Platform".to_string(),
            version: "2.0.0".to_string(),
            description: "Research-backed prototype documentation system".to_string(),
            design_system: Some("Protodeck Design System".to_string()),
        }
    }
}

impl PlatformConfig {
    /// Version string written into the export envelope
    #[inline]
    #[must_use]
    pub fn export_version() -> &'static str {
        "1.0.0"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_populated() {
        let cfg = PlatformConfig::default();
        assert!(!cfg.name.is_empty());
        assert_eq!(cfg.version, "2.0.0");
        assert_eq!(PlatformConfig::export_version(), "1.0.0");
    }
}
