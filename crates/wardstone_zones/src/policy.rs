//! # Global Zone Policy
//!
//! Two values read once at manager construction and immutable thereafter: a
//! "check enabled" flag and a per-level allow-list. Reconfiguration means
//! recreating the manager; there is no reload contract.
//!
//! ## Config format
//!
//! ```toml
//! check_enabled = true
//! allowed_levels = ["creative", "plots"]
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{ZoneError, ZoneResult};

/// Process-wide zone checking policy.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ZonePolicy {
    /// Whether level-based edit checking is enabled at all.
    #[serde(default)]
    pub check_enabled: bool,

    /// Levels on which edits are allowed by default when checking is
    /// enabled.
    #[serde(default)]
    pub allowed_levels: Vec<String>,
}

impl ZonePolicy {
    /// Creates a policy in code (hosts without a config file).
    #[must_use]
    pub fn new(check_enabled: bool, allowed_levels: Vec<String>) -> Self {
        Self {
            check_enabled,
            allowed_levels,
        }
    }

    /// Loads the policy from a TOML file.
    ///
    /// # Errors
    ///
    /// [`ZoneError::Io`] if the file cannot be read,
    /// [`ZoneError::InvalidConfig`] if it does not parse.
    pub fn from_toml_file(path: impl AsRef<Path>) -> ZoneResult<Self> {
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| ZoneError::InvalidConfig(e.to_string()))
    }

    /// Default editability of a level before per-zone overrides.
    ///
    /// True unless checking is enabled AND the level is absent from the
    /// allow-list.
    #[must_use]
    pub fn default_edit_value(&self, level_name: &str) -> bool {
        !(self.check_enabled && !self.allowed_levels.iter().any(|l| l == level_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_edit_value() {
        let off = ZonePolicy::new(false, vec![]);
        assert!(off.default_edit_value("anything"));

        let on = ZonePolicy::new(true, vec!["creative".to_owned()]);
        assert!(on.default_edit_value("creative"));
        assert!(!on.default_edit_value("survival"));
    }

    #[test]
    fn test_parse_toml() {
        let policy: ZonePolicy = toml::from_str(
            r#"
            check_enabled = true
            allowed_levels = ["creative", "plots"]
            "#,
        )
        .unwrap();
        assert!(policy.check_enabled);
        assert_eq!(policy.allowed_levels, vec!["creative", "plots"]);
    }

    #[test]
    fn test_parse_toml_defaults() {
        let policy: ZonePolicy = toml::from_str("").unwrap();
        assert!(!policy.check_enabled);
        assert!(policy.allowed_levels.is_empty());
    }
}
