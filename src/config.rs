//! Configuration file (.dejadiff.conf) parsing and handling
//!
//! The .dejadiff.conf file uses INI format with a [DEFAULT] section
//! holding defaults for options that would otherwise be passed on the
//! command line. CLI flags always win over config values.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Name of the configuration file, looked up in the working directory.
pub const CONFIG_FILE: &str = ".dejadiff.conf";

/// Configuration loaded from .dejadiff.conf
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DejadiffConfig {
    /// Default target name when no --target is given.
    pub target: Option<String>,

    /// Collapse wholly gone/new scripts in pairwise comparisons.
    pub collapse: bool,

    /// Emit org-mode output by default.
    pub org: bool,
}

impl DejadiffConfig {
    /// Load configuration from the working directory; a missing file
    /// yields the defaults.
    pub fn load() -> Result<Self> {
        let path = Path::new(CONFIG_FILE);
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a .dejadiff.conf file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", CONFIG_FILE, e)))?;

        Self::parse(&contents)
    }

    /// Parse configuration from a string
    pub fn parse(contents: &str) -> Result<Self> {
        let ini: HashMap<String, HashMap<String, String>> = serde_ini::from_str(contents)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", CONFIG_FILE, e)))?;

        let default = ini
            .get("DEFAULT")
            .ok_or_else(|| Error::Config(format!("No [DEFAULT] section in {}", CONFIG_FILE)))?;

        Ok(DejadiffConfig {
            target: default.get("target").cloned(),
            collapse: parse_bool(default.get("collapse"), "collapse")?,
            org: parse_bool(default.get("org"), "org")?,
        })
    }
}

fn parse_bool(value: Option<&String>, option: &str) -> Result<bool> {
    match value.map(String::as_str) {
        None => Ok(false),
        Some("true") | Some("yes") | Some("1") => Ok(true),
        Some("false") | Some("no") | Some("0") => Ok(false),
        Some(other) => Err(Error::Config(format!(
            "Invalid boolean {:?} for option {}",
            other, option
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = DejadiffConfig::parse(
            "[DEFAULT]\n\
             target=unix\n\
             collapse=true\n\
             org=no\n",
        )
        .unwrap();
        assert_eq!(config.target.as_deref(), Some("unix"));
        assert!(config.collapse);
        assert!(!config.org);
    }

    #[test]
    fn test_parse_minimal_config() {
        let config = DejadiffConfig::parse("[DEFAULT]\n").unwrap();
        assert!(config.target.is_none());
        assert!(!config.collapse);
        assert!(!config.org);
    }

    #[test]
    fn test_missing_default_section_is_error() {
        let result = DejadiffConfig::parse("[OTHER]\ntarget=unix\n");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_invalid_boolean_is_error() {
        let result = DejadiffConfig::parse("[DEFAULT]\ncollapse=maybe\n");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_load_from_missing_file_is_error() {
        let result = DejadiffConfig::load_from_file(Path::new("/nonexistent/.dejadiff.conf"));
        assert!(result.is_err());
    }
}
