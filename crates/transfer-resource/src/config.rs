use std::fs::read_to_string;
use std::path::Path;

use anyhow::Result;
use serde::Deserialize;
use tracing::debug;

use transfer_endpoint::SelectionPolicy;

pub const SHELL_CONFIG_FILENAME: &str = "transfer.toml";

/// Settings shared by every endpoint the shell manages, read from `transfer.toml`.
///
/// ```toml
/// default_project_id = "prj-analytics"
/// selection_policy = "strict"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// project used by endpoints that do not name their own
    pub default_project_id: Option<String>,
    /// treatment of several populated connector blocks, `strict` or `first-match`
    pub selection_policy: SelectionPolicy,
}

impl ShellConfig {
    pub fn from_toml_str(input: &str) -> Result<Self> {
        toml::from_str(input).map_err(|err| anyhow::anyhow!(err))
    }

    /// Read the shell configuration; a missing file yields the defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(?path, "no shell config, using defaults");
            return Ok(Self::default());
        }
        let contents = read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        debug!(?config, "loaded shell config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse() {
        let config = ShellConfig::from_toml_str(
            r#"
            default_project_id = "prj-analytics"
            selection_policy = "first-match"
            "#,
        )
        .expect("parsed");
        assert_eq!(
            config,
            ShellConfig {
                default_project_id: Some("prj-analytics".to_owned()),
                selection_policy: SelectionPolicy::FirstMatch,
            }
        );
    }

    #[test]
    fn test_defaults() {
        let config = ShellConfig::from_toml_str("").expect("parsed");
        assert_eq!(config.default_project_id, None);
        assert_eq!(config.selection_policy, SelectionPolicy::Strict);
    }

    #[test]
    fn test_unknown_policy_rejected() {
        let err = ShellConfig::from_toml_str(r#"selection_policy = "any""#)
            .expect_err("unknown policy");
        assert!(err.to_string().contains("unknown variant"));
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().expect("temp dir created");
        let config =
            ShellConfig::from_file(dir.path().join(SHELL_CONFIG_FILENAME)).expect("defaults");
        assert_eq!(config, ShellConfig::default());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().expect("temp dir created");
        let path = dir.path().join(SHELL_CONFIG_FILENAME);
        std::fs::write(&path, "default_project_id = \"prj-1\"\n").expect("written");
        let config = ShellConfig::from_file(&path).expect("parsed");
        assert_eq!(config.default_project_id.as_deref(), Some("prj-1"));
    }
}
