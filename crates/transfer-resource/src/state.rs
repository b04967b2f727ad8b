use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use transfer_endpoint::EndpointConfig;

/// Persisted state of one endpoint, the flat configuration merged with what
/// the server resolved
#[derive(Debug, Clone)]
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `None` until the endpoint was created
    pub fn load(&self) -> Result<Option<EndpointConfig>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let state = EndpointConfig::from_file(&self.path)
            .with_context(|| format!("loading state from {}", self.path.display()))?;
        Ok(Some(state))
    }

    pub fn save(&self, state: &EndpointConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        state
            .write_to_file(&self.path)
            .with_context(|| format!("saving state to {}", self.path.display()))?;
        debug!(path = ?self.path, "state saved");
        Ok(())
    }

    pub fn remove(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use transfer_endpoint::connectors::saas::{FacebookMarketingSource, IntercomSource};
    use transfer_endpoint::{EndpointSettings, Field};

    use super::*;

    #[test]
    fn test_state_round_trip() {
        //given
        let dir = tempfile::tempdir().expect("temp dir created");
        let file = StateFile::new(dir.path().join("state").join("intercom.yaml"));
        let state = EndpointConfig {
            id: "ep-1".into(),
            name: "intercom".into(),
            project_id: "prj-support".into(),
            description: Field::Known(String::new()),
            settings: EndpointSettings {
                intercom_source: Some(IntercomSource {
                    start_date: "2024-01-01".into(),
                    access_token: "token".into(),
                }),
                ..Default::default()
            },
        };

        //when
        assert_eq!(file.load().expect("no state yet"), None);
        file.save(&state).expect("saved");
        let loaded = file.load().expect("loaded");

        //then
        assert_eq!(loaded, Some(state));
        file.remove().expect("removed");
        assert!(!file.path().exists());
    }

    #[test]
    fn test_empty_record_list_survives_state_round_trip() {
        //given
        let dir = tempfile::tempdir().expect("temp dir created");
        let plan_path = dir.path().join("plan.yaml");
        std::fs::write(
            &plan_path,
            r#"
id: ep-7
name: ads
project_id: prj-marketing
settings:
  facebookmarketing_source:
    account_id: "1234567890"
    access_token: token
    start_date: "2024-01-01"
    include_deleted: false
    custom_insights: []
"#,
        )
        .expect("written");
        let plan = EndpointConfig::from_file(&plan_path).expect("plan parsed");
        let file = StateFile::new(dir.path().join("state.yaml"));

        //when
        file.save(&plan).expect("saved");
        let raw = std::fs::read_to_string(file.path()).expect("state read");
        let loaded = file.load().expect("loaded").expect("state present");

        //then
        assert!(raw.contains("custom_insights: []"), "{raw}");
        assert!(raw.contains("include_deleted: false"), "{raw}");
        let source: &FacebookMarketingSource = loaded
            .settings
            .facebookmarketing_source
            .as_ref()
            .expect("facebook settings");
        assert_eq!(source.custom_insights, Field::Known(vec![]));
        assert_eq!(loaded, plan);
    }
}
