//!
//! # Endpoint configuration
//!
//! [`EndpointConfig`] is the flat, user authored description of one endpoint.
//! It is read from YAML, turned into create or update requests and rebuilt
//! from the endpoint the server returns.
//!
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Result;
use schemars::{JsonSchema, Schema};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use transfer_api::endpoint::{
    CreateEndpointRequest, Endpoint, EndpointSettings as WireEndpointSettings, FieldMask,
    UpdateEndpointRequest,
};

use crate::diagnostics::{AttrPath, Diagnostics};
use crate::field::Field;
use crate::scalar;
use crate::settings::{EndpointSettings, SelectionPolicy};

const SETTINGS: &str = "settings";

#[derive(thiserror::Error, Debug)]
pub enum EndpointError {
    #[error("invalid endpoint configuration\n{0}")]
    Invalid(Diagnostics),
    #[error("endpoint `{0}` has no id, it was never created")]
    MissingId(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct EndpointConfig {
    /// assigned by the server on create
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub id: Field<String>,

    #[serde(skip_serializing_if = "Field::is_absent")]
    pub name: Field<String>,

    #[serde(skip_serializing_if = "Field::is_absent")]
    pub project_id: Field<String>,

    #[serde(skip_serializing_if = "Field::is_absent")]
    pub description: Field<String>,

    pub settings: EndpointSettings,
}

impl EndpointConfig {
    pub fn from_file<P: Into<PathBuf>>(path: P) -> Result<Self> {
        let mut file = File::open(path.into())?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        let config: Self = serde_yaml::from_str(&contents)?;

        debug!(name = ?config.name, "loaded endpoint config");
        Ok(config)
    }

    pub fn from_value(value: serde_yaml::Value) -> Result<Self> {
        let config: Self = serde_yaml::from_value(value)?;

        debug!(name = ?config.name, "loaded endpoint config");
        Ok(config)
    }

    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    /// JSON schema of the configuration file
    pub fn json_schema() -> Schema {
        schemars::schema_for!(EndpointConfig)
    }

    /// fill an absent project with `default`
    pub fn with_default_project(mut self, default: Option<&str>) -> Self {
        if let (Field::Absent, Some(project)) = (&self.project_id, default) {
            self.project_id = Field::Known(project.to_owned());
        }
        self
    }

    /// server id, only known once the endpoint was created
    pub fn endpoint_id(&self) -> Result<&str, EndpointError> {
        self.id
            .known()
            .filter(|id| !id.is_empty())
            .map(String::as_str)
            .ok_or_else(|| EndpointError::MissingId(self.display_name().to_owned()))
    }

    fn display_name(&self) -> &str {
        self.name.known().map(String::as_str).unwrap_or_default()
    }

    #[instrument(skip(self), fields(name = self.display_name()))]
    pub fn create_request(
        &self,
        policy: SelectionPolicy,
    ) -> Result<CreateEndpointRequest, EndpointError> {
        let mut diags = Diagnostics::new();
        let request = CreateEndpointRequest {
            project_id: scalar::required_to_wire(
                &self.project_id,
                &AttrPath::root("project_id"),
                &mut diags,
            ),
            name: scalar::required_to_wire(&self.name, &AttrPath::root("name"), &mut diags),
            description: scalar::to_wire(
                &self.description,
                &AttrPath::root("description"),
                &mut diags,
            ),
            settings: self
                .settings
                .to_wire(policy, &AttrPath::root(SETTINGS), &mut diags),
        };
        diags.into_result(request).map_err(EndpointError::Invalid)
    }

    /// Update of endpoint `id`. The mask names the identity fields the
    /// author wrote and the selected connector block.
    #[instrument(skip(self), fields(name = self.display_name()))]
    pub fn update_request(
        &self,
        id: &str,
        policy: SelectionPolicy,
    ) -> Result<UpdateEndpointRequest, EndpointError> {
        let mut diags = Diagnostics::new();
        let settings_path = AttrPath::root(SETTINGS);
        let mut paths = vec!["name".to_owned()];
        if !self.description.is_absent() {
            paths.push("description".to_owned());
        }

        let name = scalar::required_to_wire(&self.name, &AttrPath::root("name"), &mut diags);
        let description =
            scalar::to_wire(&self.description, &AttrPath::root("description"), &mut diags);
        let settings = self
            .settings
            .select(policy, &settings_path, &mut diags)
            .map(|connector| {
                paths.push(format!("{SETTINGS}.{}", connector.name()));
                WireEndpointSettings::from(connector.to_wire(&settings_path, &mut diags))
            });
        debug!(?paths, "update mask");

        let request = UpdateEndpointRequest {
            endpoint_id: id.to_owned(),
            name,
            description,
            settings,
            update_mask: Some(FieldMask { paths }),
        };
        diags.into_result(request).map_err(EndpointError::Invalid)
    }

    /// A new configuration built from the server's endpoint, `self` supplies
    /// what the server does not echo back.
    pub fn merge_response(&self, endpoint: &Endpoint) -> (Self, Diagnostics) {
        let mut diags = Diagnostics::new();
        let merged = Self {
            id: scalar::from_wire(&endpoint.id, &self.id),
            name: scalar::from_wire(&endpoint.name, &self.name),
            project_id: scalar::from_wire(&endpoint.project_id, &self.project_id),
            description: scalar::from_wire(&endpoint.description, &self.description),
            settings: EndpointSettings::from_wire(
                endpoint.settings.as_ref(),
                &self.settings,
                &AttrPath::root(SETTINGS),
                &mut diags,
            ),
        };
        (merged, diags)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use transfer_api::Settings;
    use transfer_api::common::{Secret, host_connection, tls_mode};
    use transfer_api::kafka::{kafka_connection, kafka_target_topic_settings, serializer};

    use crate::diagnostics::DiagnosticKind;

    use super::*;

    #[test]
    fn test_postgres_fixture_create_request() {
        //given
        let config = EndpointConfig::from_file("test-data/postgres-source.yaml")
            .expect("fixture parses");

        //when
        let request = config
            .create_request(SelectionPolicy::Strict)
            .expect("valid request");

        //then
        assert_eq!(request.project_id, "prj-analytics");
        assert_eq!(request.name, "orders-replica");
        let Some(Settings::PostgresSource(source)) = request.settings.and_then(|s| s.settings)
        else {
            panic!("expected postgres source");
        };
        assert_eq!(source.password, Some(Secret::raw("s3cr3t")));
        assert_eq!(source.exclude_tables, Vec::<String>::new());
        let Some(host_connection::Connection::OnPremise(self_hosted)) =
            source.connection.and_then(|c| c.connection)
        else {
            panic!("expected self hosted connection");
        };
        assert_eq!(self_hosted.hosts, vec!["pg-1.internal", "pg-2.internal"]);
        assert_eq!(self_hosted.port, 5432);
        assert!(matches!(
            self_hosted.tls_mode.and_then(|t| t.mode),
            Some(tls_mode::Mode::Disabled(_))
        ));
    }

    #[test]
    fn test_kafka_fixture_needs_project() {
        //given
        let config =
            EndpointConfig::from_file("test-data/kafka-target.yaml").expect("fixture parses");

        //when
        let err = config
            .create_request(SelectionPolicy::Strict)
            .expect_err("project is missing");

        //then
        let EndpointError::Invalid(diags) = err else {
            panic!("expected invalid configuration");
        };
        assert_eq!(diags.to_string(), "error: project_id: missing required value");
    }

    #[test]
    fn test_default_project_is_used() {
        //given
        let config = EndpointConfig::from_file("test-data/kafka-target.yaml")
            .expect("fixture parses")
            .with_default_project(Some("prj-default"));

        //when
        let request = config
            .create_request(SelectionPolicy::Strict)
            .expect("valid request");

        //then
        assert_eq!(request.project_id, "prj-default");
        let Some(Settings::KafkaTarget(target)) = request.settings.and_then(|s| s.settings) else {
            panic!("expected kafka target");
        };
        assert!(matches!(
            target.connection.and_then(|c| c.connection),
            Some(kafka_connection::Connection::ClusterId(_))
        ));
        assert!(matches!(
            target.topic_settings.and_then(|t| t.topic_settings),
            Some(kafka_target_topic_settings::TopicSettings::Topic(_))
        ));
        assert!(matches!(
            target.serializer.and_then(|s| s.serializer),
            Some(serializer::Serializer::SerializerDebezium(_))
        ));
    }

    #[test]
    fn test_explicit_project_wins_over_default() {
        let config = EndpointConfig {
            project_id: "prj-own".into(),
            ..Default::default()
        }
        .with_default_project(Some("prj-default"));
        assert_eq!(config.project_id, Field::Known("prj-own".to_owned()));
    }

    #[test]
    fn test_two_connectors_rejected() {
        //given
        let config =
            EndpointConfig::from_file("test-data/two-connectors.yaml").expect("fixture parses");

        //when
        let err = config
            .create_request(SelectionPolicy::Strict)
            .expect_err("ambiguous settings");

        //then
        let EndpointError::Invalid(diags) = err else {
            panic!("expected invalid configuration");
        };
        let errors: Vec<_> = diags.errors().collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path.as_str(), "settings");
        let DiagnosticKind::StructuralAmbiguity { found, .. } = &errors[0].kind else {
            panic!("expected ambiguity");
        };
        assert_eq!(found, &vec!["postgres_source", "kafka_target"]);
    }

    #[test]
    fn test_update_mask() {
        //given
        let config = EndpointConfig::from_file("test-data/postgres-source.yaml")
            .expect("fixture parses");

        //when
        let request = config
            .update_request("ep-1", SelectionPolicy::Strict)
            .expect("valid request");

        //then
        assert_eq!(request.endpoint_id, "ep-1");
        assert_eq!(
            request.update_mask.map(|mask| mask.paths).unwrap_or_default(),
            vec!["name", "description", "settings.postgres_source"]
        );
    }

    #[test]
    fn test_update_mask_skips_absent_description() {
        let config = EndpointConfig::from_file("test-data/unresolved-id.yaml")
            .expect("fixture parses");
        let request = config
            .update_request("ep-2", SelectionPolicy::Strict)
            .expect("valid request");
        assert_eq!(
            request.update_mask.map(|mask| mask.paths).unwrap_or_default(),
            vec!["name", "settings.intercom_source"]
        );
    }

    #[test]
    fn test_merge_response_resolves_id() {
        //given
        let config = EndpointConfig::from_file("test-data/unresolved-id.yaml")
            .expect("fixture parses");
        assert_eq!(config.id, Field::Unresolved);
        let request = config
            .create_request(SelectionPolicy::Strict)
            .expect("valid request");
        let endpoint = Endpoint {
            id: "ep-42".to_owned(),
            project_id: request.project_id,
            name: request.name,
            description: request.description,
            settings: request.settings,
        };

        //when
        let (merged, diags) = config.merge_response(&endpoint);

        //then
        assert!(diags.is_empty(), "{diags}");
        assert_eq!(merged.id, Field::Known("ep-42".to_owned()));
        assert_eq!(merged.description, Field::Absent);
        assert_eq!(merged.settings, config.settings);
        assert_eq!(merged.endpoint_id().expect("id known"), "ep-42");
    }

    #[test]
    fn test_missing_id() {
        let config = EndpointConfig {
            name: "orphan".into(),
            ..Default::default()
        };
        let err = config.endpoint_id().expect_err("no id");
        assert_eq!(err.to_string(), "endpoint `orphan` has no id, it was never created");
    }

    #[test]
    fn test_write_and_read_back() {
        //given
        let dir = tempfile::tempdir().expect("temp dir created");
        let path = dir.path().join("endpoint.yaml");
        let config = EndpointConfig::from_file("test-data/unresolved-id.yaml")
            .expect("fixture parses");

        //when
        config.write_to_file(&path).expect("written");
        let back = EndpointConfig::from_file(&path).expect("read back");

        //then
        assert_eq!(back, config);
    }

    #[test]
    fn test_from_value() {
        let value: serde_yaml::Value = serde_yaml::from_str(
            r#"
            name: stripe
            settings:
              stripe_source:
                account_id: acct_1
                lookback_window_days: 0
            "#,
        )
        .expect("yaml");
        let config = EndpointConfig::from_value(value).expect("config");
        let stripe = config.settings.stripe_source.expect("stripe block");
        assert_eq!(stripe.lookback_window_days, Field::Known(0));
        assert_eq!(stripe.slice_range, Field::Absent);
    }

    #[test]
    fn test_schema_marks_secrets_write_only() {
        let schema = serde_json::to_string(&EndpointConfig::json_schema()).expect("schema");
        assert!(schema.contains("\"writeOnly\":true"));
        assert!(schema.contains("postgres_source"));
    }
}
