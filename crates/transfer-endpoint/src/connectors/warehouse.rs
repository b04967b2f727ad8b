//!
//! Warehouse connectors: MSSQL, Snowflake, Redshift sources and the BigQuery target.
//!
//! These address their server by host and port directly, there is no
//! managed cluster arm.
//!
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use transfer_api::common::CleanupPolicy;
use transfer_api::warehouse::{self as wire, MssqlReplicationMethod, snowflake_credentials};

use crate::credentials::{OAuthCredentials, UsernamePassword};
use crate::diagnostics::{AttrPath, Diagnostics};
use crate::enums;
use crate::field::Field;
use crate::one_of::{self, exactly_one};
use crate::scalar::{self, prior_field};
use crate::secret::{self, SecretString};

use super::ConnectorSettings;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct MssqlSource {
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub host: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub port: Field<i64>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub database: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub schemas: Field<Vec<String>>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub username: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub password: Field<SecretString>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub jdbc_url_params: Field<String>,
    /// `STANDARD` or `CDC`
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub replication_method: Field<String>,
}

impl ConnectorSettings for MssqlSource {
    const NAME: &'static str = "mssql_source";

    type Wire = wire::MssqlSource;

    fn to_wire(&self, path: &AttrPath, diags: &mut Diagnostics) -> Self::Wire {
        wire::MssqlSource {
            host: scalar::required_to_wire(&self.host, &path.child("host"), diags),
            port: scalar::port_to_wire(&self.port, &path.child("port"), diags),
            database: scalar::required_to_wire(&self.database, &path.child("database"), diags),
            schemas: scalar::to_wire(&self.schemas, &path.child("schemas"), diags),
            username: scalar::required_to_wire(&self.username, &path.child("username"), diags),
            password: secret::required_to_wire(&self.password, &path.child("password"), diags),
            jdbc_url_params: scalar::to_wire(&self.jdbc_url_params, &path.child("jdbc_url_params"), diags),
            replication_method: enums::encode::<MssqlReplicationMethod>(
                &self.replication_method,
                &path.child("replication_method"),
                diags,
            ),
        }
    }

    fn from_wire(
        wire: &Self::Wire,
        prior: Option<&Self>,
        path: &AttrPath,
        diags: &mut Diagnostics,
    ) -> Self {
        Self {
            host: scalar::from_wire(&wire.host, &prior_field(prior, |p| &p.host)),
            port: scalar::from_wire(&wire.port, &prior_field(prior, |p| &p.port)),
            database: scalar::from_wire(&wire.database, &prior_field(prior, |p| &p.database)),
            schemas: scalar::from_wire(&wire.schemas, &prior_field(prior, |p| &p.schemas)),
            username: scalar::from_wire(&wire.username, &prior_field(prior, |p| &p.username)),
            password: secret::from_wire(wire.password.as_ref(), &prior_field(prior, |p| &p.password)),
            jdbc_url_params: scalar::from_wire(
                &wire.jdbc_url_params,
                &prior_field(prior, |p| &p.jdbc_url_params),
            ),
            replication_method: enums::decode::<MssqlReplicationMethod>(
                wire.replication_method,
                &path.child("replication_method"),
                diags,
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SnowflakeCredentials {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username_password: Option<UsernamePassword>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oauth: Option<OAuthCredentials>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SnowflakeSource {
    /// account host, `<account>.snowflakecomputing.com`
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub host: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub role: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub warehouse: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub database: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub schema: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub jdbc_url_params: Field<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<SnowflakeCredentials>,
}

impl ConnectorSettings for SnowflakeSource {
    const NAME: &'static str = "snowflake_source";

    type Wire = wire::SnowflakeSource;

    fn to_wire(&self, path: &AttrPath, diags: &mut Diagnostics) -> Self::Wire {
        let credentials = one_of::required(self.credentials.as_ref(), "credentials", path, diags)
            .and_then(|credentials| {
                let path = path.child("credentials");
                if !exactly_one(
                    &path,
                    &[
                        ("username_password", credentials.username_password.is_some()),
                        ("oauth", credentials.oauth.is_some()),
                    ],
                    diags,
                ) {
                    return None;
                }
                let credentials = match (&credentials.username_password, &credentials.oauth) {
                    (Some(basic), _) => snowflake_credentials::Credentials::UsernamePassword(
                        basic.to_wire(&path.child("username_password"), diags),
                    ),
                    (None, Some(oauth)) => snowflake_credentials::Credentials::Oauth(
                        oauth.to_wire(&path.child("oauth"), diags),
                    ),
                    (None, None) => return None,
                };
                Some(wire::SnowflakeCredentials {
                    credentials: Some(credentials),
                })
            });
        wire::SnowflakeSource {
            host: scalar::required_to_wire(&self.host, &path.child("host"), diags),
            role: scalar::to_wire(&self.role, &path.child("role"), diags),
            warehouse: scalar::required_to_wire(&self.warehouse, &path.child("warehouse"), diags),
            database: scalar::required_to_wire(&self.database, &path.child("database"), diags),
            schema: scalar::to_wire(&self.schema, &path.child("schema"), diags),
            jdbc_url_params: scalar::to_wire(&self.jdbc_url_params, &path.child("jdbc_url_params"), diags),
            credentials,
        }
    }

    fn from_wire(
        wire: &Self::Wire,
        prior: Option<&Self>,
        _path: &AttrPath,
        _diags: &mut Diagnostics,
    ) -> Self {
        let prior_credentials = prior.and_then(|p| p.credentials.as_ref());
        let credentials = match wire.credentials.as_ref().and_then(|c| c.credentials.as_ref()) {
            Some(snowflake_credentials::Credentials::UsernamePassword(basic)) => {
                Some(SnowflakeCredentials {
                    username_password: Some(UsernamePassword::from_wire(
                        basic,
                        prior_credentials.and_then(|c| c.username_password.as_ref()),
                    )),
                    oauth: None,
                })
            }
            Some(snowflake_credentials::Credentials::Oauth(oauth)) => Some(SnowflakeCredentials {
                username_password: None,
                oauth: Some(OAuthCredentials::from_wire(
                    oauth,
                    prior_credentials.and_then(|c| c.oauth.as_ref()),
                )),
            }),
            None => prior_credentials.cloned(),
        };
        Self {
            host: scalar::from_wire(&wire.host, &prior_field(prior, |p| &p.host)),
            role: scalar::from_wire(&wire.role, &prior_field(prior, |p| &p.role)),
            warehouse: scalar::from_wire(&wire.warehouse, &prior_field(prior, |p| &p.warehouse)),
            database: scalar::from_wire(&wire.database, &prior_field(prior, |p| &p.database)),
            schema: scalar::from_wire(&wire.schema, &prior_field(prior, |p| &p.schema)),
            jdbc_url_params: scalar::from_wire(
                &wire.jdbc_url_params,
                &prior_field(prior, |p| &p.jdbc_url_params),
            ),
            credentials,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct RedshiftSource {
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub host: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub port: Field<i64>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub database: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub schemas: Field<Vec<String>>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub username: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub password: Field<SecretString>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub jdbc_url_params: Field<String>,
}

impl ConnectorSettings for RedshiftSource {
    const NAME: &'static str = "redshift_source";

    type Wire = wire::RedshiftSource;

    fn to_wire(&self, path: &AttrPath, diags: &mut Diagnostics) -> Self::Wire {
        wire::RedshiftSource {
            host: scalar::required_to_wire(&self.host, &path.child("host"), diags),
            port: scalar::port_to_wire(&self.port, &path.child("port"), diags),
            database: scalar::required_to_wire(&self.database, &path.child("database"), diags),
            schemas: scalar::to_wire(&self.schemas, &path.child("schemas"), diags),
            username: scalar::required_to_wire(&self.username, &path.child("username"), diags),
            password: secret::required_to_wire(&self.password, &path.child("password"), diags),
            jdbc_url_params: scalar::to_wire(&self.jdbc_url_params, &path.child("jdbc_url_params"), diags),
        }
    }

    fn from_wire(
        wire: &Self::Wire,
        prior: Option<&Self>,
        _path: &AttrPath,
        _diags: &mut Diagnostics,
    ) -> Self {
        Self {
            host: scalar::from_wire(&wire.host, &prior_field(prior, |p| &p.host)),
            port: scalar::from_wire(&wire.port, &prior_field(prior, |p| &p.port)),
            database: scalar::from_wire(&wire.database, &prior_field(prior, |p| &p.database)),
            schemas: scalar::from_wire(&wire.schemas, &prior_field(prior, |p| &p.schemas)),
            username: scalar::from_wire(&wire.username, &prior_field(prior, |p| &p.username)),
            password: secret::from_wire(wire.password.as_ref(), &prior_field(prior, |p| &p.password)),
            jdbc_url_params: scalar::from_wire(
                &wire.jdbc_url_params,
                &prior_field(prior, |p| &p.jdbc_url_params),
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BigqueryTarget {
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub project_id: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub dataset_id: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub location: Field<String>,
    /// service account key document
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub credentials_json: Field<SecretString>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub cleanup_policy: Field<String>,
}

impl ConnectorSettings for BigqueryTarget {
    const NAME: &'static str = "bigquery_target";

    type Wire = wire::BigqueryTarget;

    fn to_wire(&self, path: &AttrPath, diags: &mut Diagnostics) -> Self::Wire {
        wire::BigqueryTarget {
            project_id: scalar::required_to_wire(&self.project_id, &path.child("project_id"), diags),
            dataset_id: scalar::required_to_wire(&self.dataset_id, &path.child("dataset_id"), diags),
            location: scalar::to_wire(&self.location, &path.child("location"), diags),
            credentials_json: secret::required_to_wire(
                &self.credentials_json,
                &path.child("credentials_json"),
                diags,
            ),
            cleanup_policy: enums::encode::<CleanupPolicy>(
                &self.cleanup_policy,
                &path.child("cleanup_policy"),
                diags,
            ),
        }
    }

    fn from_wire(
        wire: &Self::Wire,
        prior: Option<&Self>,
        path: &AttrPath,
        diags: &mut Diagnostics,
    ) -> Self {
        Self {
            project_id: scalar::from_wire(&wire.project_id, &prior_field(prior, |p| &p.project_id)),
            dataset_id: scalar::from_wire(&wire.dataset_id, &prior_field(prior, |p| &p.dataset_id)),
            location: scalar::from_wire(&wire.location, &prior_field(prior, |p| &p.location)),
            credentials_json: secret::from_wire(
                wire.credentials_json.as_ref(),
                &prior_field(prior, |p| &p.credentials_json),
            ),
            cleanup_policy: enums::decode::<CleanupPolicy>(
                wire.cleanup_policy,
                &path.child("cleanup_policy"),
                diags,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_mssql_round_trip() {
        //given
        let flat = MssqlSource {
            host: "mssql.internal".into(),
            port: Field::Known(1433),
            database: "erp".into(),
            schemas: Field::Known(vec!["dbo".to_owned()]),
            username: "sa".into(),
            password: "pw".into(),
            jdbc_url_params: Field::Absent,
            replication_method: "cdc".into(),
        };
        let path = AttrPath::root(MssqlSource::NAME);
        let mut diags = Diagnostics::new();

        //when
        let wire = flat.to_wire(&path, &mut diags);
        let back = MssqlSource::from_wire(&wire, Some(&flat), &path, &mut diags);

        //then
        assert!(diags.is_empty(), "{diags}");
        assert_eq!(wire.replication_method, MssqlReplicationMethod::Cdc as i32);
        assert_eq!(
            back,
            MssqlSource {
                replication_method: "CDC".into(),
                ..flat
            }
        );
    }

    #[test]
    fn test_snowflake_oauth_round_trip() {
        //given
        let flat = SnowflakeSource {
            host: "acme.snowflakecomputing.com".into(),
            warehouse: "COMPUTE_WH".into(),
            database: "ANALYTICS".into(),
            credentials: Some(SnowflakeCredentials {
                username_password: None,
                oauth: Some(OAuthCredentials {
                    client_id: "client".into(),
                    client_secret: "secret".into(),
                    refresh_token: "refresh".into(),
                    access_token: Field::Absent,
                }),
            }),
            ..Default::default()
        };
        let path = AttrPath::root(SnowflakeSource::NAME);
        let mut diags = Diagnostics::new();
        let mut wire = flat.to_wire(&path, &mut diags);
        // the API redacts every secret
        if let Some(snowflake_credentials::Credentials::Oauth(oauth)) =
            wire.credentials.as_mut().and_then(|c| c.credentials.as_mut())
        {
            oauth.client_secret = None;
            oauth.refresh_token = None;
        }

        //when
        let back = SnowflakeSource::from_wire(&wire, Some(&flat), &path, &mut diags);

        //then
        assert!(diags.is_empty(), "{diags}");
        assert_eq!(back, flat);
    }

    #[test]
    fn test_snowflake_credentials_required() {
        let mut diags = Diagnostics::new();
        let flat = SnowflakeSource {
            host: "acme.snowflakecomputing.com".into(),
            warehouse: "COMPUTE_WH".into(),
            database: "ANALYTICS".into(),
            ..Default::default()
        };
        flat.to_wire(&AttrPath::root(SnowflakeSource::NAME), &mut diags);
        assert_eq!(
            diags.to_string(),
            "error: snowflake_source: missing required block `credentials`"
        );
    }

    #[test]
    fn test_redshift_port_range() {
        let flat = RedshiftSource {
            host: "redshift.internal".into(),
            port: Field::Known(-1),
            database: "dev".into(),
            username: "awsuser".into(),
            password: "pw".into(),
            ..Default::default()
        };
        let mut diags = Diagnostics::new();
        flat.to_wire(&AttrPath::root(RedshiftSource::NAME), &mut diags);
        assert_eq!(
            diags.to_string(),
            "error: redshift_source.port: port -1 is out of range"
        );
    }

    #[test]
    fn test_bigquery_keeps_credentials() {
        let flat = BigqueryTarget {
            project_id: "acme-dwh".into(),
            dataset_id: "raw".into(),
            location: "EU".into(),
            credentials_json: r#"{"type":"service_account"}"#.into(),
            cleanup_policy: Field::Absent,
        };
        let path = AttrPath::root(BigqueryTarget::NAME);
        let mut diags = Diagnostics::new();
        let mut wire = flat.to_wire(&path, &mut diags);
        wire.credentials_json = None;
        let back = BigqueryTarget::from_wire(&wire, Some(&flat), &path, &mut diags);
        assert!(diags.is_empty());
        assert_eq!(back, flat);
    }
}
