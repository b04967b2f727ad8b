use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use transfer_api::common::CleanupPolicy;
use transfer_api::postgres as wire;

use crate::connection::{self, HostConnection};
use crate::diagnostics::{AttrPath, Diagnostics};
use crate::enums;
use crate::field::Field;
use crate::scalar::{self, prior_field};
use crate::secret::{self, SecretString};

use super::ConnectorSettings;

object_transfer_settings!(
    /// Stage of every PostgreSQL schema object kind
    PostgresObjectTransferSettings => wire::PostgresObjectTransferSettings {
        sequence,
        sequence_owned_by,
        sequence_set,
        table,
        primary_key,
        fkey_constraint,
        default_values,
        constraint,
        index,
        view,
        materialized_view,
        function,
        trigger,
        r#type,
        rule,
        collation,
        policy,
        cast,
    }
);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PostgresSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection: Option<HostConnection>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub database: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub user: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub password: Field<SecretString>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub include_tables: Field<Vec<String>>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub exclude_tables: Field<Vec<String>>,
    /// replication slot lag in bytes before the transfer fails
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub slot_byte_lag_limit: Field<i64>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub service_schema: Field<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_transfer_settings: Option<PostgresObjectTransferSettings>,
}

impl ConnectorSettings for PostgresSource {
    const NAME: &'static str = "postgres_source";

    type Wire = wire::PostgresSource;

    fn to_wire(&self, path: &AttrPath, diags: &mut Diagnostics) -> Self::Wire {
        wire::PostgresSource {
            connection: connection::host_connection_to_wire(self.connection.as_ref(), path, diags),
            database: scalar::required_to_wire(&self.database, &path.child("database"), diags),
            user: scalar::required_to_wire(&self.user, &path.child("user"), diags),
            password: secret::to_wire(&self.password, &path.child("password"), diags),
            include_tables: scalar::to_wire(&self.include_tables, &path.child("include_tables"), diags),
            exclude_tables: scalar::to_wire(&self.exclude_tables, &path.child("exclude_tables"), diags),
            slot_byte_lag_limit: scalar::to_wire(
                &self.slot_byte_lag_limit,
                &path.child("slot_byte_lag_limit"),
                diags,
            ),
            service_schema: scalar::to_wire(&self.service_schema, &path.child("service_schema"), diags),
            object_transfer_settings: self.object_transfer_settings.as_ref().map(|settings| {
                settings.to_wire(&path.child("object_transfer_settings"), diags)
            }),
        }
    }

    fn from_wire(
        wire: &Self::Wire,
        prior: Option<&Self>,
        path: &AttrPath,
        diags: &mut Diagnostics,
    ) -> Self {
        Self {
            connection: connection::host_connection_from_wire(
                wire.connection.as_ref(),
                prior.and_then(|p| p.connection.as_ref()),
            ),
            database: scalar::from_wire(&wire.database, &prior_field(prior, |p| &p.database)),
            user: scalar::from_wire(&wire.user, &prior_field(prior, |p| &p.user)),
            password: secret::from_wire(wire.password.as_ref(), &prior_field(prior, |p| &p.password)),
            include_tables: scalar::from_wire(
                &wire.include_tables,
                &prior_field(prior, |p| &p.include_tables),
            ),
            exclude_tables: scalar::from_wire(
                &wire.exclude_tables,
                &prior_field(prior, |p| &p.exclude_tables),
            ),
            slot_byte_lag_limit: scalar::from_wire(
                &wire.slot_byte_lag_limit,
                &prior_field(prior, |p| &p.slot_byte_lag_limit),
            ),
            service_schema: scalar::from_wire(
                &wire.service_schema,
                &prior_field(prior, |p| &p.service_schema),
            ),
            object_transfer_settings: PostgresObjectTransferSettings::from_wire(
                wire.object_transfer_settings.as_ref(),
                prior.and_then(|p| p.object_transfer_settings.as_ref()),
                &path.child("object_transfer_settings"),
                diags,
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PostgresTarget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection: Option<HostConnection>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub database: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub user: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub password: Field<SecretString>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub cleanup_policy: Field<String>,
}

impl ConnectorSettings for PostgresTarget {
    const NAME: &'static str = "postgres_target";

    type Wire = wire::PostgresTarget;

    fn to_wire(&self, path: &AttrPath, diags: &mut Diagnostics) -> Self::Wire {
        wire::PostgresTarget {
            connection: connection::host_connection_to_wire(self.connection.as_ref(), path, diags),
            database: scalar::required_to_wire(&self.database, &path.child("database"), diags),
            user: scalar::required_to_wire(&self.user, &path.child("user"), diags),
            password: secret::to_wire(&self.password, &path.child("password"), diags),
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
            connection: connection::host_connection_from_wire(
                wire.connection.as_ref(),
                prior.and_then(|p| p.connection.as_ref()),
            ),
            database: scalar::from_wire(&wire.database, &prior_field(prior, |p| &p.database)),
            user: scalar::from_wire(&wire.user, &prior_field(prior, |p| &p.user)),
            password: secret::from_wire(wire.password.as_ref(), &prior_field(prior, |p| &p.password)),
            cleanup_policy: enums::decode::<CleanupPolicy>(
                wire.cleanup_policy,
                &path.child("cleanup_policy"),
                diags,
            ),
        }
    }
}
