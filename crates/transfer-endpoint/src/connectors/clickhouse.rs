use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use transfer_api::clickhouse::{self as wire, clickhouse_sharding};
use transfer_api::common::{CleanupPolicy, Empty};

use crate::connection::{self, ClickhouseConnection, EmptyBlock};
use crate::diagnostics::{AttrPath, Diagnostics};
use crate::enums;
use crate::field::Field;
use crate::one_of::exactly_one;
use crate::scalar::{self, prior_field};
use crate::secret::{self, SecretString};

use super::ConnectorSettings;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ClickhouseSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection: Option<ClickhouseConnection>,
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
}

impl ConnectorSettings for ClickhouseSource {
    const NAME: &'static str = "clickhouse_source";

    type Wire = wire::ClickhouseSource;

    fn to_wire(&self, path: &AttrPath, diags: &mut Diagnostics) -> Self::Wire {
        wire::ClickhouseSource {
            connection: connection::clickhouse_connection_to_wire(
                self.connection.as_ref(),
                path,
                diags,
            ),
            database: scalar::required_to_wire(&self.database, &path.child("database"), diags),
            user: scalar::required_to_wire(&self.user, &path.child("user"), diags),
            password: secret::to_wire(&self.password, &path.child("password"), diags),
            include_tables: scalar::to_wire(&self.include_tables, &path.child("include_tables"), diags),
            exclude_tables: scalar::to_wire(&self.exclude_tables, &path.child("exclude_tables"), diags),
        }
    }

    fn from_wire(
        wire: &Self::Wire,
        prior: Option<&Self>,
        path: &AttrPath,
        diags: &mut Diagnostics,
    ) -> Self {
        Self {
            connection: connection::clickhouse_connection_from_wire(
                wire.connection.as_ref(),
                prior.and_then(|p| p.connection.as_ref()),
                path,
                diags,
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
        }
    }
}

/// target table name override
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AltName {
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub from_name: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub to_name: Field<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ColumnValueHash {
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub column_name: Field<String>,
}

/// How rows are spread over shards
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ClickhouseSharding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_value_hash: Option<ColumnValueHash>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_id: Option<EmptyBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round_robin: Option<EmptyBlock>,
}

impl ClickhouseSharding {
    fn to_wire(&self, path: &AttrPath, diags: &mut Diagnostics) -> Option<wire::ClickhouseSharding> {
        if !exactly_one(
            path,
            &[
                ("column_value_hash", self.column_value_hash.is_some()),
                ("transfer_id", self.transfer_id.is_some()),
                ("round_robin", self.round_robin.is_some()),
            ],
            diags,
        ) {
            return None;
        }
        let sharding = if let Some(hash) = &self.column_value_hash {
            clickhouse_sharding::Sharding::ColumnValueHash(wire::ColumnValueHash {
                column_name: scalar::required_to_wire(
                    &hash.column_name,
                    &path.child("column_value_hash").child("column_name"),
                    diags,
                ),
            })
        } else if self.transfer_id.is_some() {
            clickhouse_sharding::Sharding::TransferId(Empty {})
        } else {
            clickhouse_sharding::Sharding::RoundRobin(Empty {})
        };
        Some(wire::ClickhouseSharding {
            sharding: Some(sharding),
        })
    }

    fn from_wire(wire: Option<&wire::ClickhouseSharding>, prior: Option<&Self>) -> Option<Self> {
        let sharding = match wire.and_then(|s| s.sharding.as_ref()) {
            Some(sharding) => sharding,
            None => return prior.cloned(),
        };
        let mut flat = Self::default();
        match sharding {
            clickhouse_sharding::Sharding::ColumnValueHash(hash) => {
                flat.column_value_hash = Some(ColumnValueHash {
                    column_name: scalar::from_wire(
                        &hash.column_name,
                        &prior_field(prior.and_then(|p| p.column_value_hash.as_ref()), |h| {
                            &h.column_name
                        }),
                    ),
                });
            }
            clickhouse_sharding::Sharding::TransferId(_) => flat.transfer_id = Some(EmptyBlock {}),
            clickhouse_sharding::Sharding::RoundRobin(_) => flat.round_robin = Some(EmptyBlock {}),
        }
        Some(flat)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ClickhouseTarget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection: Option<ClickhouseConnection>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub database: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub user: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub password: Field<SecretString>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub cleanup_policy: Field<String>,
    /// distributed tables are created on this cluster
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub clickhouse_cluster_name: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub alt_names: Field<Vec<AltName>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sharding: Option<ClickhouseSharding>,
}

impl ConnectorSettings for ClickhouseTarget {
    const NAME: &'static str = "clickhouse_target";

    type Wire = wire::ClickhouseTarget;

    fn to_wire(&self, path: &AttrPath, diags: &mut Diagnostics) -> Self::Wire {
        let alt_names = scalar::records_to_wire(
            &self.alt_names,
            &path.child("alt_names"),
            diags,
            |alt, path, diags| wire::AltName {
                from_name: scalar::required_to_wire(&alt.from_name, &path.child("from_name"), diags),
                to_name: scalar::required_to_wire(&alt.to_name, &path.child("to_name"), diags),
            },
        );
        wire::ClickhouseTarget {
            connection: connection::clickhouse_connection_to_wire(
                self.connection.as_ref(),
                path,
                diags,
            ),
            database: scalar::required_to_wire(&self.database, &path.child("database"), diags),
            user: scalar::required_to_wire(&self.user, &path.child("user"), diags),
            password: secret::to_wire(&self.password, &path.child("password"), diags),
            cleanup_policy: enums::encode::<CleanupPolicy>(
                &self.cleanup_policy,
                &path.child("cleanup_policy"),
                diags,
            ),
            clickhouse_cluster_name: scalar::to_wire(
                &self.clickhouse_cluster_name,
                &path.child("clickhouse_cluster_name"),
                diags,
            ),
            alt_names,
            sharding: self
                .sharding
                .as_ref()
                .and_then(|sharding| sharding.to_wire(&path.child("sharding"), diags)),
        }
    }

    fn from_wire(
        wire: &Self::Wire,
        prior: Option<&Self>,
        path: &AttrPath,
        diags: &mut Diagnostics,
    ) -> Self {
        let alt_names = scalar::records_from_wire(
            &wire.alt_names,
            &prior_field(prior, |p| &p.alt_names),
            &path.child("alt_names"),
            diags,
            |alt, prior_alt, _, _| AltName {
                from_name: scalar::from_wire(&alt.from_name, &prior_field(prior_alt, |a| &a.from_name)),
                to_name: scalar::from_wire(&alt.to_name, &prior_field(prior_alt, |a| &a.to_name)),
            },
        );
        Self {
            connection: connection::clickhouse_connection_from_wire(
                wire.connection.as_ref(),
                prior.and_then(|p| p.connection.as_ref()),
                path,
                diags,
            ),
            database: scalar::from_wire(&wire.database, &prior_field(prior, |p| &p.database)),
            user: scalar::from_wire(&wire.user, &prior_field(prior, |p| &p.user)),
            password: secret::from_wire(wire.password.as_ref(), &prior_field(prior, |p| &p.password)),
            cleanup_policy: enums::decode::<CleanupPolicy>(
                wire.cleanup_policy,
                &path.child("cleanup_policy"),
                diags,
            ),
            clickhouse_cluster_name: scalar::from_wire(
                &wire.clickhouse_cluster_name,
                &prior_field(prior, |p| &p.clickhouse_cluster_name),
            ),
            alt_names,
            sharding: ClickhouseSharding::from_wire(
                wire.sharding.as_ref(),
                prior.and_then(|p| p.sharding.as_ref()),
            ),
        }
    }
}
