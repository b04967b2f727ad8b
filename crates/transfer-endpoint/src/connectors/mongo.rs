use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use transfer_api::common::CleanupPolicy;
use transfer_api::mongo as wire;

use crate::connection::{self, MongoConnection};
use crate::diagnostics::{AttrPath, Diagnostics};
use crate::enums;
use crate::field::Field;
use crate::scalar::{self, prior_field};
use crate::secret::{self, SecretString};

use super::ConnectorSettings;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct MongoCollection {
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub database_name: Field<String>,
    /// `*` selects every collection of the database
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub collection_name: Field<String>,
}

fn collection_to_wire(
    collection: &MongoCollection,
    path: &AttrPath,
    diags: &mut Diagnostics,
) -> wire::MongoCollection {
    wire::MongoCollection {
        database_name: scalar::required_to_wire(
            &collection.database_name,
            &path.child("database_name"),
            diags,
        ),
        collection_name: scalar::required_to_wire(
            &collection.collection_name,
            &path.child("collection_name"),
            diags,
        ),
    }
}

fn collection_from_wire(
    collection: &wire::MongoCollection,
    prior: Option<&MongoCollection>,
    _path: &AttrPath,
    _diags: &mut Diagnostics,
) -> MongoCollection {
    MongoCollection {
        database_name: scalar::from_wire(
            &collection.database_name,
            &prior_field(prior, |c| &c.database_name),
        ),
        collection_name: scalar::from_wire(
            &collection.collection_name,
            &prior_field(prior, |c| &c.collection_name),
        ),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct MongoSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection: Option<MongoConnection>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub user: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub password: Field<SecretString>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub auth_source: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub collections: Field<Vec<MongoCollection>>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub excluded_collections: Field<Vec<MongoCollection>>,
    /// read from secondaries when available
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub secondary_preferred_mode: Field<bool>,
}

impl ConnectorSettings for MongoSource {
    const NAME: &'static str = "mongo_source";

    type Wire = wire::MongoSource;

    fn to_wire(&self, path: &AttrPath, diags: &mut Diagnostics) -> Self::Wire {
        wire::MongoSource {
            connection: connection::mongo_connection_to_wire(self.connection.as_ref(), path, diags),
            user: scalar::required_to_wire(&self.user, &path.child("user"), diags),
            password: secret::to_wire(&self.password, &path.child("password"), diags),
            auth_source: scalar::to_wire(&self.auth_source, &path.child("auth_source"), diags),
            collections: scalar::records_to_wire(
                &self.collections,
                &path.child("collections"),
                diags,
                collection_to_wire,
            ),
            excluded_collections: scalar::records_to_wire(
                &self.excluded_collections,
                &path.child("excluded_collections"),
                diags,
                collection_to_wire,
            ),
            secondary_preferred_mode: scalar::to_wire(
                &self.secondary_preferred_mode,
                &path.child("secondary_preferred_mode"),
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
            connection: connection::mongo_connection_from_wire(
                wire.connection.as_ref(),
                prior.and_then(|p| p.connection.as_ref()),
            ),
            user: scalar::from_wire(&wire.user, &prior_field(prior, |p| &p.user)),
            password: secret::from_wire(wire.password.as_ref(), &prior_field(prior, |p| &p.password)),
            auth_source: scalar::from_wire(&wire.auth_source, &prior_field(prior, |p| &p.auth_source)),
            collections: scalar::records_from_wire(
                &wire.collections,
                &prior_field(prior, |p| &p.collections),
                &path.child("collections"),
                diags,
                collection_from_wire,
            ),
            excluded_collections: scalar::records_from_wire(
                &wire.excluded_collections,
                &prior_field(prior, |p| &p.excluded_collections),
                &path.child("excluded_collections"),
                diags,
                collection_from_wire,
            ),
            secondary_preferred_mode: scalar::from_wire(
                &wire.secondary_preferred_mode,
                &prior_field(prior, |p| &p.secondary_preferred_mode),
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct MongoTarget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection: Option<MongoConnection>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub user: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub password: Field<SecretString>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub auth_source: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub database: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub cleanup_policy: Field<String>,
}

impl ConnectorSettings for MongoTarget {
    const NAME: &'static str = "mongo_target";

    type Wire = wire::MongoTarget;

    fn to_wire(&self, path: &AttrPath, diags: &mut Diagnostics) -> Self::Wire {
        wire::MongoTarget {
            connection: connection::mongo_connection_to_wire(self.connection.as_ref(), path, diags),
            user: scalar::required_to_wire(&self.user, &path.child("user"), diags),
            password: secret::to_wire(&self.password, &path.child("password"), diags),
            auth_source: scalar::to_wire(&self.auth_source, &path.child("auth_source"), diags),
            database: scalar::to_wire(&self.database, &path.child("database"), diags),
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
            connection: connection::mongo_connection_from_wire(
                wire.connection.as_ref(),
                prior.and_then(|p| p.connection.as_ref()),
            ),
            user: scalar::from_wire(&wire.user, &prior_field(prior, |p| &p.user)),
            password: secret::from_wire(wire.password.as_ref(), &prior_field(prior, |p| &p.password)),
            auth_source: scalar::from_wire(&wire.auth_source, &prior_field(prior, |p| &p.auth_source)),
            database: scalar::from_wire(&wire.database, &prior_field(prior, |p| &p.database)),
            cleanup_policy: enums::decode::<CleanupPolicy>(
                wire.cleanup_policy,
                &path.child("cleanup_policy"),
                diags,
            ),
        }
    }
}
