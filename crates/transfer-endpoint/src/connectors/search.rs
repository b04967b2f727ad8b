//!
//! Elasticsearch and OpenSearch targets share one flat shape.
//!
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use transfer_api::common::CleanupPolicy;
use transfer_api::search as wire;

use crate::connection::{self, HostConnection};
use crate::diagnostics::{AttrPath, Diagnostics};
use crate::enums;
use crate::field::Field;
use crate::scalar::{self, prior_field};
use crate::secret::{self, SecretString};

use super::ConnectorSettings;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SearchTarget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection: Option<HostConnection>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub user: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub password: Field<SecretString>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub cleanup_policy: Field<String>,
    /// replace characters the index does not accept in document keys
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub sanitize_doc_keys: Field<bool>,
}

pub type ElasticsearchTarget = SearchTarget;

/// Same flat shape as [`SearchTarget`], a distinct type so each variant
/// carries its own attribute name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct OpensearchTarget(pub SearchTarget);

macro_rules! search_target_wire {
    ($flat:ty, $wire:path, $name:literal, |$this:ident| $inner:expr, |$value:ident| $wrap:expr) => {
        impl ConnectorSettings for $flat {
            const NAME: &'static str = $name;

            type Wire = $wire;

            fn to_wire(&self, path: &AttrPath, diags: &mut Diagnostics) -> Self::Wire {
                let $this = self;
                let flat: &SearchTarget = $inner;
                $wire {
                    connection: connection::host_connection_to_wire(
                        flat.connection.as_ref(),
                        path,
                        diags,
                    ),
                    user: scalar::to_wire(&flat.user, &path.child("user"), diags),
                    password: secret::to_wire(&flat.password, &path.child("password"), diags),
                    cleanup_policy: enums::encode::<CleanupPolicy>(
                        &flat.cleanup_policy,
                        &path.child("cleanup_policy"),
                        diags,
                    ),
                    sanitize_doc_keys: scalar::to_wire(
                        &flat.sanitize_doc_keys,
                        &path.child("sanitize_doc_keys"),
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
                let prior: Option<&SearchTarget> = prior.map(|$this| $inner);
                let $value = SearchTarget {
                    connection: connection::host_connection_from_wire(
                        wire.connection.as_ref(),
                        prior.and_then(|p| p.connection.as_ref()),
                    ),
                    user: scalar::from_wire(&wire.user, &prior_field(prior, |p| &p.user)),
                    password: secret::from_wire(
                        wire.password.as_ref(),
                        &prior_field(prior, |p| &p.password),
                    ),
                    cleanup_policy: enums::decode::<CleanupPolicy>(
                        wire.cleanup_policy,
                        &path.child("cleanup_policy"),
                        diags,
                    ),
                    sanitize_doc_keys: scalar::from_wire(
                        &wire.sanitize_doc_keys,
                        &prior_field(prior, |p| &p.sanitize_doc_keys),
                    ),
                };
                $wrap
            }
        }
    };
}

search_target_wire!(
    SearchTarget,
    wire::ElasticsearchTarget,
    "elasticsearch_target",
    |this| this,
    |value| value
);
search_target_wire!(
    OpensearchTarget,
    wire::OpensearchTarget,
    "opensearch_target",
    |this| &this.0,
    |value| OpensearchTarget(value)
);
