use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use transfer_api::saas as wire;

use crate::connectors::ConnectorSettings;
use crate::diagnostics::{AttrPath, Diagnostics};
use crate::field::Field;
use crate::scalar::{self, prior_field};
use crate::secret::{self, SecretString};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AwsCloudTrailSource {
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub key_id: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub secret_key: Field<SecretString>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub region_name: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub start_date: Field<String>,
}

impl ConnectorSettings for AwsCloudTrailSource {
    const NAME: &'static str = "aws_cloudtrail_source";

    type Wire = wire::AwsCloudTrailSource;

    fn to_wire(&self, path: &AttrPath, diags: &mut Diagnostics) -> Self::Wire {
        wire::AwsCloudTrailSource {
            key_id: scalar::required_to_wire(&self.key_id, &path.child("key_id"), diags),
            secret_key: secret::required_to_wire(&self.secret_key, &path.child("secret_key"), diags),
            region_name: scalar::required_to_wire(&self.region_name, &path.child("region_name"), diags),
            start_date: scalar::to_wire(&self.start_date, &path.child("start_date"), diags),
        }
    }

    fn from_wire(
        wire: &Self::Wire,
        prior: Option<&Self>,
        _path: &AttrPath,
        _diags: &mut Diagnostics,
    ) -> Self {
        Self {
            key_id: scalar::from_wire(&wire.key_id, &prior_field(prior, |p| &p.key_id)),
            secret_key: secret::from_wire(wire.secret_key.as_ref(), &prior_field(prior, |p| &p.secret_key)),
            region_name: scalar::from_wire(&wire.region_name, &prior_field(prior, |p| &p.region_name)),
            start_date: scalar::from_wire(&wire.start_date, &prior_field(prior, |p| &p.start_date)),
        }
    }
}
