use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use transfer_api::kinesis as wire;

use crate::diagnostics::{AttrPath, Diagnostics};
use crate::field::Field;
use crate::parser::{self, Parser};
use crate::scalar::{self, prior_field};
use crate::secret::{self, SecretString};

use super::ConnectorSettings;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct KinesisSource {
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub stream_name: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub region: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub aws_access_key_id: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub aws_secret_access_key: Field<SecretString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parser: Option<Parser>,
}

impl ConnectorSettings for KinesisSource {
    const NAME: &'static str = "kinesis_source";

    type Wire = wire::KinesisSource;

    fn to_wire(&self, path: &AttrPath, diags: &mut Diagnostics) -> Self::Wire {
        wire::KinesisSource {
            stream_name: scalar::required_to_wire(&self.stream_name, &path.child("stream_name"), diags),
            region: scalar::required_to_wire(&self.region, &path.child("region"), diags),
            aws_access_key_id: scalar::to_wire(
                &self.aws_access_key_id,
                &path.child("aws_access_key_id"),
                diags,
            ),
            aws_secret_access_key: secret::to_wire(
                &self.aws_secret_access_key,
                &path.child("aws_secret_access_key"),
                diags,
            ),
            parser: parser::to_wire(self.parser.as_ref(), &path.child("parser"), diags),
        }
    }

    fn from_wire(
        wire: &Self::Wire,
        prior: Option<&Self>,
        path: &AttrPath,
        diags: &mut Diagnostics,
    ) -> Self {
        Self {
            stream_name: scalar::from_wire(&wire.stream_name, &prior_field(prior, |p| &p.stream_name)),
            region: scalar::from_wire(&wire.region, &prior_field(prior, |p| &p.region)),
            aws_access_key_id: scalar::from_wire(
                &wire.aws_access_key_id,
                &prior_field(prior, |p| &p.aws_access_key_id),
            ),
            aws_secret_access_key: secret::from_wire(
                wire.aws_secret_access_key.as_ref(),
                &prior_field(prior, |p| &p.aws_secret_access_key),
            ),
            parser: parser::from_wire(
                wire.parser.as_ref(),
                prior.and_then(|p| p.parser.as_ref()),
                &path.child("parser"),
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
    fn test_secret_key_not_clobbered() {
        //given
        let flat = KinesisSource {
            stream_name: "clicks".into(),
            region: "eu-central-1".into(),
            aws_access_key_id: "AKIA".into(),
            aws_secret_access_key: "s3cr3t".into(),
            parser: None,
        };
        let path = AttrPath::root(KinesisSource::NAME);
        let mut diags = Diagnostics::new();
        let mut wire = flat.to_wire(&path, &mut diags);
        wire.aws_secret_access_key = None;

        //when
        let back = KinesisSource::from_wire(&wire, Some(&flat), &path, &mut diags);

        //then
        assert!(diags.is_empty());
        assert_eq!(back, flat);
    }

    #[test]
    fn test_required_stream_and_region() {
        let mut diags = Diagnostics::new();
        KinesisSource::default().to_wire(&AttrPath::root(KinesisSource::NAME), &mut diags);
        let paths: Vec<_> = diags.errors().map(|d| d.path.to_string()).collect();
        assert_eq!(
            paths,
            vec!["kinesis_source.stream_name", "kinesis_source.region"]
        );
    }
}
