use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use transfer_api::saas::{self as wire, MetrikaStreamType};

use crate::connectors::ConnectorSettings;
use crate::diagnostics::{AttrPath, Diagnostics};
use crate::enums;
use crate::field::Field;
use crate::scalar::{self, prior_field};
use crate::secret::{self, SecretString};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct MetrikaStream {
    /// `HITS`, `VISITS` or `HITS_V2`
    #[serde(rename = "type", skip_serializing_if = "Field::is_absent")]
    pub stream_type: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub columns: Field<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct MetrikaSource {
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub counter_ids: Field<Vec<i64>>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub token: Field<SecretString>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub streams: Field<Vec<MetrikaStream>>,
}

impl ConnectorSettings for MetrikaSource {
    const NAME: &'static str = "metrika_source";

    type Wire = wire::MetrikaSource;

    fn to_wire(&self, path: &AttrPath, diags: &mut Diagnostics) -> Self::Wire {
        wire::MetrikaSource {
            counter_ids: scalar::required_to_wire(&self.counter_ids, &path.child("counter_ids"), diags),
            token: secret::required_to_wire(&self.token, &path.child("token"), diags),
            streams: scalar::records_to_wire(&self.streams, &path.child("streams"), diags, |stream, path, diags| {
                let stream_type = if stream.stream_type.is_absent() {
                    scalar::report_missing(&path.child("type"), diags);
                    0
                } else {
                    enums::encode::<MetrikaStreamType>(&stream.stream_type, &path.child("type"), diags)
                };
                wire::MetrikaStream {
                    stream_type,
                    columns: scalar::to_wire(&stream.columns, &path.child("columns"), diags),
                }
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
            counter_ids: scalar::from_wire(&wire.counter_ids, &prior_field(prior, |p| &p.counter_ids)),
            token: secret::from_wire(wire.token.as_ref(), &prior_field(prior, |p| &p.token)),
            streams: scalar::records_from_wire(
                &wire.streams,
                &prior_field(prior, |p| &p.streams),
                &path.child("streams"),
                diags,
                |stream, prior, path, diags| MetrikaStream {
                    stream_type: enums::decode::<MetrikaStreamType>(
                        stream.stream_type,
                        &path.child("type"),
                        diags,
                    ),
                    columns: scalar::from_wire(&stream.columns, &prior_field(prior, |s| &s.columns)),
                },
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_round_trip() {
        //given
        let flat = MetrikaSource {
            counter_ids: Field::Known(vec![44_147_844]),
            token: "token".into(),
            streams: Field::Known(vec![
                MetrikaStream {
                    stream_type: "HITS_V2".into(),
                    columns: Field::Known(vec!["ym:pv:watchID".to_owned(), "ym:pv:URL".to_owned()]),
                },
                MetrikaStream {
                    stream_type: "VISITS".into(),
                    columns: Field::Absent,
                },
            ]),
        };
        let path = AttrPath::root(MetrikaSource::NAME);
        let mut diags = Diagnostics::new();

        //when
        let wire = flat.to_wire(&path, &mut diags);
        let back = MetrikaSource::from_wire(&wire, Some(&flat), &path, &mut diags);

        //then
        assert!(diags.is_empty(), "{diags}");
        assert_eq!(wire.streams[0].stream_type, MetrikaStreamType::HitsV2 as i32);
        assert_eq!(back, flat);
    }

    #[test]
    fn test_stream_type_required() {
        let flat = MetrikaSource {
            counter_ids: Field::Known(vec![1]),
            token: "token".into(),
            streams: Field::Known(vec![MetrikaStream::default()]),
        };
        let mut diags = Diagnostics::new();
        flat.to_wire(&AttrPath::root(MetrikaSource::NAME), &mut diags);
        assert_eq!(
            diags.to_string(),
            "error: metrika_source.streams[0].type: missing required value"
        );
    }

    #[test]
    fn test_explicit_empty_streams() {
        let flat = MetrikaSource {
            counter_ids: Field::Known(vec![1]),
            token: "token".into(),
            streams: Field::Known(vec![]),
        };
        let path = AttrPath::root(MetrikaSource::NAME);
        let mut diags = Diagnostics::new();
        let wire = flat.to_wire(&path, &mut diags);
        let back = MetrikaSource::from_wire(&wire, Some(&flat), &path, &mut diags);
        assert_eq!(back.streams, Field::Known(vec![]));
        assert_eq!(MetrikaSource::from_wire(&wire, None, &path, &mut diags).streams, Field::Absent);
    }
}
