//!
//! Kafka source and target.
//!
//! Both sides authenticate through a one-of of `sasl` and `no_auth`. The
//! target additionally selects where records go (`topic` or `topic_prefix`)
//! and how they are encoded (`auto`, `json` or `debezium`).
//!
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use transfer_api::common::Empty;
use transfer_api::kafka::{
    self as wire, KafkaMechanism, kafka_auth, kafka_target_topic_settings, serializer,
};

use crate::connection::{self, EmptyBlock, KafkaConnection};
use crate::diagnostics::{AttrPath, DiagnosticKind, Diagnostics};
use crate::enums;
use crate::field::Field;
use crate::one_of::{self, exactly_one};
use crate::parser::{self, Parser};
use crate::scalar::{self, prior_field};
use crate::secret::{self, SecretString};

use super::ConnectorSettings;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct KafkaSasl {
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub user: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub password: Field<SecretString>,
    /// `SHA_256` or `SHA_512`
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub mechanism: Field<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct KafkaAuth {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sasl: Option<KafkaSasl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_auth: Option<EmptyBlock>,
}

fn auth_to_wire(flat: Option<&KafkaAuth>, path: &AttrPath, diags: &mut Diagnostics) -> Option<wire::KafkaAuth> {
    let auth = one_of::required(flat, "auth", path, diags)?;
    let path = path.child("auth");
    if !exactly_one(
        &path,
        &[("sasl", auth.sasl.is_some()), ("no_auth", auth.no_auth.is_some())],
        diags,
    ) {
        return None;
    }
    let security = match &auth.sasl {
        Some(sasl) => {
            let path = path.child("sasl");
            kafka_auth::Security::Sasl(wire::KafkaSaslSecurity {
                user: scalar::required_to_wire(&sasl.user, &path.child("user"), diags),
                password: secret::required_to_wire(&sasl.password, &path.child("password"), diags),
                mechanism: enums::encode::<KafkaMechanism>(&sasl.mechanism, &path.child("mechanism"), diags),
            })
        }
        None => kafka_auth::Security::NoAuth(Empty {}),
    };
    Some(wire::KafkaAuth {
        security: Some(security),
    })
}

fn auth_from_wire(
    wire: Option<&wire::KafkaAuth>,
    prior: Option<&KafkaAuth>,
    path: &AttrPath,
    diags: &mut Diagnostics,
) -> Option<KafkaAuth> {
    match wire.and_then(|auth| auth.security.as_ref()) {
        Some(kafka_auth::Security::Sasl(sasl)) => {
            let prior = prior.and_then(|p| p.sasl.as_ref());
            Some(KafkaAuth {
                sasl: Some(KafkaSasl {
                    user: scalar::from_wire(&sasl.user, &prior_field(prior, |p| &p.user)),
                    password: secret::from_wire(
                        sasl.password.as_ref(),
                        &prior_field(prior, |p| &p.password),
                    ),
                    mechanism: enums::decode::<KafkaMechanism>(
                        sasl.mechanism,
                        &path.child("auth").child("sasl").child("mechanism"),
                        diags,
                    ),
                }),
                no_auth: None,
            })
        }
        Some(kafka_auth::Security::NoAuth(_)) => Some(KafkaAuth {
            sasl: None,
            no_auth: Some(EmptyBlock {}),
        }),
        None => prior.cloned(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct KafkaSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection: Option<KafkaConnection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<KafkaAuth>,
    /// single topic, `topic_names` takes a list
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub topic_name: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub topic_names: Field<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parser: Option<Parser>,
}

impl ConnectorSettings for KafkaSource {
    const NAME: &'static str = "kafka_source";

    type Wire = wire::KafkaSource;

    fn to_wire(&self, path: &AttrPath, diags: &mut Diagnostics) -> Self::Wire {
        if self.topic_name.is_absent() && self.topic_names.is_absent() {
            diags.error(
                &path.child("topic_name"),
                DiagnosticKind::InvalidValue("set `topic_name` or `topic_names`".to_owned()),
            );
        }
        wire::KafkaSource {
            connection: connection::kafka_connection_to_wire(self.connection.as_ref(), path, diags),
            auth: auth_to_wire(self.auth.as_ref(), path, diags),
            topic_name: scalar::to_wire(&self.topic_name, &path.child("topic_name"), diags),
            topic_names: scalar::to_wire(&self.topic_names, &path.child("topic_names"), diags),
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
            connection: connection::kafka_connection_from_wire(
                wire.connection.as_ref(),
                prior.and_then(|p| p.connection.as_ref()),
            ),
            auth: auth_from_wire(
                wire.auth.as_ref(),
                prior.and_then(|p| p.auth.as_ref()),
                path,
                diags,
            ),
            topic_name: scalar::from_wire(&wire.topic_name, &prior_field(prior, |p| &p.topic_name)),
            topic_names: scalar::from_wire(&wire.topic_names, &prior_field(prior, |p| &p.topic_names)),
            parser: parser::from_wire(
                wire.parser.as_ref(),
                prior.and_then(|p| p.parser.as_ref()),
                &path.child("parser"),
                diags,
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct KafkaTopic {
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub topic_name: Field<String>,
    /// keep transaction order within a partition
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub save_tx_order: Field<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct KafkaTopicSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<KafkaTopic>,
    /// one topic per source table, named `<prefix>.<schema>.<table>`
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub topic_prefix: Field<String>,
}

fn topic_settings_to_wire(
    flat: Option<&KafkaTopicSettings>,
    path: &AttrPath,
    diags: &mut Diagnostics,
) -> Option<wire::KafkaTargetTopicSettings> {
    let settings = one_of::required(flat, "topic_settings", path, diags)?;
    let path = path.child("topic_settings");
    if !exactly_one(
        &path,
        &[
            ("topic", settings.topic.is_some()),
            ("topic_prefix", !settings.topic_prefix.is_absent()),
        ],
        diags,
    ) {
        return None;
    }
    let topic_settings = match &settings.topic {
        Some(topic) => kafka_target_topic_settings::TopicSettings::Topic(wire::KafkaTargetTopic {
            topic_name: scalar::required_to_wire(
                &topic.topic_name,
                &path.child("topic").child("topic_name"),
                diags,
            ),
            save_tx_order: scalar::to_wire(
                &topic.save_tx_order,
                &path.child("topic").child("save_tx_order"),
                diags,
            ),
        }),
        None => kafka_target_topic_settings::TopicSettings::TopicPrefix(scalar::to_wire(
            &settings.topic_prefix,
            &path.child("topic_prefix"),
            diags,
        )),
    };
    Some(wire::KafkaTargetTopicSettings {
        topic_settings: Some(topic_settings),
    })
}

fn topic_settings_from_wire(
    wire: Option<&wire::KafkaTargetTopicSettings>,
    prior: Option<&KafkaTopicSettings>,
) -> Option<KafkaTopicSettings> {
    match wire.and_then(|settings| settings.topic_settings.as_ref()) {
        Some(kafka_target_topic_settings::TopicSettings::Topic(topic)) => {
            let prior = prior.and_then(|p| p.topic.as_ref());
            Some(KafkaTopicSettings {
                topic: Some(KafkaTopic {
                    topic_name: scalar::from_wire(&topic.topic_name, &prior_field(prior, |p| &p.topic_name)),
                    save_tx_order: scalar::from_wire(
                        &topic.save_tx_order,
                        &prior_field(prior, |p| &p.save_tx_order),
                    ),
                }),
                topic_prefix: Field::Absent,
            })
        }
        Some(kafka_target_topic_settings::TopicSettings::TopicPrefix(prefix)) => {
            Some(KafkaTopicSettings {
                topic: None,
                topic_prefix: Field::Known(prefix.clone()),
            })
        }
        None => prior.cloned(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DebeziumParameter {
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub key: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub value: Field<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DebeziumSerializer {
    /// passed to the Debezium converter in order
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub parameters: Field<Vec<DebeziumParameter>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct KafkaSerializer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto: Option<EmptyBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json: Option<EmptyBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debezium: Option<DebeziumSerializer>,
}

fn serializer_to_wire(
    flat: Option<&KafkaSerializer>,
    path: &AttrPath,
    diags: &mut Diagnostics,
) -> Option<wire::Serializer> {
    let flat = one_of::required(flat, "serializer", path, diags)?;
    let path = path.child("serializer");
    if !exactly_one(
        &path,
        &[
            ("auto", flat.auto.is_some()),
            ("json", flat.json.is_some()),
            ("debezium", flat.debezium.is_some()),
        ],
        diags,
    ) {
        return None;
    }
    let serializer = if flat.auto.is_some() {
        serializer::Serializer::SerializerAuto(Empty {})
    } else if flat.json.is_some() {
        serializer::Serializer::SerializerJson(Empty {})
    } else if let Some(debezium) = &flat.debezium {
        serializer::Serializer::SerializerDebezium(wire::SerializerDebezium {
            serializer_parameters: scalar::records_to_wire(
                &debezium.parameters,
                &path.child("debezium").child("parameters"),
                diags,
                |param, path, diags| wire::DebeziumSerializerParameter {
                    key: scalar::required_to_wire(&param.key, &path.child("key"), diags),
                    value: scalar::to_wire(&param.value, &path.child("value"), diags),
                },
            ),
        })
    } else {
        return None;
    };
    Some(wire::Serializer {
        serializer: Some(serializer),
    })
}

fn serializer_from_wire(
    wire: Option<&wire::Serializer>,
    prior: Option<&KafkaSerializer>,
    path: &AttrPath,
    diags: &mut Diagnostics,
) -> Option<KafkaSerializer> {
    let serializer = match wire.and_then(|s| s.serializer.as_ref()) {
        Some(serializer) => serializer,
        None => return prior.cloned(),
    };
    let mut flat = KafkaSerializer::default();
    match serializer {
        serializer::Serializer::SerializerAuto(_) => flat.auto = Some(EmptyBlock {}),
        serializer::Serializer::SerializerJson(_) => flat.json = Some(EmptyBlock {}),
        serializer::Serializer::SerializerDebezium(debezium) => {
            flat.debezium = Some(DebeziumSerializer {
                parameters: scalar::records_from_wire(
                    &debezium.serializer_parameters,
                    &prior_field(prior.and_then(|p| p.debezium.as_ref()), |d| &d.parameters),
                    &path.child("debezium").child("parameters"),
                    diags,
                    |param, prior, _, _| DebeziumParameter {
                        key: scalar::from_wire(&param.key, &prior_field(prior, |p| &p.key)),
                        value: scalar::from_wire(&param.value, &prior_field(prior, |p| &p.value)),
                    },
                ),
            });
        }
    }
    Some(flat)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct KafkaTarget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection: Option<KafkaConnection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<KafkaAuth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_settings: Option<KafkaTopicSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serializer: Option<KafkaSerializer>,
}

impl ConnectorSettings for KafkaTarget {
    const NAME: &'static str = "kafka_target";

    type Wire = wire::KafkaTarget;

    fn to_wire(&self, path: &AttrPath, diags: &mut Diagnostics) -> Self::Wire {
        wire::KafkaTarget {
            connection: connection::kafka_connection_to_wire(self.connection.as_ref(), path, diags),
            auth: auth_to_wire(self.auth.as_ref(), path, diags),
            topic_settings: topic_settings_to_wire(self.topic_settings.as_ref(), path, diags),
            serializer: serializer_to_wire(self.serializer.as_ref(), path, diags),
        }
    }

    fn from_wire(
        wire: &Self::Wire,
        prior: Option<&Self>,
        path: &AttrPath,
        diags: &mut Diagnostics,
    ) -> Self {
        Self {
            connection: connection::kafka_connection_from_wire(
                wire.connection.as_ref(),
                prior.and_then(|p| p.connection.as_ref()),
            ),
            auth: auth_from_wire(
                wire.auth.as_ref(),
                prior.and_then(|p| p.auth.as_ref()),
                path,
                diags,
            ),
            topic_settings: topic_settings_from_wire(
                wire.topic_settings.as_ref(),
                prior.and_then(|p| p.topic_settings.as_ref()),
            ),
            serializer: serializer_from_wire(
                wire.serializer.as_ref(),
                prior.and_then(|p| p.serializer.as_ref()),
                &path.child("serializer"),
                diags,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::connection::{KafkaSelfHosted, ManagedCluster, TlsMode};

    use super::*;

    fn target() -> KafkaTarget {
        KafkaTarget {
            connection: Some(KafkaConnection {
                managed_cluster: None,
                self_hosted: Some(KafkaSelfHosted {
                    broker_urls: Field::Known(vec!["b1:9091".to_owned(), "b2:9091".to_owned()]),
                    tls_mode: Some(TlsMode::enabled("PEM".into())),
                }),
            }),
            auth: Some(KafkaAuth {
                sasl: Some(KafkaSasl {
                    user: "producer".into(),
                    password: "pw".into(),
                    mechanism: "SHA_512".into(),
                }),
                no_auth: None,
            }),
            topic_settings: Some(KafkaTopicSettings {
                topic: None,
                topic_prefix: "cdc".into(),
            }),
            serializer: Some(KafkaSerializer {
                debezium: Some(DebeziumSerializer {
                    parameters: Field::Known(vec![
                        DebeziumParameter {
                            key: "value.converter".into(),
                            value: "io.confluent.connect.avro.AvroConverter".into(),
                        },
                        DebeziumParameter {
                            key: "key.converter.schemas.enable".into(),
                            value: "false".into(),
                        },
                    ]),
                }),
                ..Default::default()
            }),
        }
    }

    #[test]
    fn test_target_round_trip() {
        //given
        let flat = target();
        let path = AttrPath::root(KafkaTarget::NAME);
        let mut diags = Diagnostics::new();

        //when
        let wire = flat.to_wire(&path, &mut diags);
        let back = KafkaTarget::from_wire(&wire, Some(&flat), &path, &mut diags);

        //then
        assert!(diags.is_empty(), "{diags}");
        assert_eq!(back, flat);
    }

    #[test]
    fn test_debezium_parameters_keep_order() {
        let mut diags = Diagnostics::new();
        let wire = target().to_wire(&AttrPath::root(KafkaTarget::NAME), &mut diags);
        let Some(serializer::Serializer::SerializerDebezium(debezium)) =
            wire.serializer.and_then(|s| s.serializer)
        else {
            panic!("expected debezium serializer");
        };
        let keys: Vec<_> = debezium
            .serializer_parameters
            .iter()
            .map(|p| p.key.as_str())
            .collect();
        assert_eq!(keys, vec!["value.converter", "key.converter.schemas.enable"]);
    }

    #[test]
    fn test_serializer_must_pick_one() {
        //given
        let mut flat = target();
        flat.serializer = Some(KafkaSerializer::default());
        let mut diags = Diagnostics::new();

        //when
        let wire = flat.to_wire(&AttrPath::root(KafkaTarget::NAME), &mut diags);

        //then
        assert_eq!(wire.serializer, None);
        assert_eq!(
            diags.to_string(),
            "error: kafka_target.serializer: specify exactly one of: auto, json, debezium"
        );
    }

    #[test]
    fn test_topic_and_prefix_conflict() {
        let mut flat = target();
        flat.topic_settings = Some(KafkaTopicSettings {
            topic: Some(KafkaTopic {
                topic_name: "orders".into(),
                save_tx_order: Field::Absent,
            }),
            topic_prefix: "cdc".into(),
        });
        let mut diags = Diagnostics::new();
        flat.to_wire(&AttrPath::root(KafkaTarget::NAME), &mut diags);
        assert_eq!(
            diags.to_string(),
            "error: kafka_target.topic_settings: specify exactly one of: topic, topic_prefix \
             (found: topic, topic_prefix)"
        );
    }

    #[test]
    fn test_every_problem_reported_at_once() {
        //given
        let flat = KafkaTarget {
            connection: None,
            auth: Some(KafkaAuth {
                sasl: Some(KafkaSasl {
                    user: "producer".into(),
                    password: "pw".into(),
                    mechanism: "SHA_1".into(),
                }),
                no_auth: None,
            }),
            topic_settings: None,
            serializer: Some(KafkaSerializer {
                auto: Some(EmptyBlock {}),
                json: Some(EmptyBlock {}),
                debezium: None,
            }),
        };
        let mut diags = Diagnostics::new();

        //when
        flat.to_wire(&AttrPath::root(KafkaTarget::NAME), &mut diags);

        //then
        let paths: Vec<_> = diags.errors().map(|d| d.path.to_string()).collect();
        assert_eq!(
            paths,
            vec![
                "kafka_target",
                "kafka_target.auth.sasl.mechanism",
                "kafka_target",
                "kafka_target.serializer",
            ]
        );
    }

    #[test]
    fn test_source_with_parser_and_no_auth() {
        //given
        let flat = KafkaSource {
            connection: Some(KafkaConnection {
                managed_cluster: Some(ManagedCluster {
                    cluster_id: "kfk1".into(),
                }),
                self_hosted: None,
            }),
            auth: Some(KafkaAuth {
                sasl: None,
                no_auth: Some(EmptyBlock {}),
            }),
            topic_name: Field::Absent,
            topic_names: Field::Known(vec!["orders".to_owned(), "payments".to_owned()]),
            parser: Some(Parser {
                json_parser: Some(crate::parser::GenericParser {
                    data_schema: Some(crate::parser::DataSchema {
                        fields: None,
                        json_fields: r#"[{"name":"id","type":"int64"}]"#.into(),
                    }),
                    ..Default::default()
                }),
                tskv_parser: None,
            }),
        };
        let path = AttrPath::root(KafkaSource::NAME);
        let mut diags = Diagnostics::new();

        //when
        let wire = flat.to_wire(&path, &mut diags);
        let back = KafkaSource::from_wire(&wire, Some(&flat), &path, &mut diags);

        //then
        assert!(diags.is_empty(), "{diags}");
        assert_eq!(back, flat);
    }

    #[test]
    fn test_source_needs_a_topic() {
        let mut diags = Diagnostics::new();
        let flat = KafkaSource {
            connection: Some(KafkaConnection {
                managed_cluster: Some(ManagedCluster {
                    cluster_id: "kfk1".into(),
                }),
                self_hosted: None,
            }),
            auth: Some(KafkaAuth {
                sasl: None,
                no_auth: Some(EmptyBlock {}),
            }),
            ..Default::default()
        };
        flat.to_wire(&AttrPath::root(KafkaSource::NAME), &mut diags);
        assert_eq!(
            diags.to_string(),
            "error: kafka_source.topic_name: set `topic_name` or `topic_names`"
        );
    }
}
