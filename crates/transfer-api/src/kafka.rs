use crate::common::{Empty, Parser, Secret, TlsMode};

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct KafkaConnection {
    #[prost(oneof = "kafka_connection::Connection", tags = "1, 2")]
    pub connection: Option<kafka_connection::Connection>,
}

pub mod kafka_connection {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Connection {
        #[prost(string, tag = "1")]
        ClusterId(String),
        #[prost(message, tag = "2")]
        OnPremise(super::KafkaOnPremise),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct KafkaOnPremise {
    #[prost(string, repeated, tag = "1")]
    pub broker_urls: Vec<String>,
    #[prost(message, optional, tag = "2")]
    pub tls_mode: Option<TlsMode>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct KafkaAuth {
    #[prost(oneof = "kafka_auth::Security", tags = "1, 2")]
    pub security: Option<kafka_auth::Security>,
}

pub mod kafka_auth {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Security {
        #[prost(message, tag = "1")]
        Sasl(super::KafkaSaslSecurity),
        #[prost(message, tag = "2")]
        NoAuth(super::Empty),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct KafkaSaslSecurity {
    #[prost(string, tag = "1")]
    pub user: String,
    #[prost(message, optional, tag = "2")]
    pub password: Option<Secret>,
    #[prost(enumeration = "KafkaMechanism", tag = "3")]
    pub mechanism: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum KafkaMechanism {
    Unspecified = 0,
    Sha256 = 1,
    Sha512 = 2,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct KafkaSource {
    #[prost(message, optional, tag = "1")]
    pub connection: Option<KafkaConnection>,
    #[prost(message, optional, tag = "2")]
    pub auth: Option<KafkaAuth>,
    #[prost(string, tag = "3")]
    pub topic_name: String,
    #[prost(string, repeated, tag = "4")]
    pub topic_names: Vec<String>,
    #[prost(message, optional, tag = "5")]
    pub parser: Option<Parser>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct KafkaTarget {
    #[prost(message, optional, tag = "1")]
    pub connection: Option<KafkaConnection>,
    #[prost(message, optional, tag = "2")]
    pub auth: Option<KafkaAuth>,
    #[prost(message, optional, tag = "3")]
    pub topic_settings: Option<KafkaTargetTopicSettings>,
    #[prost(message, optional, tag = "4")]
    pub serializer: Option<Serializer>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct KafkaTargetTopicSettings {
    #[prost(oneof = "kafka_target_topic_settings::TopicSettings", tags = "1, 2")]
    pub topic_settings: Option<kafka_target_topic_settings::TopicSettings>,
}

pub mod kafka_target_topic_settings {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum TopicSettings {
        #[prost(message, tag = "1")]
        Topic(super::KafkaTargetTopic),
        #[prost(string, tag = "2")]
        TopicPrefix(String),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct KafkaTargetTopic {
    #[prost(string, tag = "1")]
    pub topic_name: String,
    #[prost(bool, tag = "2")]
    pub save_tx_order: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Serializer {
    #[prost(oneof = "serializer::Serializer", tags = "1, 2, 3")]
    pub serializer: Option<serializer::Serializer>,
}

pub mod serializer {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Serializer {
        #[prost(message, tag = "1")]
        SerializerAuto(super::Empty),
        #[prost(message, tag = "2")]
        SerializerJson(super::Empty),
        #[prost(message, tag = "3")]
        SerializerDebezium(super::SerializerDebezium),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SerializerDebezium {
    #[prost(message, repeated, tag = "1")]
    pub serializer_parameters: Vec<DebeziumSerializerParameter>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DebeziumSerializerParameter {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(string, tag = "2")]
    pub value: String,
}
