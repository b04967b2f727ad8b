//!
//! # Endpoint
//!
//! The endpoint object, its connector settings union and the request messages
//! accepted by the endpoint service.
//!
pub use prost_types::FieldMask;

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Endpoint {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub project_id: String,
    #[prost(string, tag = "3")]
    pub name: String,
    #[prost(string, tag = "4")]
    pub description: String,
    #[prost(message, optional, tag = "5")]
    pub settings: Option<EndpointSettings>,
}

/// Connector settings, exactly one arm is set in a well formed message
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EndpointSettings {
    #[prost(
        oneof = "endpoint_settings::Settings",
        tags = "1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30"
    )]
    pub settings: Option<endpoint_settings::Settings>,
}

pub mod endpoint_settings {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Settings {
        #[prost(message, tag = "1")]
        PostgresSource(crate::postgres::PostgresSource),
        #[prost(message, tag = "2")]
        PostgresTarget(crate::postgres::PostgresTarget),
        #[prost(message, tag = "3")]
        MysqlSource(crate::mysql::MysqlSource),
        #[prost(message, tag = "4")]
        MysqlTarget(crate::mysql::MysqlTarget),
        #[prost(message, tag = "5")]
        ClickhouseSource(crate::clickhouse::ClickhouseSource),
        #[prost(message, tag = "6")]
        ClickhouseTarget(crate::clickhouse::ClickhouseTarget),
        #[prost(message, tag = "7")]
        MongoSource(crate::mongo::MongoSource),
        #[prost(message, tag = "8")]
        MongoTarget(crate::mongo::MongoTarget),
        #[prost(message, tag = "9")]
        MssqlSource(crate::warehouse::MssqlSource),
        #[prost(message, tag = "10")]
        SnowflakeSource(crate::warehouse::SnowflakeSource),
        #[prost(message, tag = "11")]
        RedshiftSource(crate::warehouse::RedshiftSource),
        #[prost(message, tag = "12")]
        BigqueryTarget(crate::warehouse::BigqueryTarget),
        #[prost(message, tag = "13")]
        KafkaSource(crate::kafka::KafkaSource),
        #[prost(message, tag = "14")]
        KafkaTarget(crate::kafka::KafkaTarget),
        #[prost(message, tag = "15")]
        KinesisSource(crate::kinesis::KinesisSource),
        #[prost(message, tag = "16")]
        ElasticsearchTarget(crate::search::ElasticsearchTarget),
        #[prost(message, tag = "17")]
        OpensearchTarget(crate::search::OpensearchTarget),
        #[prost(message, tag = "18")]
        S3Source(crate::s3::S3Source),
        #[prost(message, tag = "19")]
        S3Target(crate::s3::S3Target),
        #[prost(message, tag = "20")]
        AwsCloudtrailSource(crate::saas::AwsCloudTrailSource),
        #[prost(message, tag = "21")]
        FacebookmarketingSource(crate::saas::FacebookMarketingSource),
        #[prost(message, tag = "22")]
        GoogleAdsSource(crate::saas::GoogleAdsSource),
        #[prost(message, tag = "23")]
        HubspotSource(crate::saas::HubspotSource),
        #[prost(message, tag = "24")]
        InstagramSource(crate::saas::InstagramSource),
        #[prost(message, tag = "25")]
        JiraSource(crate::saas::JiraSource),
        #[prost(message, tag = "26")]
        LinkedinadsSource(crate::saas::LinkedinAdsSource),
        #[prost(message, tag = "27")]
        MetrikaSource(crate::saas::MetrikaSource),
        #[prost(message, tag = "28")]
        GithubSource(crate::saas::GithubSource),
        #[prost(message, tag = "29")]
        IntercomSource(crate::saas::IntercomSource),
        #[prost(message, tag = "30")]
        StripeSource(crate::saas::StripeSource),
    }
}

impl From<endpoint_settings::Settings> for EndpointSettings {
    fn from(settings: endpoint_settings::Settings) -> Self {
        Self {
            settings: Some(settings),
        }
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateEndpointRequest {
    #[prost(string, tag = "1")]
    pub project_id: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub description: String,
    #[prost(message, optional, tag = "4")]
    pub settings: Option<EndpointSettings>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetEndpointRequest {
    #[prost(string, tag = "1")]
    pub endpoint_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateEndpointRequest {
    #[prost(string, tag = "1")]
    pub endpoint_id: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub description: String,
    #[prost(message, optional, tag = "4")]
    pub settings: Option<EndpointSettings>,
    #[prost(message, optional, tag = "5")]
    pub update_mask: Option<FieldMask>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteEndpointRequest {
    #[prost(string, tag = "1")]
    pub endpoint_id: String,
}
