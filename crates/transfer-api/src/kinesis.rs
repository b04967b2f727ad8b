use crate::common::{Parser, Secret};

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct KinesisSource {
    #[prost(string, tag = "1")]
    pub stream_name: String,
    #[prost(string, tag = "2")]
    pub region: String,
    #[prost(string, tag = "3")]
    pub aws_access_key_id: String,
    #[prost(message, optional, tag = "4")]
    pub aws_secret_access_key: Option<Secret>,
    #[prost(message, optional, tag = "5")]
    pub parser: Option<Parser>,
}
