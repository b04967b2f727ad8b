use crate::common::{CleanupPolicy, HostConnection, Secret};

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ElasticsearchTarget {
    #[prost(message, optional, tag = "1")]
    pub connection: Option<HostConnection>,
    #[prost(string, tag = "2")]
    pub user: String,
    #[prost(message, optional, tag = "3")]
    pub password: Option<Secret>,
    #[prost(enumeration = "CleanupPolicy", tag = "4")]
    pub cleanup_policy: i32,
    #[prost(bool, tag = "5")]
    pub sanitize_doc_keys: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OpensearchTarget {
    #[prost(message, optional, tag = "1")]
    pub connection: Option<HostConnection>,
    #[prost(string, tag = "2")]
    pub user: String,
    #[prost(message, optional, tag = "3")]
    pub password: Option<Secret>,
    #[prost(enumeration = "CleanupPolicy", tag = "4")]
    pub cleanup_policy: i32,
    #[prost(bool, tag = "5")]
    pub sanitize_doc_keys: bool,
}
