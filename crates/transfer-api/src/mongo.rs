use crate::common::{CleanupPolicy, Secret, TlsMode};

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MongoConnection {
    #[prost(oneof = "mongo_connection::Connection", tags = "1, 2, 3")]
    pub connection: Option<mongo_connection::Connection>,
}

pub mod mongo_connection {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Connection {
        #[prost(string, tag = "1")]
        ClusterId(String),
        #[prost(message, tag = "2")]
        OnPremise(super::MongoOnPremise),
        #[prost(message, tag = "3")]
        Srv(super::MongoSrv),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MongoOnPremise {
    #[prost(string, repeated, tag = "1")]
    pub hosts: Vec<String>,
    #[prost(int64, tag = "2")]
    pub port: i64,
    #[prost(string, tag = "3")]
    pub replica_set: String,
    #[prost(message, optional, tag = "4")]
    pub tls_mode: Option<TlsMode>,
}

/// DNS seed list, resolved by the driver through `mongodb+srv://`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MongoSrv {
    #[prost(string, tag = "1")]
    pub hostname: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MongoCollection {
    #[prost(string, tag = "1")]
    pub database_name: String,
    #[prost(string, tag = "2")]
    pub collection_name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MongoSource {
    #[prost(message, optional, tag = "1")]
    pub connection: Option<MongoConnection>,
    #[prost(string, tag = "2")]
    pub user: String,
    #[prost(message, optional, tag = "3")]
    pub password: Option<Secret>,
    #[prost(string, tag = "4")]
    pub auth_source: String,
    #[prost(message, repeated, tag = "5")]
    pub collections: Vec<MongoCollection>,
    #[prost(message, repeated, tag = "6")]
    pub excluded_collections: Vec<MongoCollection>,
    #[prost(bool, tag = "7")]
    pub secondary_preferred_mode: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MongoTarget {
    #[prost(message, optional, tag = "1")]
    pub connection: Option<MongoConnection>,
    #[prost(string, tag = "2")]
    pub user: String,
    #[prost(message, optional, tag = "3")]
    pub password: Option<Secret>,
    #[prost(string, tag = "4")]
    pub auth_source: String,
    #[prost(string, tag = "5")]
    pub database: String,
    #[prost(enumeration = "CleanupPolicy", tag = "6")]
    pub cleanup_policy: i32,
}
