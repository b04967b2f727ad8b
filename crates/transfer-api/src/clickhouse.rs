use crate::common::{CleanupPolicy, Empty, Secret, TlsMode};

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ClickhouseConnection {
    #[prost(oneof = "clickhouse_connection::Connection", tags = "1, 2")]
    pub connection: Option<clickhouse_connection::Connection>,
}

pub mod clickhouse_connection {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Connection {
        #[prost(string, tag = "1")]
        ClusterId(String),
        #[prost(message, tag = "2")]
        OnPremise(super::ClickhouseOnPremise),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ClickhouseOnPremise {
    #[prost(message, repeated, tag = "1")]
    pub shards: Vec<ClickhouseShard>,
    #[prost(int64, tag = "2")]
    pub http_port: i64,
    #[prost(int64, tag = "3")]
    pub native_port: i64,
    #[prost(message, optional, tag = "4")]
    pub tls_mode: Option<TlsMode>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ClickhouseShard {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, repeated, tag = "2")]
    pub hosts: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ClickhouseSource {
    #[prost(message, optional, tag = "1")]
    pub connection: Option<ClickhouseConnection>,
    #[prost(string, tag = "2")]
    pub database: String,
    #[prost(string, tag = "3")]
    pub user: String,
    #[prost(message, optional, tag = "4")]
    pub password: Option<Secret>,
    #[prost(string, repeated, tag = "5")]
    pub include_tables: Vec<String>,
    #[prost(string, repeated, tag = "6")]
    pub exclude_tables: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ClickhouseTarget {
    #[prost(message, optional, tag = "1")]
    pub connection: Option<ClickhouseConnection>,
    #[prost(string, tag = "2")]
    pub database: String,
    #[prost(string, tag = "3")]
    pub user: String,
    #[prost(message, optional, tag = "4")]
    pub password: Option<Secret>,
    #[prost(enumeration = "CleanupPolicy", tag = "5")]
    pub cleanup_policy: i32,
    #[prost(string, tag = "6")]
    pub clickhouse_cluster_name: String,
    #[prost(message, repeated, tag = "7")]
    pub alt_names: Vec<AltName>,
    #[prost(message, optional, tag = "8")]
    pub sharding: Option<ClickhouseSharding>,
}

/// Renames a source table in the target
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AltName {
    #[prost(string, tag = "1")]
    pub from_name: String,
    #[prost(string, tag = "2")]
    pub to_name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ClickhouseSharding {
    #[prost(oneof = "clickhouse_sharding::Sharding", tags = "1, 2, 3")]
    pub sharding: Option<clickhouse_sharding::Sharding>,
}

pub mod clickhouse_sharding {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Sharding {
        #[prost(message, tag = "1")]
        ColumnValueHash(super::ColumnValueHash),
        #[prost(message, tag = "2")]
        TransferId(super::Empty),
        #[prost(message, tag = "3")]
        RoundRobin(super::Empty),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ColumnValueHash {
    #[prost(string, tag = "1")]
    pub column_name: String,
}
