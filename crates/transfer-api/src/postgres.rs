use crate::common::{CleanupPolicy, HostConnection, ObjectTransferStage, Secret};

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PostgresSource {
    #[prost(message, optional, tag = "1")]
    pub connection: Option<HostConnection>,
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
    #[prost(int64, tag = "7")]
    pub slot_byte_lag_limit: i64,
    #[prost(string, tag = "8")]
    pub service_schema: String,
    #[prost(message, optional, tag = "9")]
    pub object_transfer_settings: Option<PostgresObjectTransferSettings>,
}

/// Per object kind stage. `Unspecified` leaves the server default in place.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct PostgresObjectTransferSettings {
    #[prost(enumeration = "ObjectTransferStage", tag = "1")]
    pub sequence: i32,
    #[prost(enumeration = "ObjectTransferStage", tag = "2")]
    pub sequence_owned_by: i32,
    #[prost(enumeration = "ObjectTransferStage", tag = "3")]
    pub sequence_set: i32,
    #[prost(enumeration = "ObjectTransferStage", tag = "4")]
    pub table: i32,
    #[prost(enumeration = "ObjectTransferStage", tag = "5")]
    pub primary_key: i32,
    #[prost(enumeration = "ObjectTransferStage", tag = "6")]
    pub fkey_constraint: i32,
    #[prost(enumeration = "ObjectTransferStage", tag = "7")]
    pub default_values: i32,
    #[prost(enumeration = "ObjectTransferStage", tag = "8")]
    pub constraint: i32,
    #[prost(enumeration = "ObjectTransferStage", tag = "9")]
    pub index: i32,
    #[prost(enumeration = "ObjectTransferStage", tag = "10")]
    pub view: i32,
    #[prost(enumeration = "ObjectTransferStage", tag = "11")]
    pub materialized_view: i32,
    #[prost(enumeration = "ObjectTransferStage", tag = "12")]
    pub function: i32,
    #[prost(enumeration = "ObjectTransferStage", tag = "13")]
    pub trigger: i32,
    #[prost(enumeration = "ObjectTransferStage", tag = "14")]
    pub r#type: i32,
    #[prost(enumeration = "ObjectTransferStage", tag = "15")]
    pub rule: i32,
    #[prost(enumeration = "ObjectTransferStage", tag = "16")]
    pub collation: i32,
    #[prost(enumeration = "ObjectTransferStage", tag = "17")]
    pub policy: i32,
    #[prost(enumeration = "ObjectTransferStage", tag = "18")]
    pub cast: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PostgresTarget {
    #[prost(message, optional, tag = "1")]
    pub connection: Option<HostConnection>,
    #[prost(string, tag = "2")]
    pub database: String,
    #[prost(string, tag = "3")]
    pub user: String,
    #[prost(message, optional, tag = "4")]
    pub password: Option<Secret>,
    #[prost(enumeration = "CleanupPolicy", tag = "5")]
    pub cleanup_policy: i32,
}
