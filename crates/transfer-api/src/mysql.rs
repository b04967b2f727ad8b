use crate::common::{CleanupPolicy, HostConnection, ObjectTransferStage, Secret};

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MysqlSource {
    #[prost(message, optional, tag = "1")]
    pub connection: Option<HostConnection>,
    #[prost(string, tag = "2")]
    pub database: String,
    #[prost(string, tag = "3")]
    pub user: String,
    #[prost(message, optional, tag = "4")]
    pub password: Option<Secret>,
    #[prost(string, repeated, tag = "5")]
    pub include_tables_regex: Vec<String>,
    #[prost(string, repeated, tag = "6")]
    pub exclude_tables_regex: Vec<String>,
    #[prost(string, tag = "7")]
    pub timezone: String,
    #[prost(string, tag = "8")]
    pub service_database: String,
    #[prost(message, optional, tag = "9")]
    pub object_transfer_settings: Option<MysqlObjectTransferSettings>,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct MysqlObjectTransferSettings {
    #[prost(enumeration = "ObjectTransferStage", tag = "1")]
    pub view: i32,
    #[prost(enumeration = "ObjectTransferStage", tag = "2")]
    pub routine: i32,
    #[prost(enumeration = "ObjectTransferStage", tag = "3")]
    pub trigger: i32,
    #[prost(enumeration = "ObjectTransferStage", tag = "4")]
    pub tables: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MysqlTarget {
    #[prost(message, optional, tag = "1")]
    pub connection: Option<HostConnection>,
    #[prost(string, tag = "2")]
    pub database: String,
    #[prost(string, tag = "3")]
    pub user: String,
    #[prost(message, optional, tag = "4")]
    pub password: Option<Secret>,
    #[prost(string, tag = "5")]
    pub sql_mode: String,
    #[prost(bool, tag = "6")]
    pub skip_constraint_checks: bool,
    #[prost(string, tag = "7")]
    pub timezone: String,
    #[prost(enumeration = "CleanupPolicy", tag = "8")]
    pub cleanup_policy: i32,
    #[prost(string, tag = "9")]
    pub service_database: String,
}
