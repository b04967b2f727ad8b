use crate::common::{CleanupPolicy, OAuthCredentials, Secret, UsernamePassword};

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MssqlSource {
    #[prost(string, tag = "1")]
    pub host: String,
    #[prost(int64, tag = "2")]
    pub port: i64,
    #[prost(string, tag = "3")]
    pub database: String,
    #[prost(string, repeated, tag = "4")]
    pub schemas: Vec<String>,
    #[prost(string, tag = "5")]
    pub username: String,
    #[prost(message, optional, tag = "6")]
    pub password: Option<Secret>,
    #[prost(string, tag = "7")]
    pub jdbc_url_params: String,
    #[prost(enumeration = "MssqlReplicationMethod", tag = "8")]
    pub replication_method: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum MssqlReplicationMethod {
    Unspecified = 0,
    Standard = 1,
    Cdc = 2,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SnowflakeSource {
    #[prost(string, tag = "1")]
    pub host: String,
    #[prost(string, tag = "2")]
    pub role: String,
    #[prost(string, tag = "3")]
    pub warehouse: String,
    #[prost(string, tag = "4")]
    pub database: String,
    #[prost(string, tag = "5")]
    pub schema: String,
    #[prost(string, tag = "6")]
    pub jdbc_url_params: String,
    #[prost(message, optional, tag = "7")]
    pub credentials: Option<SnowflakeCredentials>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SnowflakeCredentials {
    #[prost(oneof = "snowflake_credentials::Credentials", tags = "1, 2")]
    pub credentials: Option<snowflake_credentials::Credentials>,
}

pub mod snowflake_credentials {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Credentials {
        #[prost(message, tag = "1")]
        UsernamePassword(super::UsernamePassword),
        #[prost(message, tag = "2")]
        Oauth(super::OAuthCredentials),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RedshiftSource {
    #[prost(string, tag = "1")]
    pub host: String,
    #[prost(int64, tag = "2")]
    pub port: i64,
    #[prost(string, tag = "3")]
    pub database: String,
    #[prost(string, repeated, tag = "4")]
    pub schemas: Vec<String>,
    #[prost(string, tag = "5")]
    pub username: String,
    #[prost(message, optional, tag = "6")]
    pub password: Option<Secret>,
    #[prost(string, tag = "7")]
    pub jdbc_url_params: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BigqueryTarget {
    #[prost(string, tag = "1")]
    pub project_id: String,
    #[prost(string, tag = "2")]
    pub dataset_id: String,
    #[prost(string, tag = "3")]
    pub location: String,
    #[prost(message, optional, tag = "4")]
    pub credentials_json: Option<Secret>,
    #[prost(enumeration = "CleanupPolicy", tag = "5")]
    pub cleanup_policy: i32,
}
