//!
//! # Shared messages
//!
//! Building blocks reused by several connector settings: secrets, TLS mode,
//! self-hosted addressing, credential shapes, parsers and the enumerations
//! that more than one connector carries.
//!

/// Message without fields, used as the payload of one-of arms that carry no data.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Empty {}

/// Secret value. The API never echoes secrets back, reads return an empty value.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Secret {
    #[prost(oneof = "secret::Value", tags = "1")]
    pub value: Option<secret::Value>,
}

pub mod secret {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Value {
        #[prost(string, tag = "1")]
        Raw(String),
    }
}

impl Secret {
    pub fn raw(value: impl Into<String>) -> Self {
        Self {
            value: Some(secret::Value::Raw(value.into())),
        }
    }

    /// raw value, `None` when the secret was redacted or not set
    pub fn raw_value(&self) -> Option<&str> {
        match &self.value {
            Some(secret::Value::Raw(raw)) if !raw.is_empty() => Some(raw.as_str()),
            _ => None,
        }
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TlsMode {
    #[prost(oneof = "tls_mode::Mode", tags = "1, 2")]
    pub mode: Option<tls_mode::Mode>,
}

pub mod tls_mode {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Mode {
        #[prost(message, tag = "1")]
        Disabled(super::Empty),
        #[prost(message, tag = "2")]
        Enabled(super::TlsConfig),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TlsConfig {
    #[prost(string, tag = "1")]
    pub ca_certificate: String,
}

/// Self-hosted host list shared by relational and search connectors
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OnPremise {
    #[prost(string, repeated, tag = "1")]
    pub hosts: Vec<String>,
    #[prost(int64, tag = "2")]
    pub port: i64,
    #[prost(message, optional, tag = "3")]
    pub tls_mode: Option<TlsMode>,
}

/// Managed cluster reference or self-hosted host list
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HostConnection {
    #[prost(oneof = "host_connection::Connection", tags = "1, 2")]
    pub connection: Option<host_connection::Connection>,
}

pub mod host_connection {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Connection {
        #[prost(string, tag = "1")]
        ClusterId(String),
        #[prost(message, tag = "2")]
        OnPremise(super::OnPremise),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OAuthCredentials {
    #[prost(string, tag = "1")]
    pub client_id: String,
    #[prost(message, optional, tag = "2")]
    pub client_secret: Option<Secret>,
    #[prost(message, optional, tag = "3")]
    pub refresh_token: Option<Secret>,
    #[prost(message, optional, tag = "4")]
    pub access_token: Option<Secret>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AccessToken {
    #[prost(message, optional, tag = "1")]
    pub access_token: Option<Secret>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UsernamePassword {
    #[prost(string, tag = "1")]
    pub username: String,
    #[prost(message, optional, tag = "2")]
    pub password: Option<Secret>,
}

/// Record parser used by streaming sources
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Parser {
    #[prost(oneof = "parser::Parser", tags = "1, 2")]
    pub parser: Option<parser::Parser>,
}

pub mod parser {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Parser {
        #[prost(message, tag = "1")]
        JsonParser(super::GenericParser),
        #[prost(message, tag = "2")]
        TskvParser(super::GenericParser),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GenericParser {
    #[prost(message, optional, tag = "1")]
    pub data_schema: Option<DataSchema>,
    #[prost(bool, tag = "2")]
    pub null_keys_allowed: bool,
    #[prost(bool, tag = "3")]
    pub add_rest_column: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DataSchema {
    #[prost(oneof = "data_schema::Schema", tags = "1, 2")]
    pub schema: Option<data_schema::Schema>,
}

pub mod data_schema {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Schema {
        #[prost(message, tag = "1")]
        Fields(super::FieldList),
        #[prost(string, tag = "2")]
        JsonFields(String),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FieldList {
    #[prost(message, repeated, tag = "1")]
    pub fields: Vec<ColSchema>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ColSchema {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(enumeration = "ColumnType", tag = "2")]
    pub column_type: i32,
    #[prost(bool, tag = "3")]
    pub key: bool,
    #[prost(bool, tag = "4")]
    pub required: bool,
    #[prost(string, tag = "5")]
    pub path: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum CleanupPolicy {
    Unspecified = 0,
    Disabled = 1,
    Drop = 2,
    Truncate = 3,
}

/// When a schema object is created relative to the data copy
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ObjectTransferStage {
    Unspecified = 0,
    BeforeData = 1,
    AfterData = 2,
    Never = 3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ColumnType {
    Unspecified = 0,
    Int64 = 1,
    Int32 = 2,
    Int16 = 3,
    Int8 = 4,
    Uint64 = 5,
    Uint32 = 6,
    Uint16 = 7,
    Uint8 = 8,
    Double = 9,
    Boolean = 10,
    String = 11,
    Utf8 = 12,
    Any = 13,
    Datetime = 14,
}
