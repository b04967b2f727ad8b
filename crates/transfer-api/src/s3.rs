use crate::common::{Empty, Secret};

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct S3Source {
    #[prost(string, tag = "1")]
    pub dataset: String,
    #[prost(string, tag = "2")]
    pub path_pattern: String,
    #[prost(string, tag = "3")]
    pub schema: String,
    #[prost(message, optional, tag = "4")]
    pub format: Option<S3Format>,
    #[prost(message, optional, tag = "5")]
    pub provider: Option<S3Provider>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct S3Format {
    #[prost(oneof = "s3_format::Format", tags = "1, 2, 3, 4")]
    pub format: Option<s3_format::Format>,
}

pub mod s3_format {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Format {
        #[prost(message, tag = "1")]
        Csv(super::Csv),
        #[prost(message, tag = "2")]
        Parquet(super::Parquet),
        #[prost(message, tag = "3")]
        Avro(super::Empty),
        #[prost(message, tag = "4")]
        Jsonl(super::Jsonl),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Csv {
    #[prost(string, tag = "1")]
    pub delimiter: String,
    #[prost(string, tag = "2")]
    pub quote_char: String,
    #[prost(string, tag = "3")]
    pub escape_char: String,
    #[prost(string, tag = "4")]
    pub encoding: String,
    #[prost(bool, tag = "5")]
    pub double_quote: bool,
    #[prost(bool, tag = "6")]
    pub newlines_in_values: bool,
    #[prost(int64, tag = "7")]
    pub block_size: i64,
    #[prost(string, tag = "8")]
    pub additional_reader_options: String,
    #[prost(string, tag = "9")]
    pub advanced_options: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Parquet {
    #[prost(int64, tag = "1")]
    pub buffer_size: i64,
    #[prost(string, repeated, tag = "2")]
    pub columns: Vec<String>,
    #[prost(int64, tag = "3")]
    pub batch_size: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Jsonl {
    #[prost(bool, tag = "1")]
    pub newlines_in_values: bool,
    #[prost(enumeration = "UnexpectedFieldBehavior", tag = "2")]
    pub unexpected_field_behavior: i32,
    #[prost(int64, tag = "3")]
    pub block_size: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum UnexpectedFieldBehavior {
    Unspecified = 0,
    Ignore = 1,
    Infer = 2,
    Error = 3,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct S3Provider {
    #[prost(string, tag = "1")]
    pub bucket: String,
    #[prost(string, tag = "2")]
    pub aws_access_key_id: String,
    #[prost(message, optional, tag = "3")]
    pub aws_secret_access_key: Option<Secret>,
    #[prost(string, tag = "4")]
    pub path_prefix: String,
    #[prost(string, tag = "5")]
    pub endpoint: String,
    #[prost(bool, tag = "6")]
    pub use_ssl: bool,
    #[prost(bool, tag = "7")]
    pub verify_ssl_cert: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct S3Target {
    #[prost(string, tag = "1")]
    pub bucket_name: String,
    #[prost(string, tag = "2")]
    pub bucket_path: String,
    #[prost(string, tag = "3")]
    pub region: String,
    #[prost(string, tag = "4")]
    pub endpoint: String,
    #[prost(string, tag = "5")]
    pub aws_access_key_id: String,
    #[prost(message, optional, tag = "6")]
    pub aws_secret_access_key: Option<Secret>,
    #[prost(enumeration = "S3OutputFormat", tag = "7")]
    pub output_format: i32,
    #[prost(enumeration = "S3OutputEncoding", tag = "8")]
    pub output_encoding: i32,
    #[prost(string, tag = "9")]
    pub buffer_size: String,
    #[prost(string, tag = "10")]
    pub buffer_interval: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum S3OutputFormat {
    Unspecified = 0,
    Json = 1,
    Csv = 2,
    Parquet = 3,
    Raw = 4,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum S3OutputEncoding {
    Unspecified = 0,
    Uncompressed = 1,
    Gzip = 2,
}
