//!
//! # Transfer API
//!
//! Wire messages of the transfer control plane endpoint service and the
//! contract of its client. Messages follow the protobuf definitions of the
//! service: one-of groups are Rust enums wrapped in `Option`, enumerations
//! travel as `i32` codes where `0` means unspecified.
//!
pub mod common;
pub mod endpoint;
pub mod service;

pub mod clickhouse;
pub mod kafka;
pub mod kinesis;
pub mod mongo;
pub mod mysql;
pub mod postgres;
pub mod s3;
pub mod saas;
pub mod search;
pub mod warehouse;

pub use endpoint::endpoint_settings::Settings;
pub use endpoint::{Endpoint, EndpointSettings, FieldMask};
pub use service::{ApiError, EndpointClient, Operation};
