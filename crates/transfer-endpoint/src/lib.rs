//!
//! # Transfer endpoint
//!
//! Conversion between the flat endpoint configuration an author writes and
//! the tagged-union settings of the transfer API.
//!
//! * [`config::EndpointConfig`] reads the configuration and builds create and
//!   update requests, then merges the server's endpoint back.
//! * [`settings::EndpointSettings`] selects the single connector block and
//!   dispatches it to its [`connectors::ConnectorSettings`] implementation.
//! * Every conversion reports into [`diagnostics::Diagnostics`] instead of
//!   failing on the first problem.
//!
pub mod config;
pub mod connection;
pub mod connectors;
pub mod credentials;
pub mod diagnostics;
pub mod enums;
pub mod field;
pub mod one_of;
pub mod parser;
pub mod scalar;
pub mod secret;
pub mod settings;

pub use config::{EndpointConfig, EndpointError};
pub use diagnostics::{AttrPath, Diagnostics};
pub use field::Field;
pub use settings::{EndpointSettings, SelectionPolicy};
