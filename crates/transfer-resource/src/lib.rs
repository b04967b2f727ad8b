//!
//! # Transfer resource
//!
//! Orchestration of transfer endpoints over an [`transfer_api::EndpointClient`]:
//! requests are built from the flat configuration, server operations are
//! awaited and the re-fetched endpoint is merged into the persisted state.
//!
pub mod config;
pub mod resource;
pub mod state;

pub use config::ShellConfig;
pub use resource::EndpointResource;
pub use state::StateFile;
