//!
//! # Endpoint service contract
//!
//! The remote control plane is reached through [`EndpointClient`]. Mutating
//! calls return an [`Operation`] that completes asynchronously on the server.
//! Transport, retries and authentication belong to the implementation.
//!
use anyhow::Result;
use async_trait::async_trait;

use crate::endpoint::{
    CreateEndpointRequest, DeleteEndpointRequest, Endpoint, GetEndpointRequest,
    UpdateEndpointRequest,
};

/// Error from api call
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("No resource found: {0}")]
    NotFound(String),
    #[error("Operation {id} failed: {message}")]
    OperationFailed { id: String, message: String },
}

/// Long running server side operation
#[async_trait]
pub trait Operation: Send {
    /// id of the resource the operation acts upon
    fn resource_id(&self) -> &str;

    /// block until the operation reports completion or failure
    async fn wait(&mut self) -> Result<()>;
}

#[async_trait]
pub trait EndpointClient: Send + Sync {
    type Operation: Operation;

    async fn create(&self, request: CreateEndpointRequest) -> Result<Self::Operation>;

    async fn get(&self, request: GetEndpointRequest) -> Result<Endpoint>;

    async fn update(&self, request: UpdateEndpointRequest) -> Result<Self::Operation>;

    async fn delete(&self, request: DeleteEndpointRequest) -> Result<Self::Operation>;
}

/// true when the error chain carries [`ApiError::NotFound`]
pub fn is_not_found(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        matches!(
            cause.downcast_ref::<ApiError>(),
            Some(ApiError::NotFound(_))
        )
    })
}
