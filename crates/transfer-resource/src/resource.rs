//!
//! # Endpoint resource
//!
//! Create, read, update and delete flows of one endpoint. Every mutating call
//! submits a request, waits for the server operation and fetches the endpoint
//! again so the returned state reflects what the server resolved.
//!
use anyhow::{Context, Result};
use tracing::{debug, info, instrument, warn};

use transfer_api::endpoint::{DeleteEndpointRequest, Endpoint, GetEndpointRequest};
use transfer_api::service::is_not_found;
use transfer_api::{EndpointClient, Operation};
use transfer_endpoint::{EndpointConfig, EndpointError};

use crate::config::ShellConfig;

pub struct EndpointResource<C> {
    client: C,
    config: ShellConfig,
}

impl<C: EndpointClient> EndpointResource<C> {
    pub fn new(client: C, config: ShellConfig) -> Self {
        Self { client, config }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Create the endpoint described by `plan` and return its state.
    /// An invalid plan fails before any call is made.
    #[instrument(skip_all, fields(name = ?plan.name))]
    pub async fn create(&self, plan: &EndpointConfig) -> Result<EndpointConfig> {
        let plan = self.with_defaults(plan);
        let request = plan.create_request(self.config.selection_policy)?;

        let mut operation = self
            .client
            .create(request)
            .await
            .context("creating endpoint")?;
        operation
            .wait()
            .await
            .context("waiting for endpoint creation")?;
        let id = operation.resource_id().to_owned();
        info!(%id, "endpoint created");

        let endpoint = self.fetch(&id).await?;
        merge(&plan, &endpoint)
    }

    /// Current state of the endpoint, `None` once it is gone on the server
    #[instrument(skip_all, fields(id = ?state.id))]
    pub async fn read(&self, state: &EndpointConfig) -> Result<Option<EndpointConfig>> {
        let id = state.endpoint_id()?;
        match self.fetch(id).await {
            Ok(endpoint) => merge(state, &endpoint).map(Some),
            Err(err) if is_not_found(&err) => {
                warn!(%id, "endpoint no longer exists");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Apply `plan` to the endpoint recorded in `state`
    #[instrument(skip_all, fields(id = ?state.id))]
    pub async fn update(
        &self,
        state: &EndpointConfig,
        plan: &EndpointConfig,
    ) -> Result<EndpointConfig> {
        let id = state.endpoint_id()?;
        let mut plan = self.with_defaults(plan);
        plan.id = state.id.clone();
        let request = plan.update_request(id, self.config.selection_policy)?;

        let mut operation = self
            .client
            .update(request)
            .await
            .context("updating endpoint")?;
        operation
            .wait()
            .await
            .context("waiting for endpoint update")?;
        debug!(%id, "endpoint updated");

        let endpoint = self.fetch(id).await?;
        merge(&plan, &endpoint)
    }

    /// Delete the endpoint, one that no longer exists counts as deleted
    #[instrument(skip_all, fields(id = ?state.id))]
    pub async fn delete(&self, state: &EndpointConfig) -> Result<()> {
        let id = state.endpoint_id()?;
        let request = DeleteEndpointRequest {
            endpoint_id: id.to_owned(),
        };
        let result = match self.client.delete(request).await {
            Ok(mut operation) => operation.wait().await,
            Err(err) => Err(err),
        };
        match result {
            Ok(()) => {
                info!(%id, "endpoint deleted");
                Ok(())
            }
            Err(err) if is_not_found(&err) => {
                warn!(%id, "endpoint already gone");
                Ok(())
            }
            Err(err) => Err(err.context("deleting endpoint")),
        }
    }

    fn with_defaults(&self, plan: &EndpointConfig) -> EndpointConfig {
        plan.clone()
            .with_default_project(self.config.default_project_id.as_deref())
    }

    async fn fetch(&self, id: &str) -> Result<Endpoint> {
        self.client
            .get(GetEndpointRequest {
                endpoint_id: id.to_owned(),
            })
            .await
            .with_context(|| format!("fetching endpoint {id}"))
    }
}

fn merge(prior: &EndpointConfig, endpoint: &Endpoint) -> Result<EndpointConfig> {
    let (state, diags) = prior.merge_response(endpoint);
    let state = diags.into_result(state).map_err(EndpointError::Invalid)?;
    Ok(state)
}
