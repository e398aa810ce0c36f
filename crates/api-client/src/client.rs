//! Main API client implementation

use crate::config::ClientConfig;
use crate::endpoints::{FoodApi, RestaurantsApi};
use crate::error::ApiResult;
use crate::fetcher::ResourceFetcher;
use crate::resource::Resource;
use crate::transport::{ReqwestTransport, Transport};
use std::sync::Arc;
use tracing::debug;

/// Foodhub API client
///
/// Owns the transport and configuration and hands out one service per
/// resource family. Cloning is cheap; clones share the same connection pool.
pub struct FoodhubClient<T: ?Sized = ReqwestTransport> {
    transport: Arc<T>,
    config: Arc<ClientConfig>,
}

impl<T: ?Sized> Clone for FoodhubClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            config: Arc::clone(&self.config),
        }
    }
}

impl FoodhubClient<ReqwestTransport> {
    /// Create a new client with default configuration from environment
    pub fn new() -> ApiResult<Self> {
        let config = ClientConfig::from_env()?;
        Self::with_config(config)
    }

    /// Create a new client with specific configuration
    pub fn with_config(config: ClientConfig) -> ApiResult<Self> {
        config.validate()?;
        let transport = ReqwestTransport::new(&config)?;

        debug!(
            base_url = %config.base_url,
            environment = ?config.environment,
            timeout_secs = config.timeout.as_secs(),
            "Client configured"
        );

        Ok(Self {
            transport: Arc::new(transport),
            config: Arc::new(config),
        })
    }
}

impl<T: Transport + ?Sized> FoodhubClient<T> {
    /// Create a client over a caller-supplied transport
    pub fn with_transport(config: ClientConfig, transport: Arc<T>) -> ApiResult<Self> {
        config.validate()?;
        Ok(Self {
            transport,
            config: Arc::new(config),
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    // -------------------------------------------------------------------------
    // Service accessors
    // -------------------------------------------------------------------------

    /// Fetcher for any known resource family
    #[must_use]
    pub fn resource(&self, resource: Resource) -> ResourceFetcher<T> {
        ResourceFetcher::new(
            Arc::clone(&self.transport),
            self.config.base_url.clone(),
            self.config.paths.path_for(resource),
            resource.label(),
        )
    }

    /// Access food endpoints
    #[must_use]
    pub fn food(&self) -> FoodApi<T> {
        FoodApi::new(self.resource(Resource::Food))
    }

    /// Access restaurant endpoints
    #[must_use]
    pub fn restaurants(&self) -> RestaurantsApi<T> {
        RestaurantsApi::new(self.resource(Resource::Restaurant))
    }
}
