//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It is
//! read-only after startup: the parsed config plus one pooled HTTP client for
//! talking to the school backend.

use std::sync::Arc;

use crate::config::{ConfigError, PortalConfig};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<PortalConfig>,
    pub http: reqwest::Client,
}

impl AppState {
    /// Build state, creating the upstream client with the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientBuild`] if the TLS backend cannot initialize.
    pub fn new(config: PortalConfig) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .timeout(config.proxy_timeout)
            .build()
            .map_err(|e| ConfigError::HttpClientBuild(e.to_string()))?;
        Ok(Self { config: Arc::new(config), http })
    }
}
