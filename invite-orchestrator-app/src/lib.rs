//! Platform-agnostic application bootstrap for Invite Orchestrator.
//!
//! Provides `AppState` (service container) and `AppStateBuilder`
//! (adapter injection). Shells construct this once at startup,
//! supplying their own `FolderGateway` and `Navigator`; the default
//! `http-gateway` feature ships `HttpFolderGateway` for the panel
//! backend's REST API.

pub mod adapters;

use std::sync::Arc;

use invite_orchestrator_core::error::{CoreError, CoreResult};
use invite_orchestrator_core::services::{FolderViewService, ServiceContext};
use invite_orchestrator_core::traits::{FolderGateway, Navigator};

/// Platform-agnostic application state.
///
/// Holds the `ServiceContext` and the folder view service. Every
/// frontend constructs this once at startup via `AppStateBuilder`.
pub struct AppState {
    /// Service context (holds the gateway and navigator adapters)
    pub ctx: Arc<ServiceContext>,
    /// Folder screen orchestrator
    pub folder_view: Arc<FolderViewService>,
}

/// Builder for constructing `AppState` with platform-specific adapters.
///
/// # Required adapters
/// - `folder_gateway`: how the backend is reached
/// - `navigator`: how the shell moves between screens
pub struct AppStateBuilder {
    folder_gateway: Option<Arc<dyn FolderGateway>>,
    navigator: Option<Arc<dyn Navigator>>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            folder_gateway: None,
            navigator: None,
        }
    }

    #[must_use]
    pub fn folder_gateway(mut self, gateway: Arc<dyn FolderGateway>) -> Self {
        self.folder_gateway = Some(gateway);
        self
    }

    #[must_use]
    pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    /// Build the `AppState`.
    ///
    /// # Errors
    /// Returns `CoreError::ValidationError` if required adapters are missing.
    pub fn build(self) -> CoreResult<AppState> {
        let folder_gateway = self.folder_gateway.ok_or_else(|| {
            CoreError::ValidationError("folder_gateway is required".to_string())
        })?;
        let navigator = self
            .navigator
            .ok_or_else(|| CoreError::ValidationError("navigator is required".to_string()))?;

        let ctx = Arc::new(ServiceContext::new(folder_gateway, navigator));
        let folder_view = Arc::new(FolderViewService::new(Arc::clone(&ctx)));

        Ok(AppState { ctx, folder_view })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
