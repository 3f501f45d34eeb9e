//! Business logic service layer

mod folder_view;
mod notice;

pub use folder_view::{FolderView, FolderViewService};
pub use notice::{NoticeChannel, NOTICE_TTL};

use std::sync::Arc;

use crate::traits::{FolderGateway, Navigator};

/// Service context - holds all collaborator seams
///
/// The platform layer creates this context once at startup and injects
/// its gateway and navigation implementations.
pub struct ServiceContext {
    /// Remote folder service
    pub gateway: Arc<dyn FolderGateway>,
    /// Shell routing surface
    pub navigator: Arc<dyn Navigator>,
}

impl ServiceContext {
    /// Create a service context
    #[must_use]
    pub fn new(gateway: Arc<dyn FolderGateway>, navigator: Arc<dyn Navigator>) -> Self {
        Self { gateway, navigator }
    }
}
