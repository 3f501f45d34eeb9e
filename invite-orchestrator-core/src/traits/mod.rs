//! Collaborator seam abstraction trait definitions

mod folder_gateway;
mod navigator;

pub use folder_gateway::FolderGateway;
pub use navigator::Navigator;
