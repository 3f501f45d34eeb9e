//! Invite Orchestrator Core Library
//!
//! Provides the command/state orchestration logic for a folder screen
//! of the inviting panel, including:
//! - Folder snapshot store & loader (Folder View Service)
//! - Command dispatch with reload/patch reconciliation
//! - Modal submission routing
//! - Transient error notification channel
//!
//! This library is designed to be platform-independent, abstracting the
//! backend and routing through traits. Shells (desktop, TUI, headless
//! automation) inject their own `FolderGateway` and `Navigator`.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::ServiceContext;
pub use traits::{FolderGateway, Navigator};
