//! Shell navigation abstract Trait

use async_trait::async_trait;

use crate::types::NavTarget;

/// Shell navigation Trait
///
/// The orchestrator calls this exactly once, after a successful folder
/// deletion, to move the shell's routing surface off the deleted
/// folder. Navigation input is trusted; it has no failure mode.
///
/// Platform implementation:
/// - Desktop/TUI shells: push the target onto their router
/// - Headless embeddings: record or ignore it
#[async_trait]
pub trait Navigator: Send + Sync {
    /// Move the shell to the given target
    async fn navigate(&self, target: NavTarget);
}
