//! Remote folder service abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{FolderBundle, LaunchMode};

/// Remote folder service Trait
///
/// Every operation the orchestrator performs against the backend,
/// addressed by folder id. The backend treats account operations as
/// folder-scoped too, so they live on the same gateway.
///
/// Platform implementation:
/// - `HttpFolderGateway` (app crate): the panel backend's REST API
/// - `MockFolderGateway` (tests): scripted bundles and failures
#[async_trait]
pub trait FolderGateway: Send + Sync {
    /// Fetch the full folder bundle
    ///
    /// # Arguments
    /// * `folder_id` - Folder ID
    async fn fetch_folder(&self, folder_id: &str) -> CoreResult<FolderBundle>;

    /// Create a child folder
    ///
    /// # Arguments
    /// * `folder_id` - Parent folder ID
    /// * `name` - New folder name
    async fn create_folder(&self, folder_id: &str, name: &str) -> CoreResult<()>;

    /// Rename the folder
    async fn rename_folder(&self, folder_id: &str, name: &str) -> CoreResult<()>;

    /// Set the target chat
    async fn change_chat(&self, folder_id: &str, chat: &str) -> CoreResult<()>;

    /// Set the message template
    async fn change_message(&self, folder_id: &str, message: &str) -> CoreResult<()>;

    /// Replace the username list
    ///
    /// # Arguments
    /// * `folder_id` - Folder ID
    /// * `usernames` - Already de-duplicated username list
    async fn change_usernames(&self, folder_id: &str, usernames: &[String]) -> CoreResult<()>;

    /// Replace the group list
    ///
    /// # Arguments
    /// * `folder_id` - Folder ID
    /// * `groups` - Already de-duplicated group list
    async fn change_groups(&self, folder_id: &str, groups: &[String]) -> CoreResult<()>;

    /// Move the folder to another parent
    ///
    /// # Arguments
    /// * `folder_id` - Folder ID
    /// * `dest_path` - Destination path from the move target index
    async fn move_folder(&self, folder_id: &str, dest_path: &str) -> CoreResult<()>;

    /// Delete the folder
    ///
    /// # Returns
    /// The backend-chosen destination path for the shell to navigate
    /// to: `"/"` when the deleted folder was top-level, otherwise the
    /// parent folder's id.
    async fn delete_folder(&self, folder_id: &str) -> CoreResult<String>;

    /// Create an account in the folder
    ///
    /// # Arguments
    /// * `folder_id` - Folder ID
    /// * `name` - Display name
    /// * `phone` - Phone number
    async fn create_account(&self, folder_id: &str, name: &str, phone: &str) -> CoreResult<()>;

    /// Delete an account from the folder
    ///
    /// # Arguments
    /// * `folder_id` - Folder ID
    /// * `account_id` - Account ID
    async fn delete_account(&self, folder_id: &str, account_id: &str) -> CoreResult<()>;

    /// Regenerate the per-account action intervals
    async fn generate_intervals(&self, folder_id: &str) -> CoreResult<()>;

    /// Launch the campaign in the given mode
    async fn launch(&self, folder_id: &str, mode: LaunchMode) -> CoreResult<()>;
}
