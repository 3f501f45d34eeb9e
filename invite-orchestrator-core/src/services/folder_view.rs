//! Folder screen orchestrator
//!
//! Owns the snapshot of the currently displayed folder, dispatches the
//! mutating commands against the remote gateway, and reconciles local
//! state with each outcome: membership-changing commands re-fetch the
//! whole bundle, scalar-setting commands patch the one field they
//! changed, folder deletion navigates away.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;

use crate::error::CoreError;
use crate::services::{NoticeChannel, ServiceContext};
use crate::types::{
    Account, AccountCounters, ChildFolder, FolderSnapshot, LaunchMode, ModalIntent,
    MoveSelection, MoveTargetIndex, NavTarget, PathHashIndex,
};
use crate::utils::text::dedup_lines;

/// Immutable read model of the folder screen.
///
/// A cloned copy of the store's state; shells render it and throw it
/// away. `folder` is `None` until the first successful load.
#[derive(Debug, Clone, Serialize)]
pub struct FolderView {
    /// The folder's own record
    pub folder: Option<FolderSnapshot>,
    /// Immediate subfolders
    pub folders: Vec<ChildFolder>,
    /// Accounts assigned to the folder
    pub accounts: Vec<Account>,
    /// Account tallies
    #[serde(rename = "countAccounts")]
    pub count_accounts: AccountCounters,
    /// Candidate move destinations
    #[serde(rename = "foldersMove")]
    pub folders_move: MoveTargetIndex,
    /// Ancestry routing index
    #[serde(rename = "foldersHash")]
    pub folders_hash: PathHashIndex,
    /// Whether a load is in flight
    pub loading: bool,
}

/// Store state: the six bundle pieces plus the loaded id and phase.
#[derive(Default)]
struct FolderViewState {
    folder_id: Option<String>,
    folder: Option<FolderSnapshot>,
    folders: Vec<ChildFolder>,
    accounts: Vec<Account>,
    count_accounts: AccountCounters,
    folders_move: MoveTargetIndex,
    folders_hash: PathHashIndex,
    loading: bool,
}

/// Folder screen orchestration service
pub struct FolderViewService {
    ctx: Arc<ServiceContext>,
    state: RwLock<FolderViewState>,
    notices: NoticeChannel,
}

impl FolderViewService {
    /// Create a folder view service instance
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self {
            ctx,
            state: RwLock::new(FolderViewState::default()),
            notices: NoticeChannel::new(),
        }
    }

    // ===== Snapshot store & loader =====

    /// Load the folder's full bundle, replacing all screen state.
    ///
    /// Call this once whenever the active folder id changes; the
    /// dispatcher re-invokes it after every membership-changing
    /// command. The six bundle pieces are swapped in under a single
    /// write, so readers never observe a folder/accounts mismatch.
    /// On failure the previously loaded data stays untouched.
    pub async fn load_folder(&self, folder_id: &str) {
        {
            let mut state = self.state.write().await;
            state.folder_id = Some(folder_id.to_string());
            state.loading = true;
        }

        match self.ctx.gateway.fetch_folder(folder_id).await {
            Ok(bundle) => {
                let mut state = self.state.write().await;
                state.folder = Some(bundle.folder);
                state.folders = bundle.folders.unwrap_or_default();
                state.accounts = bundle.accounts.unwrap_or_default();
                state.count_accounts = bundle.count_accounts;
                state.folders_move = bundle.folders_move;
                state.folders_hash = bundle.folders_hash;
                state.loading = false;
            }
            Err(e) => {
                self.state.write().await.loading = false;
                self.command_failed("Failed to fetch folder data", &e).await;
            }
        }
    }

    /// Cloned read model for the shell to render
    pub async fn view(&self) -> FolderView {
        let state = self.state.read().await;
        FolderView {
            folder: state.folder.clone(),
            folders: state.folders.clone(),
            accounts: state.accounts.clone(),
            count_accounts: state.count_accounts.clone(),
            folders_move: state.folders_move.clone(),
            folders_hash: state.folders_hash.clone(),
            loading: state.loading,
        }
    }

    /// The active transient error message, if any
    pub async fn notice(&self) -> Option<String> {
        self.notices.active().await
    }

    // ===== Commands: full reload on success =====

    /// Create a child folder inside the current one
    pub async fn create_folder(&self, name: &str) {
        let Some(folder_id) = self.loaded_folder_id("create_folder").await else {
            return;
        };
        match self.ctx.gateway.create_folder(&folder_id, name).await {
            Ok(()) => self.load_folder(&folder_id).await,
            Err(e) => self.command_failed("Failed to create folder", &e).await,
        }
    }

    /// Rename the current folder
    pub async fn rename_folder(&self, name: &str) {
        let Some(folder_id) = self.loaded_folder_id("rename_folder").await else {
            return;
        };
        match self.ctx.gateway.rename_folder(&folder_id, name).await {
            Ok(()) => self.load_folder(&folder_id).await,
            Err(e) => self.command_failed("Failed to rename folder", &e).await,
        }
    }

    /// Move the current folder to another parent.
    ///
    /// An empty destination path is the move dialog's way of saying
    /// "cancelled": no remote call, no state change.
    pub async fn move_folder(&self, dest_path: &str) {
        if dest_path.is_empty() {
            return;
        }
        let Some(folder_id) = self.loaded_folder_id("move_folder").await else {
            return;
        };
        match self.ctx.gateway.move_folder(&folder_id, dest_path).await {
            Ok(()) => self.load_folder(&folder_id).await,
            Err(e) => self.command_failed("Failed to move folder", &e).await,
        }
    }

    /// Create an account in the current folder
    pub async fn create_account(&self, name: &str, phone: &str) {
        let Some(folder_id) = self.loaded_folder_id("create_account").await else {
            return;
        };
        match self
            .ctx
            .gateway
            .create_account(&folder_id, name, phone)
            .await
        {
            Ok(()) => self.load_folder(&folder_id).await,
            Err(e) => self.command_failed("Failed to create account", &e).await,
        }
    }

    /// Delete an account from the current folder.
    ///
    /// No optimistic removal: the entry disappears when the reload
    /// brings back the server's post-deletion list.
    pub async fn delete_account(&self, account_id: &str) {
        let Some(folder_id) = self.loaded_folder_id("delete_account").await else {
            return;
        };
        match self
            .ctx
            .gateway
            .delete_account(&folder_id, account_id)
            .await
        {
            Ok(()) => self.load_folder(&folder_id).await,
            Err(e) => self.command_failed("Failed to delete account", &e).await,
        }
    }

    /// Regenerate the per-account action intervals
    pub async fn generate_intervals(&self) {
        let Some(folder_id) = self.loaded_folder_id("generate_intervals").await else {
            return;
        };
        match self.ctx.gateway.generate_intervals(&folder_id).await {
            Ok(()) => self.load_folder(&folder_id).await,
            Err(e) => {
                self.command_failed("Failed to generate intervals", &e)
                    .await;
            }
        }
    }

    // ===== Commands: optimistic patch on success =====
    //
    // Scalar settings have no cross-entity consistency at stake, so the
    // snapshot reflects them immediately instead of paying for a
    // round-trip. Membership never takes this path.

    /// Set the target chat
    pub async fn change_chat(&self, chat: &str) {
        let Some(folder_id) = self.loaded_folder_id("change_chat").await else {
            return;
        };
        match self.ctx.gateway.change_chat(&folder_id, chat).await {
            Ok(()) => {
                let chat = chat.to_string();
                self.patch_snapshot(|folder| FolderSnapshot {
                    chat: Some(chat),
                    ..folder
                })
                .await;
            }
            Err(e) => self.command_failed("Failed to change chat", &e).await,
        }
    }

    /// Set the message template
    pub async fn change_message(&self, message: &str) {
        let Some(folder_id) = self.loaded_folder_id("change_message").await else {
            return;
        };
        match self.ctx.gateway.change_message(&folder_id, message).await {
            Ok(()) => {
                let message = message.to_string();
                self.patch_snapshot(|folder| FolderSnapshot {
                    message: Some(message),
                    ..folder
                })
                .await;
            }
            Err(e) => self.command_failed("Failed to change message", &e).await,
        }
    }

    /// Replace the username list from raw multi-line input.
    ///
    /// The input is de-duplicated (first occurrence wins) before the
    /// remote call, and the same list lands in the local snapshot, so
    /// duplicates are never persisted or displayed.
    pub async fn change_usernames(&self, input: &str) {
        let Some(folder_id) = self.loaded_folder_id("change_usernames").await else {
            return;
        };
        let usernames = dedup_lines(input);
        match self
            .ctx
            .gateway
            .change_usernames(&folder_id, &usernames)
            .await
        {
            Ok(()) => {
                self.patch_snapshot(|folder| FolderSnapshot {
                    usernames,
                    ..folder
                })
                .await;
            }
            Err(e) => self.command_failed("Failed to add usernames", &e).await,
        }
    }

    /// Replace the group list from raw multi-line input
    pub async fn change_groups(&self, input: &str) {
        let Some(folder_id) = self.loaded_folder_id("change_groups").await else {
            return;
        };
        let groups = dedup_lines(input);
        match self.ctx.gateway.change_groups(&folder_id, &groups).await {
            Ok(()) => {
                self.patch_snapshot(|folder| FolderSnapshot { groups, ..folder })
                    .await;
            }
            Err(e) => self.command_failed("Failed to add groups", &e).await,
        }
    }

    // ===== Commands: navigation & launch =====

    /// Delete the current folder and navigate to where the backend
    /// points: `"/"` means the top-level listing, anything else is the
    /// parent folder's id.
    ///
    /// Local state is not touched either way; on success the screen is
    /// abandoned, and no reconciliation against the deleted folder id
    /// happens afterwards.
    pub async fn delete_folder(&self) {
        let Some(folder_id) = self.loaded_folder_id("delete_folder").await else {
            return;
        };
        match self.ctx.gateway.delete_folder(&folder_id).await {
            Ok(destination) => {
                log::info!("Folder {folder_id} deleted, navigating to {destination}");
                self.ctx
                    .navigator
                    .navigate(NavTarget::from_path(&destination))
                    .await;
            }
            Err(e) => self.command_failed("Failed to delete folder", &e).await,
        }
    }

    /// Launch the campaign in the given mode.
    ///
    /// No reload here: the launch dialog stays open until the operator
    /// confirms it, and `confirm_launch` fetches the fresh counters.
    pub async fn launch(&self, mode: LaunchMode) {
        let Some(folder_id) = self.loaded_folder_id("launch").await else {
            return;
        };
        match self.ctx.gateway.launch(&folder_id, mode).await {
            Ok(()) => log::info!("Campaign launched on folder {folder_id}: {mode}"),
            Err(e) => {
                self.command_failed(&format!("Failed to launch {mode}"), &e)
                    .await;
            }
        }
    }

    // ===== Modal router =====

    /// Route one submission from the shared modal input form to its
    /// command. Matching is exhaustive over the closed intent set;
    /// closing the form is the shell's concern.
    pub async fn submit_modal(&self, intent: ModalIntent) {
        match intent {
            ModalIntent::CreateFolder { name } => self.create_folder(&name).await,
            ModalIntent::RenameFolder { name } => self.rename_folder(&name).await,
            ModalIntent::ChangeChat { chat } => self.change_chat(&chat).await,
            ModalIntent::ChangeMessage { message } => self.change_message(&message).await,
            ModalIntent::ChangeUsernames { input } => self.change_usernames(&input).await,
            ModalIntent::ChangeGroups { input } => self.change_groups(&input).await,
            ModalIntent::CreateAccount { name, phone } => {
                self.create_account(&name, &phone).await;
            }
        }
    }

    /// Route the move dialog's submission. The empty-path cancellation
    /// lives in `move_folder` so both entry points honor it.
    pub async fn submit_move(&self, selection: MoveSelection) {
        self.move_folder(&selection.path).await;
    }

    /// The launch dialog completed: re-fetch the bundle, since account
    /// statuses and counters changed server-side.
    pub async fn confirm_launch(&self) {
        let Some(folder_id) = self.loaded_folder_id("confirm_launch").await else {
            return;
        };
        self.load_folder(&folder_id).await;
    }

    // ===== Internal =====

    /// The loaded folder id, or a warn-level no-op marker.
    ///
    /// Commands require a previous `load_folder`; a shell cannot
    /// meaningfully issue folder commands before entering a folder.
    async fn loaded_folder_id(&self, command: &str) -> Option<String> {
        let folder_id = self.state.read().await.folder_id.clone();
        if folder_id.is_none() {
            log::warn!("Ignoring {command}: no folder loaded");
        }
        folder_id
    }

    /// Replace the snapshot with a copy that has one field changed.
    /// Skipped silently when nothing is loaded yet.
    async fn patch_snapshot(&self, patch: impl FnOnce(FolderSnapshot) -> FolderSnapshot) {
        let mut state = self.state.write().await;
        state.folder = state.folder.take().map(patch);
    }

    /// Uniform failure path: one notice, log level per `is_expected()`,
    /// no other state change.
    async fn command_failed(&self, notice: &str, err: &CoreError) {
        if err.is_expected() {
            log::warn!("{notice}: {err}");
        } else {
            log::error!("{notice}: {err}");
        }
        self.notices.raise(notice).await;
    }
}
