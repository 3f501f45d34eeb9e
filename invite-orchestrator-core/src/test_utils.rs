//! Test helper module
//!
//! Provides mock implementations and convenient test factory methods.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::services::{FolderViewService, ServiceContext};
use crate::traits::{FolderGateway, Navigator};
use crate::types::{
    Account, AccountCounters, AccountStatus, ChildFolder, FolderBundle, FolderSnapshot,
    LaunchMode, NavTarget,
};

// ===== MockFolderGateway =====

/// Scripted gateway: serves a configurable bundle, records every call,
/// and fails a single named operation on demand.
pub struct MockFolderGateway {
    bundle: RwLock<FolderBundle>,
    delete_destination: RwLock<String>,
    /// If Some, the named operation returns this error message
    fail_op: RwLock<Option<(String, String)>>,
    calls: RwLock<Vec<String>>,
    fetch_count: RwLock<u32>,
    last_usernames: RwLock<Vec<String>>,
    last_groups: RwLock<Vec<String>>,
}

impl MockFolderGateway {
    pub fn new() -> Self {
        Self {
            bundle: RwLock::new(test_bundle()),
            delete_destination: RwLock::new("/".to_string()),
            fail_op: RwLock::new(None),
            calls: RwLock::new(Vec::new()),
            fetch_count: RwLock::new(0),
            last_usernames: RwLock::new(Vec::new()),
            last_groups: RwLock::new(Vec::new()),
        }
    }

    /// Script the bundle the next fetches return
    pub async fn set_bundle(&self, bundle: FolderBundle) {
        *self.bundle.write().await = bundle;
    }

    /// Script the destination path `delete_folder` returns
    pub async fn set_delete_destination(&self, destination: &str) {
        *self.delete_destination.write().await = destination.to_string();
    }

    /// Make the named operation fail with the given message
    pub async fn fail_on(&self, operation: &str, message: &str) {
        *self.fail_op.write().await = Some((operation.to_string(), message.to_string()));
    }

    /// Let every operation succeed again
    pub async fn clear_failure(&self) {
        *self.fail_op.write().await = None;
    }

    /// Every recorded call, in order
    pub async fn calls(&self) -> Vec<String> {
        self.calls.read().await.clone()
    }

    /// How many times the bundle was fetched
    pub async fn fetch_count(&self) -> u32 {
        *self.fetch_count.read().await
    }

    /// The username list of the last `change_usernames` call
    pub async fn sent_usernames(&self) -> Vec<String> {
        self.last_usernames.read().await.clone()
    }

    /// The group list of the last `change_groups` call
    pub async fn sent_groups(&self) -> Vec<String> {
        self.last_groups.read().await.clone()
    }

    async fn record(&self, call: String) {
        self.calls.write().await.push(call);
    }

    async fn failure_for(&self, operation: &str) -> CoreResult<()> {
        if let Some((op, message)) = &*self.fail_op.read().await {
            if op == operation {
                return Err(CoreError::NetworkError(message.clone()));
            }
        }
        Ok(())
    }
}

impl Default for MockFolderGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FolderGateway for MockFolderGateway {
    async fn fetch_folder(&self, folder_id: &str) -> CoreResult<FolderBundle> {
        self.record(format!("fetch_folder({folder_id})")).await;
        self.failure_for("fetch_folder").await?;
        *self.fetch_count.write().await += 1;
        Ok(self.bundle.read().await.clone())
    }

    async fn create_folder(&self, folder_id: &str, name: &str) -> CoreResult<()> {
        self.record(format!("create_folder({folder_id}, {name})"))
            .await;
        self.failure_for("create_folder").await
    }

    async fn rename_folder(&self, folder_id: &str, name: &str) -> CoreResult<()> {
        self.record(format!("rename_folder({folder_id}, {name})"))
            .await;
        self.failure_for("rename_folder").await
    }

    async fn change_chat(&self, folder_id: &str, chat: &str) -> CoreResult<()> {
        self.record(format!("change_chat({folder_id}, {chat})"))
            .await;
        self.failure_for("change_chat").await
    }

    async fn change_message(&self, folder_id: &str, message: &str) -> CoreResult<()> {
        self.record(format!("change_message({folder_id}, {message})"))
            .await;
        self.failure_for("change_message").await
    }

    async fn change_usernames(&self, folder_id: &str, usernames: &[String]) -> CoreResult<()> {
        self.record(format!("change_usernames({folder_id})")).await;
        self.failure_for("change_usernames").await?;
        *self.last_usernames.write().await = usernames.to_vec();
        Ok(())
    }

    async fn change_groups(&self, folder_id: &str, groups: &[String]) -> CoreResult<()> {
        self.record(format!("change_groups({folder_id})")).await;
        self.failure_for("change_groups").await?;
        *self.last_groups.write().await = groups.to_vec();
        Ok(())
    }

    async fn move_folder(&self, folder_id: &str, dest_path: &str) -> CoreResult<()> {
        self.record(format!("move_folder({folder_id}, {dest_path})"))
            .await;
        self.failure_for("move_folder").await
    }

    async fn delete_folder(&self, folder_id: &str) -> CoreResult<String> {
        self.record(format!("delete_folder({folder_id})")).await;
        self.failure_for("delete_folder").await?;
        Ok(self.delete_destination.read().await.clone())
    }

    async fn create_account(&self, folder_id: &str, name: &str, phone: &str) -> CoreResult<()> {
        self.record(format!("create_account({folder_id}, {name}, {phone})"))
            .await;
        self.failure_for("create_account").await
    }

    async fn delete_account(&self, folder_id: &str, account_id: &str) -> CoreResult<()> {
        self.record(format!("delete_account({folder_id}, {account_id})"))
            .await;
        self.failure_for("delete_account").await
    }

    async fn generate_intervals(&self, folder_id: &str) -> CoreResult<()> {
        self.record(format!("generate_intervals({folder_id})")).await;
        self.failure_for("generate_intervals").await
    }

    async fn launch(&self, folder_id: &str, mode: LaunchMode) -> CoreResult<()> {
        self.record(format!("launch({folder_id}, {mode})")).await;
        self.failure_for("launch").await
    }
}

// ===== MockNavigator =====

/// Records every navigation target the orchestrator asks for.
pub struct MockNavigator {
    targets: RwLock<Vec<NavTarget>>,
}

impl MockNavigator {
    pub fn new() -> Self {
        Self {
            targets: RwLock::new(Vec::new()),
        }
    }

    pub async fn targets(&self) -> Vec<NavTarget> {
        self.targets.read().await.clone()
    }
}

impl Default for MockNavigator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Navigator for MockNavigator {
    async fn navigate(&self, target: NavTarget) {
        self.targets.write().await.push(target);
    }
}

// ===== Factory methods =====

/// A canonical folder bundle: one subfolder, two clean accounts,
/// unconfigured settings.
pub fn test_bundle() -> FolderBundle {
    FolderBundle {
        folder: FolderSnapshot {
            id: "f1".to_string(),
            name: "Campaign".to_string(),
            name_path: "/Campaign".to_string(),
            chat: None,
            message: None,
            usernames: Vec::new(),
            groups: Vec::new(),
        },
        folders: Some(vec![ChildFolder {
            id: "f2".to_string(),
            name: "Warm-up".to_string(),
        }]),
        accounts: Some(vec![
            Account {
                id: "a1".to_string(),
                name: "Main".to_string(),
                phone: "+79160000001".to_string(),
                status: AccountStatus::Clean,
            },
            Account {
                id: "a7".to_string(),
                name: "Backup".to_string(),
                phone: "+79160000007".to_string(),
                status: AccountStatus::Clean,
            },
        ]),
        count_accounts: AccountCounters {
            all: 2,
            clean: 2,
            block: 0,
        },
        folders_move: BTreeMap::from([("/".to_string(), "/".to_string())]),
        folders_hash: serde_json::json!({ "Campaign": "f1" }),
    }
}

/// Create a `FolderViewService` wired to fresh mocks
pub fn create_test_folder_view() -> (
    FolderViewService,
    Arc<MockFolderGateway>,
    Arc<MockNavigator>,
) {
    let gateway = Arc::new(MockFolderGateway::new());
    let navigator = Arc::new(MockNavigator::new());
    let ctx = Arc::new(ServiceContext::new(gateway.clone(), navigator.clone()));
    (FolderViewService::new(ctx), gateway, navigator)
}
