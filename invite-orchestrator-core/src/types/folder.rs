//! Folder-related type definitions

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{Account, AccountCounters};

/// The currently examined folder's own record.
///
/// Replaced wholesale on every reload. Setting commands patch a single
/// field by producing a new value, never by mutating a shared one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderSnapshot {
    /// Folder ID
    pub id: String,
    /// Folder name
    pub name: String,
    /// Human-readable ancestry path shown in the move dialog
    #[serde(rename = "namePath", default)]
    pub name_path: String,
    /// Target chat link (None until configured)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat: Option<String>,
    /// Message template (None until configured)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Target usernames, one entry per input line
    #[serde(default)]
    pub usernames: Vec<String>,
    /// Source groups, one entry per input line
    #[serde(default)]
    pub groups: Vec<String>,
}

/// Immediate subfolder listing entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChildFolder {
    /// Folder ID
    pub id: String,
    /// Folder name
    pub name: String,
}

/// Candidate move destinations: display label -> opaque destination path.
///
/// Contains the root entry (path `"/"`) whenever the backend returns a
/// non-empty index. Read-only for the orchestrator.
pub type MoveTargetIndex = BTreeMap<String, String>;

/// Name -> id routing index associated with the folder.
///
/// Opaque to the orchestrator; passed through to shells untouched.
pub type PathHashIndex = serde_json::Value;

/// Everything the backend returns for one folder screen.
///
/// `folders` and `accounts` may arrive as JSON `null` or be omitted
/// entirely; both deserialize to `None` and are normalized to empty
/// lists by the loader.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderBundle {
    /// The folder's own record
    pub folder: FolderSnapshot,
    /// Immediate subfolders
    #[serde(default)]
    pub folders: Option<Vec<ChildFolder>>,
    /// Accounts assigned to the folder
    #[serde(default)]
    pub accounts: Option<Vec<Account>>,
    /// Account tallies
    #[serde(rename = "countAccounts", default)]
    pub count_accounts: AccountCounters,
    /// Candidate move destinations
    #[serde(rename = "foldersMove", default)]
    pub folders_move: MoveTargetIndex,
    /// Ancestry routing index
    #[serde(rename = "foldersHash", default)]
    pub folders_hash: PathHashIndex,
}

/// Campaign launch mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LaunchMode {
    /// Invite the username list into the target chat
    Inviting,
    /// Send the message template to the username list
    MailingUsernames,
    /// Send the message template into the group list
    MailingGroups,
}

impl LaunchMode {
    /// Wire name of the mode, as the backend's launch endpoints expect it.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inviting => "inviting",
            Self::MailingUsernames => "mailing-usernames",
            Self::MailingGroups => "mailing-groups",
        }
    }
}

impl fmt::Display for LaunchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the shell should route after a successful folder deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    /// The top-level folder listing
    Overview,
    /// A specific folder screen
    Folder(String),
}

impl NavTarget {
    /// Decodes the destination path returned by `delete_folder`.
    ///
    /// Only the literal `"/"` means the overview; every other value,
    /// including the empty string, is taken as a folder id.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        if path == "/" {
            Self::Overview
        } else {
            Self::Folder(path.to_string())
        }
    }
}
