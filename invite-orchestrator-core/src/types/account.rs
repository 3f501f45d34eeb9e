//! Account-related type definitions

use serde::{Deserialize, Serialize};

/// Account block status as the backend reports it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    /// Usable account
    #[default]
    Clean,
    /// Blocked by Telegram
    Block,
    /// Any wire value this client does not know
    #[serde(other)]
    Unknown,
}

/// A Telegram account assigned to the current folder.
///
/// The list is replaced wholesale on every reload; entries are never
/// patched individually.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Account ID
    pub id: String,
    /// Display name
    pub name: String,
    /// Phone number the session belongs to
    pub phone: String,
    /// Block status
    #[serde(default)]
    pub status: AccountStatus,
}

/// Account tallies for the current folder.
///
/// Always trusted from the last fetch, never recomputed locally.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountCounters {
    /// Total accounts
    #[serde(default)]
    pub all: u32,
    /// Usable accounts
    #[serde(default)]
    pub clean: u32,
    /// Blocked accounts
    #[serde(default)]
    pub block: u32,
}
