//! Modal form submission types

use serde::{Deserialize, Serialize};

/// One submission from the shared modal input form.
///
/// A closed, mode-tagged union: every variant routes to exactly one
/// dispatcher command, and the router matches it exhaustively. A wire
/// payload carrying an unknown `mode` fails at deserialization rather
/// than being dropped silently at dispatch.
///
/// Consumed exactly once; the shell closes the form after submitting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum ModalIntent {
    /// Create a child folder inside the current one
    CreateFolder {
        /// New folder name
        #[serde(rename = "text")]
        name: String,
    },
    /// Rename the current folder
    RenameFolder {
        /// New folder name
        #[serde(rename = "text")]
        name: String,
    },
    /// Set the target chat
    ChangeChat {
        /// Chat link
        #[serde(rename = "text")]
        chat: String,
    },
    /// Set the message template
    ChangeMessage {
        /// Message text
        #[serde(rename = "text")]
        message: String,
    },
    /// Replace the username list
    ChangeUsernames {
        /// Raw multi-line input, one username per line
        #[serde(rename = "text")]
        input: String,
    },
    /// Replace the group list
    ChangeGroups {
        /// Raw multi-line input, one group per line
        #[serde(rename = "text")]
        input: String,
    },
    /// Create an account in the current folder
    CreateAccount {
        /// Display name
        name: String,
        /// Phone number
        phone: String,
    },
}

/// The move dialog's submission.
///
/// Separate from `ModalIntent` because it comes from a selection
/// widget, not the shared input form. An empty `path` means the
/// operator dismissed the dialog without choosing a destination.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MoveSelection {
    /// Destination path from the move target index
    pub path: String,
}
