//! Type definition module

mod account;
mod folder;
mod modal;

pub use account::{Account, AccountCounters, AccountStatus};
pub use folder::{
    ChildFolder, FolderBundle, FolderSnapshot, LaunchMode, MoveTargetIndex, NavTarget,
    PathHashIndex,
};
pub use modal::{ModalIntent, MoveSelection};
