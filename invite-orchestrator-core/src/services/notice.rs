//! Transient error notification channel

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;

/// How long a notice stays visible after the latest raise.
pub const NOTICE_TTL: Duration = Duration::from_millis(3000);

struct Notice {
    text: String,
    expires_at: Instant,
}

/// Single-slot transient notification channel.
///
/// Holds zero or one active message. Raising while a message is active
/// replaces it and restarts the TTL; there is no queue and no
/// acknowledgment. Expiry is deadline-based: the slot keeps the stale
/// entry until the next read observes the deadline has passed, so no
/// timer task exists that could clear a newer notice early.
#[derive(Clone)]
pub struct NoticeChannel {
    slot: Arc<RwLock<Option<Notice>>>,
}

impl NoticeChannel {
    /// Create an empty channel
    #[must_use]
    pub fn new() -> Self {
        Self {
            slot: Arc::new(RwLock::new(None)),
        }
    }

    /// Raise a notice, replacing any active one and restarting the TTL.
    pub async fn raise(&self, text: impl Into<String>) {
        *self.slot.write().await = Some(Notice {
            text: text.into(),
            expires_at: Instant::now() + NOTICE_TTL,
        });
    }

    /// The currently visible notice text, if its deadline has not passed.
    pub async fn active(&self) -> Option<String> {
        let slot = self.slot.read().await;
        slot.as_ref()
            .filter(|notice| notice.expires_at > Instant::now())
            .map(|notice| notice.text.clone())
    }

    /// Drop the active notice without waiting for the deadline.
    pub async fn clear(&self) {
        *self.slot.write().await = None;
    }
}

impl Default for NoticeChannel {
    fn default() -> Self {
        Self::new()
    }
}
