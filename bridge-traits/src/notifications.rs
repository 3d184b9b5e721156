//! Host Notification Abstraction
//!
//! Wraps the host's notification permission system: request permission, query
//! the current permission state, and display a titled notification with
//! icon/badge options. The client core does not decide when to notify; the UI
//! shell drives this port.

use serde::{Deserialize, Serialize};

use crate::{error::Result, platform::PlatformSendSync};

/// Host notification permission state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationPermission {
    /// Permission granted; notifications can be shown.
    Granted,
    /// Permission explicitly denied by the user.
    Denied,
    /// Permission not yet requested.
    Default,
}

impl NotificationPermission {
    pub fn is_granted(self) -> bool {
        matches!(self, NotificationPermission::Granted)
    }
}

/// Display options for a notification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationOptions {
    pub body: Option<String>,
    pub icon: Option<String>,
    pub badge: Option<String>,
}

/// Notification port trait
///
/// # Platform Support
///
/// - **Web**: Notification API
/// - **Desktop**: system notification daemons, or a logging no-op during
///   development
/// - **Mobile**: UNUserNotificationCenter / NotificationManager
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait NotificationPort: PlatformSendSync {
    /// Ask the user for notification permission.
    async fn request_permission(&self) -> Result<NotificationPermission>;

    /// Current permission state without prompting.
    fn permission(&self) -> NotificationPermission;

    /// Display a titled notification.
    async fn show(&self, title: &str, options: NotificationOptions) -> Result<()>;
}
