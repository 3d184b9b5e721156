//! Notification Port Implementation
//!
//! Desktop development stand-in: records notifications in the log instead of
//! displaying them. Permission is granted on request and remembered for the
//! lifetime of the process.

use async_trait::async_trait;
use bridge_traits::{
    error::Result,
    notifications::{NotificationOptions, NotificationPermission, NotificationPort},
};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::info;

pub struct TracingNotifier {
    granted: AtomicBool,
}

impl TracingNotifier {
    pub fn new() -> Self {
        Self {
            granted: AtomicBool::new(false),
        }
    }
}

impl Default for TracingNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationPort for TracingNotifier {
    async fn request_permission(&self) -> Result<NotificationPermission> {
        self.granted.store(true, Ordering::SeqCst);
        Ok(NotificationPermission::Granted)
    }

    fn permission(&self) -> NotificationPermission {
        if self.granted.load(Ordering::SeqCst) {
            NotificationPermission::Granted
        } else {
            NotificationPermission::Default
        }
    }

    async fn show(&self, title: &str, options: NotificationOptions) -> Result<()> {
        info!(title = title, body = ?options.body, "Notification");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_permission_flow() {
        let notifier = TracingNotifier::new();
        assert_eq!(notifier.permission(), NotificationPermission::Default);

        let granted = notifier.request_permission().await.unwrap();
        assert_eq!(granted, NotificationPermission::Granted);
        assert_eq!(notifier.permission(), NotificationPermission::Granted);
    }

    #[tokio::test]
    async fn test_show_succeeds() {
        let notifier = TracingNotifier::new();
        notifier
            .show("New gift", NotificationOptions::default())
            .await
            .unwrap();
    }
}
