//! # Notification Feed
//!
//! Newest first. Entries are appended by login, registration and checkout,
//! and are only ever marked read, never removed.

use chrono::Utc;
use honeyzest_core::{CoreError, Notification, NotificationId};
use tracing::debug;

use super::Store;
use crate::error::StoreResult;

impl Store {
    /// Prepends an unread entry and returns its id.
    pub fn add_notification(&mut self, message: impl Into<String>) -> NotificationId {
        let notification = Notification {
            id: self.ids.notification(),
            message: message.into(),
            created_at: Utc::now(),
            read: false,
        };
        let id = notification.id;
        debug!(notification_id = %id, message = %notification.message, "Notification added");
        self.notifications.insert(0, notification);
        id
    }

    /// Marks one entry read. Marking an entry twice is fine.
    pub fn mark_notification_read(&mut self, id: NotificationId) -> StoreResult<()> {
        let notification = self
            .notifications
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(CoreError::NotificationNotFound(id))?;
        notification.read = true;
        Ok(())
    }

    /// Marks every entry read. Returns how many changed.
    pub fn mark_all_notifications_read(&mut self) -> usize {
        let mut changed = 0;
        for notification in self.notifications.iter_mut().filter(|n| !n.read) {
            notification.read = true;
            changed += 1;
        }
        changed
    }

    pub fn unread_notification_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }
}
