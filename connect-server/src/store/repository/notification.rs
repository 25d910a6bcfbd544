//! Notification Repository

use chrono::Utc;
use shared::models::{Notification, NotificationCreate};

use crate::store::MemStore;

#[derive(Clone)]
pub struct NotificationRepository {
    store: MemStore,
}

impl NotificationRepository {
    pub fn new(store: MemStore) -> Self {
        Self { store }
    }

    /// Notifications of one user, newest first
    pub fn find_by_user(&self, user_id: i64) -> Vec<Notification> {
        let mut notifications: Vec<Notification> = self
            .store
            .inner
            .notifications
            .iter()
            .filter(|n| n.user_id == user_id)
            .map(|n| n.clone())
            .collect();
        notifications.sort_by_key(|n| std::cmp::Reverse(n.id));
        notifications
    }

    /// Create a notification
    pub fn create(&self, data: NotificationCreate) -> Notification {
        let inner = &self.store.inner;
        let notification = Notification {
            id: inner.ids.notification.next(),
            user_id: data.user_id,
            title: data.title,
            message: data.message,
            kind: data.kind,
            is_read: false,
            created_at: Utc::now(),
        };
        inner
            .notifications
            .insert(notification.id, notification.clone());
        notification
    }

    /// Mark one notification as read; `None` when the id is absent
    pub fn mark_read(&self, id: i64) -> Option<Notification> {
        let mut entry = self.store.inner.notifications.get_mut(&id)?;
        entry.is_read = true;
        Some(entry.clone())
    }
}
