//! Toast-style notifications queued for the presentation layer

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: Variant::Default,
        }
    }

    pub fn failure(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: Variant::Destructive,
        }
    }
}

/// Pending toasts, oldest first
#[derive(Debug, Clone, Default)]
pub struct Notifications {
    queue: Vec<Notification>,
}

impl Notifications {
    pub fn push(&mut self, notification: Notification) {
        self.queue.push(notification);
    }

    pub fn pending(&self) -> &[Notification] {
        &self.queue
    }

    /// Hand every pending toast to the caller
    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.queue)
    }

    pub fn last(&self) -> Option<&Notification> {
        self.queue.last()
    }
}
