//! Recent activity feed, bounded

use std::collections::VecDeque;

use chrono::{DateTime, Utc};

use super::Repository;
use crate::models::{Activity, ActivityKind, Department};

#[derive(Debug, Clone)]
pub struct ActivityLog {
    entries: VecDeque<Activity>,
    capacity: usize,
    next_id: u64,
}

impl ActivityLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            next_id: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push(&mut self, mut activity: Activity) -> Option<&Activity> {
        if self.capacity == 0 {
            return None;
        }
        activity.id = self.next_id;
        self.next_id += 1;
        if self.entries.len() == self.capacity {
            self.entries.pop_back();
        }
        self.entries.push_front(activity);
        self.entries.front()
    }

    /// Newest first
    pub fn recent(&self, limit: usize) -> Vec<Activity> {
        self.entries.iter().take(limit).cloned().collect()
    }
}

impl Repository {
    pub fn activity_record(
        &mut self,
        kind: ActivityKind,
        asset: &str,
        employee: Option<&str>,
        department: Option<Department>,
        at: DateTime<Utc>,
    ) {
        let entry = Activity {
            id: 0,
            kind,
            asset: asset.to_string(),
            employee: employee.map(str::to_string),
            department,
            at,
        };
        if let Some(recorded) = self.activity.push(entry) {
            tracing::debug!("Activity {} recorded: {:?} {}", recorded.id, recorded.kind, recorded.asset);
        }
    }

    pub fn activity_recent(&self, limit: usize) -> Vec<Activity> {
        self.activity.recent(limit)
    }
}
