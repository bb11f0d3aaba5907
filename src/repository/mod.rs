//! In-memory record store
//!
//! Every mutation builds a new collection and swaps the `Arc`, so a caller
//! holding an older snapshot can detect a change with [`Arc::ptr_eq`].

pub mod activity;
pub mod assets;
pub mod employees;
pub mod seed;

use std::sync::Arc;

use crate::models::{Asset, Employee};

pub use activity::ActivityLog;

/// One copy-on-write collection plus its id counter
#[derive(Debug, Clone)]
pub struct Collection<T> {
    records: Arc<Vec<T>>,
    next_seq: u32,
}

impl<T: Clone> Collection<T> {
    pub fn new() -> Self {
        Self {
            records: Arc::new(Vec::new()),
            next_seq: 1,
        }
    }

    /// Start from existing records; the counter continues after the highest sequence
    pub fn from_records(records: Vec<T>, seq_of: impl Fn(&T) -> u32) -> Self {
        let next_seq = records.iter().map(seq_of).max().unwrap_or(0) + 1;
        Self {
            records: Arc::new(records),
            next_seq,
        }
    }

    pub fn snapshot(&self) -> Arc<Vec<T>> {
        Arc::clone(&self.records)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find(&self, pred: impl Fn(&T) -> bool) -> Option<&T> {
        self.records.iter().find(|r| pred(r))
    }

    /// Never reused, even after the newest record is deleted
    fn take_seq(&mut self) -> u32 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    fn push(&mut self, record: T) {
        let mut records = Vec::with_capacity(self.records.len() + 1);
        records.extend(self.records.iter().cloned());
        records.push(record);
        self.records = Arc::new(records);
    }

    fn update_where(&mut self, pred: impl Fn(&T) -> bool, f: impl FnOnce(&mut T)) -> Option<T> {
        let pos = self.records.iter().position(pred)?;
        let mut records = self.records.as_ref().clone();
        f(&mut records[pos]);
        let updated = records[pos].clone();
        self.records = Arc::new(records);
        Some(updated)
    }

    /// Apply `f` to every record; the collection is replaced only if some call returned true
    fn update_all(&mut self, mut f: impl FnMut(&mut T) -> bool) -> usize {
        let mut records = self.records.as_ref().clone();
        let changed = records.iter_mut().map(|r| f(r)).filter(|c| *c).count();
        if changed > 0 {
            self.records = Arc::new(records);
        }
        changed
    }

    fn remove_where(&mut self, pred: impl Fn(&T) -> bool) -> Option<T> {
        let pos = self.records.iter().position(pred)?;
        let mut records = self.records.as_ref().clone();
        let removed = records.remove(pos);
        self.records = Arc::new(records);
        Some(removed)
    }
}

impl<T: Clone> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The session's single source of truth
#[derive(Debug, Clone)]
pub struct Repository {
    pub(crate) assets: Collection<Asset>,
    pub(crate) employees: Collection<Employee>,
    pub(crate) activity: ActivityLog,
    revision: u64,
}

impl Repository {
    /// Create an empty store
    pub fn new(activity_capacity: usize) -> Self {
        Self {
            assets: Collection::new(),
            employees: Collection::new(),
            activity: ActivityLog::new(activity_capacity),
            revision: 0,
        }
    }

    /// Increases on every effective mutation
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn touch(&mut self) {
        self.revision += 1;
    }

    /// Move an asset name between holders' `assigned_assets` lists.
    /// Each side touches the first employee carrying that name.
    fn transfer_holding(&mut self, asset_name: &str, from: Option<&str>, to: Option<&str>) {
        if let Some(from) = from {
            self.employees.update_where(
                |e| e.name == from && e.assigned_assets.iter().any(|a| a == asset_name),
                |e| e.release_asset(asset_name),
            );
        }
        if let Some(to) = to {
            self.employees
                .update_where(|e| e.name == to, |e| e.assigned_assets.push(asset_name.to_string()));
        }
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new(crate::config::ActivityConfig::default().capacity)
    }
}
