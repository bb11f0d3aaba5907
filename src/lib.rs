//! AssetDesk
//!
//! Core of an asset and employee tracking dashboard: an in-memory record
//! store, form validation, list search, and the create/update/delete/assign
//! operations the dashboard's dialogs call. The view layer is not part of
//! this crate; it drives an [`AppState`] and renders what it returns.

use std::sync::Arc;

pub mod clock;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod repository;
pub mod search;
pub mod services;
pub mod validation;

pub use crate::config::AppConfig;
pub use error::{AppError, AppResult};

use clock::{Clock, SystemClock};
use models::{Notification, Notifications, UserProfile};
use repository::Repository;
use services::{AssetsService, AuthService, EmployeesService, StatsService};

/// Session state: the record store, the logged-in user and pending toasts
pub struct AppState {
    pub config: Arc<AppConfig>,
    repository: Repository,
    session: Option<UserProfile>,
    notifications: Notifications,
    clock: Box<dyn Clock>,
}

impl AppState {
    /// New session on the wall clock
    pub fn new(config: AppConfig) -> Self {
        Self::with_clock(config, Box::new(SystemClock))
    }

    pub fn with_clock(config: AppConfig, clock: Box<dyn Clock>) -> Self {
        let repository = if config.store.seed_demo_data {
            Repository::seeded(config.activity.capacity)
        } else {
            Repository::new(config.activity.capacity)
        };
        tracing::debug!(
            "Session store ready: {} assets, {} employees",
            repository.assets_list().len(),
            repository.employees_list().len()
        );
        Self {
            config: Arc::new(config),
            repository,
            session: None,
            notifications: Notifications::default(),
            clock,
        }
    }

    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    pub fn current_user(&self) -> Option<&UserProfile> {
        self.session.as_ref()
    }

    pub fn assets(&mut self) -> AssetsService<'_> {
        AssetsService::new(&mut self.repository, &mut self.notifications, self.clock.as_ref())
    }

    pub fn employees(&mut self) -> EmployeesService<'_> {
        EmployeesService::new(&mut self.repository, &mut self.notifications, self.clock.as_ref())
    }

    pub fn auth(&mut self) -> AuthService<'_> {
        AuthService::new(&self.config.auth, &mut self.session, &mut self.notifications)
    }

    pub fn dashboard(&self) -> StatsService<'_> {
        StatsService::new(&self.repository, &self.config.dashboard, self.clock.as_ref())
    }

    pub fn notifications(&self) -> &[Notification] {
        self.notifications.pending()
    }

    /// Hand pending toasts to the view layer
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain()
    }
}
