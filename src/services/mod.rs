//! Business logic services
//!
//! Each service borrows the parts of [`crate::AppState`] it needs for the
//! duration of one call, so the store has a single owner and no locking.

pub mod assets;
pub mod auth;
pub mod employees;
pub mod stats;

pub use assets::AssetsService;
pub use auth::AuthService;
pub use employees::EmployeesService;
pub use stats::{AlertReason, DashboardSnapshot, DashboardStats, MaintenanceAlert, StatsService};
