//! Dashboard statistics service

use std::collections::BTreeSet;

use serde::Serialize;

use crate::{
    clock::Clock,
    config::DashboardConfig,
    models::{Activity, AssetId, AssetStatus},
    repository::Repository,
};

/// Headline counters of the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_assets: usize,
    pub assigned_assets: usize,
    pub available_assets: usize,
    pub maintenance_assets: usize,
    pub active_employees: usize,
    /// Distinct departments with at least one employee
    pub departments: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum AlertReason {
    InMaintenance,
    WarrantyExpired { days_ago: i64 },
    WarrantyExpiring { days_left: i64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaintenanceAlert {
    pub asset_id: AssetId,
    pub asset_name: String,
    #[serde(flatten)]
    pub reason: AlertReason,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub stats: DashboardStats,
    pub alerts: Vec<MaintenanceAlert>,
    pub recent_activity: Vec<Activity>,
}

pub struct StatsService<'a> {
    repository: &'a Repository,
    config: &'a DashboardConfig,
    clock: &'a dyn Clock,
}

impl<'a> StatsService<'a> {
    pub fn new(repository: &'a Repository, config: &'a DashboardConfig, clock: &'a dyn Clock) -> Self {
        Self {
            repository,
            config,
            clock,
        }
    }

    pub fn stats(&self) -> DashboardStats {
        let assets = self.repository.assets_list();
        let employees = self.repository.employees_list();
        let count = |status: AssetStatus| assets.iter().filter(|a| a.status == status).count();

        DashboardStats {
            total_assets: assets.len(),
            assigned_assets: count(AssetStatus::Assigned),
            available_assets: count(AssetStatus::Available),
            maintenance_assets: count(AssetStatus::Maintenance),
            active_employees: employees.len(),
            departments: employees.iter().map(|e| e.department).collect::<BTreeSet<_>>().len(),
        }
    }

    /// Assets in maintenance, then assets whose warranty has lapsed or
    /// lapses within the configured window
    pub fn maintenance_alerts(&self) -> Vec<MaintenanceAlert> {
        let today = self.clock.today();
        let assets = self.repository.assets_list();

        let in_maintenance = assets
            .iter()
            .filter(|a| a.status == AssetStatus::Maintenance)
            .map(|a| MaintenanceAlert {
                asset_id: a.id,
                asset_name: a.name.clone(),
                reason: AlertReason::InMaintenance,
            });

        let warranty = assets.iter().filter_map(|a| {
            let days_left = (a.warranty_expiry - today).num_days();
            let reason = if days_left < 0 {
                AlertReason::WarrantyExpired { days_ago: -days_left }
            } else if days_left <= self.config.warranty_alert_days {
                AlertReason::WarrantyExpiring { days_left }
            } else {
                return None;
            };
            Some(MaintenanceAlert {
                asset_id: a.id,
                asset_name: a.name.clone(),
                reason,
            })
        });

        let alerts: Vec<MaintenanceAlert> = in_maintenance.chain(warranty).collect();
        tracing::debug!("{} maintenance alerts as of {}", alerts.len(), today);
        alerts
    }

    /// Newest first
    pub fn recent_activity(&self, limit: usize) -> Vec<Activity> {
        self.repository.activity_recent(limit)
    }

    pub fn snapshot(&self, activity_limit: usize) -> DashboardSnapshot {
        DashboardSnapshot {
            stats: self.stats(),
            alerts: self.maintenance_alerts(),
            recent_activity: self.recent_activity(activity_limit),
        }
    }
}
