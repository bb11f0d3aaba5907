//! Asset management service

use std::sync::Arc;

use crate::{
    clock::Clock,
    error::{AppError, AppResult},
    models::{
        ActivityKind, Asset, AssetForm, AssetId, AssetStatus, AssigneeOption, AssignmentForm, Notification,
        Notifications, UpdateAsset,
    },
    repository::Repository,
    search,
    validation::{self, FieldErrors},
};

pub struct AssetsService<'a> {
    repository: &'a mut Repository,
    notifications: &'a mut Notifications,
    clock: &'a dyn Clock,
}

impl<'a> AssetsService<'a> {
    pub fn new(repository: &'a mut Repository, notifications: &'a mut Notifications, clock: &'a dyn Clock) -> Self {
        Self {
            repository,
            notifications,
            clock,
        }
    }

    pub fn list(&self) -> Arc<Vec<Asset>> {
        self.repository.assets_list()
    }

    /// Assets whose name, type or serial number contains `query`
    pub fn search(&self, query: &str) -> Vec<Asset> {
        let assets = self.repository.assets_list();
        let found: Vec<Asset> = search::filter(assets.as_slice(), query).into_iter().cloned().collect();
        tracing::debug!("Asset search {:?}: {} of {}", query, found.len(), assets.len());
        found
    }

    pub fn get(&self, id: AssetId) -> AppResult<Asset> {
        self.repository
            .assets_get(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Asset {} not found", id)))
    }

    /// Add an asset from the dialog form
    pub fn create(&mut self, form: &AssetForm) -> AppResult<Asset> {
        let data = validation::check_asset(form)?;
        let asset = self.repository.assets_create(data);
        tracing::info!("Asset {} created: {}", asset.id, asset.name);
        self.notifications.push(Notification::success(
            "Asset Added",
            format!("{} has been successfully added.", asset.name),
        ));
        Ok(asset)
    }

    /// Save the edit dialog. `Ok(None)` when the asset no longer exists.
    pub fn update(&mut self, id: AssetId, form: &AssetForm) -> AppResult<Option<Asset>> {
        let data = UpdateAsset::from(validation::check_asset(form)?);
        let Some(asset) = self.repository.assets_update(id, &data) else {
            tracing::warn!("Update of unknown asset {} ignored", id);
            return Ok(None);
        };
        tracing::info!("Asset {} updated", asset.id);
        self.notifications.push(Notification::success(
            "Asset Updated",
            format!("{} has been successfully updated.", asset.name),
        ));
        Ok(Some(asset))
    }

    pub fn delete(&mut self, id: AssetId) -> Option<Asset> {
        let Some(asset) = self.repository.assets_delete(id) else {
            tracing::warn!("Delete of unknown asset {} ignored", id);
            return None;
        };
        tracing::info!("Asset {} deleted", asset.id);
        self.notifications.push(Notification::success(
            "Asset Deleted",
            "The asset has been successfully deleted.",
        ));
        Some(asset)
    }

    /// Assign the asset from the assignment dialog. An already assigned
    /// asset simply changes hands.
    pub fn assign(&mut self, id: AssetId, form: &AssignmentForm) -> AppResult<Option<Asset>> {
        let assignment = validation::check_assignment(form, self.clock.today())?;
        if self.repository.employees_get_by_name(&assignment.employee_name).is_none() {
            tracing::warn!("Assignment to unknown employee {:?} rejected", assignment.employee_name);
            let mut errors = FieldErrors::default();
            errors.add("employeeName", "unknown", "Selected employee does not exist");
            return Err(errors.into());
        }
        let Some(asset) = self.repository.assets_assign(id, &assignment) else {
            tracing::warn!("Assignment of unknown asset {} ignored", id);
            return Ok(None);
        };
        tracing::info!(
            "Asset {} assigned to {} ({})",
            asset.id,
            assignment.employee_name,
            assignment.department
        );
        self.repository.activity_record(
            ActivityKind::Assignment,
            &asset.name,
            Some(assignment.employee_name.as_str()),
            Some(assignment.department),
            self.clock.now(),
        );
        self.notifications.push(Notification::success(
            "Asset Assigned",
            format!("Asset has been assigned to {}.", assignment.employee_name),
        ));
        Ok(Some(asset))
    }

    /// Take the asset back from its holder
    pub fn return_asset(&mut self, id: AssetId) -> Option<Asset> {
        let holder = self.repository.assets_get(id)?.clone();
        let asset = self.repository.assets_release(id, AssetStatus::Available)?;
        tracing::info!("Asset {} returned", asset.id);
        self.repository.activity_record(
            ActivityKind::Return,
            &asset.name,
            holder.assigned_to.as_deref(),
            holder.department,
            self.clock.now(),
        );
        self.notifications.push(Notification::success(
            "Asset Returned",
            format!("{} is available again.", asset.name),
        ));
        Some(asset)
    }

    /// Pull the asset out of circulation; any assignment is cleared
    pub fn send_to_maintenance(&mut self, id: AssetId) -> Option<Asset> {
        let holder = self.repository.assets_get(id)?.clone();
        let asset = self.repository.assets_release(id, AssetStatus::Maintenance)?;
        tracing::info!("Asset {} sent to maintenance", asset.id);
        self.repository.activity_record(
            ActivityKind::Maintenance,
            &asset.name,
            holder.assigned_to.as_deref(),
            holder.department,
            self.clock.now(),
        );
        self.notifications.push(Notification::success(
            "Asset Sent to Maintenance",
            format!("{} is now under maintenance.", asset.name),
        ));
        Some(asset)
    }

    /// Employees offered by the assignment dialog
    pub fn assignees(&self) -> Vec<AssigneeOption> {
        self.repository.employees_assignees()
    }

    /// Fresh assignment form, dated today
    pub fn assignment_form(&self) -> AssignmentForm {
        AssignmentForm::for_date(self.clock.today())
    }

    /// Picking an employee prefills their department
    pub fn pick_assignee(&self, form: &mut AssignmentForm, employee_name: &str) {
        form.employee_name = employee_name.to_string();
        form.department = self
            .repository
            .employees_get_by_name(employee_name)
            .map(|e| e.department.to_string())
            .unwrap_or_default();
    }
}
