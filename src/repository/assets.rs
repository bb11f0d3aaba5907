//! Asset domain methods on Repository

use std::sync::Arc;

use super::Repository;
use crate::models::{Asset, AssetId, AssetStatus, Assignment, CreateAsset, UpdateAsset};

impl Repository {
    /// All assets, in creation order
    pub fn assets_list(&self) -> Arc<Vec<Asset>> {
        self.assets.snapshot()
    }

    pub fn assets_get(&self, id: AssetId) -> Option<&Asset> {
        self.assets.find(|a| a.id == id)
    }

    /// Append a new asset. The caller is responsible for validation.
    pub fn assets_create(&mut self, data: CreateAsset) -> Asset {
        let asset = Asset {
            id: AssetId::new(self.assets.take_seq()),
            name: data.name,
            asset_type: data.asset_type,
            serial_number: data.serial_number,
            status: AssetStatus::Available,
            assigned_to: None,
            department: None,
            purchase_date: data.purchase_date,
            warranty_expiry: data.warranty_expiry,
        };
        self.assets.push(asset.clone());
        self.touch();
        asset
    }

    /// Merge `data` onto the asset; `None` when the id is unknown
    pub fn assets_update(&mut self, id: AssetId, data: &UpdateAsset) -> Option<Asset> {
        let old_name = self.assets_get(id)?.name.clone();
        let updated = self.assets.update_where(|a| a.id == id, |a| a.apply(data))?;

        if updated.name != old_name {
            if let Some(holder) = updated.assigned_to.as_deref() {
                let new_name = updated.name.clone();
                self.employees.update_where(
                    |e| e.name == holder,
                    |employee| {
                        // Same-named assets share one entry each; rename exactly one
                        if let Some(held) = employee.assigned_assets.iter_mut().find(|held| **held == old_name) {
                            *held = new_name;
                        }
                    },
                );
            }
        }
        self.touch();
        Some(updated)
    }

    /// Remove the asset and drop it from its holder's list
    pub fn assets_delete(&mut self, id: AssetId) -> Option<Asset> {
        let removed = self.assets.remove_where(|a| a.id == id)?;
        self.transfer_holding(&removed.name, removed.assigned_to.as_deref(), None);
        self.touch();
        Some(removed)
    }

    /// Hand the asset to `assignment.employee_name`, overwriting any previous holder
    pub fn assets_assign(&mut self, id: AssetId, assignment: &Assignment) -> Option<Asset> {
        let previous = self.assets_get(id)?.assigned_to.clone();
        let updated = self.assets.update_where(
            |a| a.id == id,
            |a| {
                a.status = AssetStatus::Assigned;
                a.assigned_to = Some(assignment.employee_name.clone());
                a.department = Some(assignment.department);
            },
        )?;
        self.transfer_holding(&updated.name, previous.as_deref(), Some(assignment.employee_name.as_str()));
        self.touch();
        Some(updated)
    }

    /// Clear the assignment and set `status` (Available or Maintenance)
    pub fn assets_release(&mut self, id: AssetId, status: AssetStatus) -> Option<Asset> {
        let previous = self.assets_get(id)?.assigned_to.clone();
        let updated = self.assets.update_where(|a| a.id == id, |a| a.clear_assignment(status))?;
        self.transfer_holding(&updated.name, previous.as_deref(), None);
        self.touch();
        Some(updated)
    }

    /// Assets currently held by the named employee
    pub fn assets_held_by(&self, employee_name: &str) -> Vec<Asset> {
        self.assets
            .as_slice()
            .iter()
            .filter(|a| a.assigned_to.as_deref() == Some(employee_name))
            .cloned()
            .collect()
    }
}
