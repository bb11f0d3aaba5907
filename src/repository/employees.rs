//! Employee domain methods on Repository

use std::sync::Arc;

use chrono::NaiveDate;

use super::Repository;
use crate::models::{AssetStatus, AssigneeOption, CreateEmployee, Employee, EmployeeId, UpdateEmployee};

impl Repository {
    /// All employees, in creation order
    pub fn employees_list(&self) -> Arc<Vec<Employee>> {
        self.employees.snapshot()
    }

    pub fn employees_get(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.find(|e| e.id == id)
    }

    pub fn employees_get_by_name(&self, name: &str) -> Option<&Employee> {
        self.employees.find(|e| e.name == name)
    }

    /// True when another employee than `except` already uses `name`
    pub fn employees_name_taken(&self, name: &str, except: Option<EmployeeId>) -> bool {
        self.employees
            .find(|e| e.name == name && Some(e.id) != except)
            .is_some()
    }

    /// Append a new employee joined on `join_date`. Assets already recorded
    /// under a name nobody else uses are listed as theirs.
    pub fn employees_create(&mut self, data: CreateEmployee, join_date: NaiveDate) -> Employee {
        let assigned_assets = if self.employees_name_taken(&data.name, None) {
            Vec::new()
        } else {
            self.assets_held_by(&data.name).into_iter().map(|a| a.name).collect()
        };
        let employee = Employee {
            id: EmployeeId::new(self.employees.take_seq()),
            name: data.name,
            email: data.email,
            department: data.department,
            role: data.role,
            assigned_assets,
            join_date,
        };
        self.employees.push(employee.clone());
        self.touch();
        employee
    }

    /// Merge `data` onto the employee. Held assets follow a rename or a
    /// department change.
    pub fn employees_update(&mut self, id: EmployeeId, data: &UpdateEmployee) -> Option<Employee> {
        let old_name = self.employees_get(id)?.name.clone();
        let updated = self.employees.update_where(|e| e.id == id, |e| e.apply(data))?;

        let new_name = updated.name.clone();
        let department = updated.department;
        self.assets.update_all(|asset| {
            if asset.assigned_to.as_deref() != Some(old_name.as_str()) {
                return false;
            }
            let changed = new_name != old_name || asset.department != Some(department);
            asset.assigned_to = Some(new_name.clone());
            asset.department = Some(department);
            changed
        });
        self.touch();
        Some(updated)
    }

    /// Remove the employee; assets they held become available
    pub fn employees_delete(&mut self, id: EmployeeId) -> Option<Employee> {
        let removed = self.employees.remove_where(|e| e.id == id)?;
        let released = self.assets.update_all(|asset| {
            if asset.assigned_to.as_deref() == Some(removed.name.as_str()) {
                asset.clear_assignment(AssetStatus::Available);
                true
            } else {
                false
            }
        });
        if released > 0 {
            tracing::info!("Released {} assets held by deleted employee {}", released, removed.id);
        }
        self.touch();
        Some(removed)
    }

    /// Choices offered by the assignment dialog
    pub fn employees_assignees(&self) -> Vec<AssigneeOption> {
        self.employees
            .as_slice()
            .iter()
            .map(|e| AssigneeOption {
                name: e.name.clone(),
                department: e.department,
            })
            .collect()
    }
}
