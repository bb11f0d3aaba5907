//! Employee management service

use std::sync::Arc;

use crate::{
    clock::Clock,
    error::{AppError, AppResult},
    models::{Asset, Employee, EmployeeForm, EmployeeId, Notification, Notifications, UpdateEmployee},
    repository::Repository,
    search,
    validation::{self, FieldErrors},
};

pub struct EmployeesService<'a> {
    repository: &'a mut Repository,
    notifications: &'a mut Notifications,
    clock: &'a dyn Clock,
}

impl<'a> EmployeesService<'a> {
    pub fn new(repository: &'a mut Repository, notifications: &'a mut Notifications, clock: &'a dyn Clock) -> Self {
        Self {
            repository,
            notifications,
            clock,
        }
    }

    pub fn list(&self) -> Arc<Vec<Employee>> {
        self.repository.employees_list()
    }

    /// Employees whose name, email or department contains `query`
    pub fn search(&self, query: &str) -> Vec<Employee> {
        let employees = self.repository.employees_list();
        search::filter(employees.as_slice(), query)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn get(&self, id: EmployeeId) -> AppResult<Employee> {
        self.repository
            .employees_get(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Employee {} not found", id)))
    }

    /// Assets currently held by the employee
    pub fn holdings(&self, id: EmployeeId) -> AppResult<Vec<Asset>> {
        let employee = self.get(id)?;
        Ok(self.repository.assets_held_by(&employee.name))
    }

    /// Add an employee from the dialog form; they join today
    pub fn create(&mut self, form: &EmployeeForm) -> AppResult<Employee> {
        let data = validation::check_employee(form)?;
        self.ensure_unique_name(&data.name, None)?;
        let employee = self.repository.employees_create(data, self.clock.today());
        tracing::info!("Employee {} created: {}", employee.id, employee.name);
        self.notifications.push(Notification::success(
            "Employee Added",
            format!("{} has been successfully added.", employee.name),
        ));
        Ok(employee)
    }

    /// Save the edit dialog. `Ok(None)` when the employee no longer exists.
    pub fn update(&mut self, id: EmployeeId, form: &EmployeeForm) -> AppResult<Option<Employee>> {
        let data = validation::check_employee(form)?;
        self.ensure_unique_name(&data.name, Some(id))?;
        let data = UpdateEmployee::from(data);
        let Some(employee) = self.repository.employees_update(id, &data) else {
            tracing::warn!("Update of unknown employee {} ignored", id);
            return Ok(None);
        };
        tracing::info!("Employee {} updated", employee.id);
        self.notifications.push(Notification::success(
            "Employee Updated",
            format!("{} has been successfully updated.", employee.name),
        ));
        Ok(Some(employee))
    }

    /// Assignments refer to employees by name, so names stay unique
    fn ensure_unique_name(&self, name: &str, except: Option<EmployeeId>) -> AppResult<()> {
        if self.repository.employees_name_taken(name, except) {
            let mut errors = FieldErrors::default();
            errors.add("name", "duplicate", "An employee with this name already exists");
            return Err(errors.into());
        }
        Ok(())
    }

    pub fn delete(&mut self, id: EmployeeId) -> Option<Employee> {
        let Some(employee) = self.repository.employees_delete(id) else {
            tracing::warn!("Delete of unknown employee {} ignored", id);
            return None;
        };
        tracing::info!("Employee {} deleted", employee.id);
        self.notifications.push(Notification::success(
            "Employee Deleted",
            "The employee has been successfully deleted.",
        ));
        Some(employee)
    }
}
