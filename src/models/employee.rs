//! Employee model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::enums::{Department, Role};
use super::ids::EmployeeId;

/// Employee record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub email: String,
    pub department: Department,
    pub role: Role,
    /// Names of the assets currently held, in assignment order
    pub assigned_assets: Vec<String>,
    pub join_date: NaiveDate,
}

impl Employee {
    pub fn apply(&mut self, data: &UpdateEmployee) {
        if let Some(ref name) = data.name {
            self.name = name.clone();
        }
        if let Some(ref email) = data.email {
            self.email = email.clone();
        }
        if let Some(department) = data.department {
            self.department = department;
        }
        if let Some(role) = data.role {
            self.role = role;
        }
    }

    /// "2 assets", "1 asset", "0 assets"
    pub fn asset_count_label(&self) -> String {
        let n = self.assigned_assets.len();
        format!("{} asset{}", n, if n == 1 { "" } else { "s" })
    }

    pub(crate) fn release_asset(&mut self, asset_name: &str) {
        if let Some(pos) = self.assigned_assets.iter().position(|a| a == asset_name) {
            self.assigned_assets.remove(pos);
        }
    }
}

/// Employee form as entered by the user
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeForm {
    #[validate(custom(function = "crate::validation::not_blank", code = "required", message = "Name is required"))]
    pub name: String,
    #[validate(
        regex(path = *crate::validation::EMAIL_RE, code = "format", message = "Email format is invalid"),
        custom(function = "crate::validation::not_blank", code = "required", message = "Email is required")
    )]
    pub email: String,
    #[validate(custom(function = "crate::validation::not_blank", code = "required", message = "Department is required"))]
    pub department: String,
    #[validate(custom(function = "crate::validation::not_blank", code = "required", message = "Role is required"))]
    pub role: String,
}

impl EmployeeForm {
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            email: employee.email.clone(),
            department: employee.department.to_string(),
            role: employee.role.to_string(),
        }
    }
}

/// Create employee request (validated)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployee {
    pub name: String,
    pub email: String,
    pub department: Department,
    pub role: Role,
}

/// Update employee request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployee {
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<Department>,
    pub role: Option<Role>,
}

impl From<CreateEmployee> for UpdateEmployee {
    fn from(data: CreateEmployee) -> Self {
        Self {
            name: Some(data.name),
            email: Some(data.email),
            department: Some(data.department),
            role: Some(data.role),
        }
    }
}

/// Entry of the assignment dialog's employee picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssigneeOption {
    pub name: String,
    pub department: Department,
}
