//! Logged-in user profile and menu gating

use serde::{Deserialize, Serialize};

use super::enums::{Department, Role};
use crate::error::AppError;

/// Sidebar sections of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuSection {
    Dashboard,
    Assets,
    Employees,
    Departments,
    Reports,
    Settings,
}

impl MenuSection {
    /// Sidebar order
    pub const ALL: [MenuSection; 6] = [
        MenuSection::Dashboard,
        MenuSection::Assets,
        MenuSection::Employees,
        MenuSection::Departments,
        MenuSection::Reports,
        MenuSection::Settings,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuSection::Dashboard => "Dashboard",
            MenuSection::Assets => "Assets",
            MenuSection::Employees => "Employees",
            MenuSection::Departments => "Departments",
            MenuSection::Reports => "Reports",
            MenuSection::Settings => "Settings",
        }
    }

    /// Roles allowed to see this section
    pub fn roles(&self) -> &'static [Role] {
        match self {
            MenuSection::Dashboard => &[Role::Admin, Role::DepartmentHead, Role::Employee],
            MenuSection::Assets
            | MenuSection::Employees
            | MenuSection::Reports => &[Role::Admin, Role::DepartmentHead],
            MenuSection::Departments | MenuSection::Settings => &[Role::Admin],
        }
    }

    pub fn is_visible_to(&self, role: Role) -> bool {
        self.roles().contains(&role)
    }
}

impl std::fmt::Display for MenuSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Current user of the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
    pub role: Role,
    pub name: String,
    pub department: Department,
}

impl UserProfile {
    /// Sections shown in the sidebar, in order
    pub fn visible_sections(&self) -> Vec<MenuSection> {
        MenuSection::ALL
            .into_iter()
            .filter(|section| section.is_visible_to(self.role))
            .collect()
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn require_section(&self, section: MenuSection) -> Result<(), AppError> {
        if section.is_visible_to(self.role) {
            Ok(())
        } else {
            Err(AppError::Authorization(format!(
                "{} section is not available to {}",
                section,
                self.role.label()
            )))
        }
    }
}

/// Login form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}
