//! Shared domain enums

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// AssetType
// ---------------------------------------------------------------------------

/// Kind of trackable item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetType {
    Laptop,
    Desktop,
    Monitor,
    Keyboard,
    Mouse,
    Headset,
    Phone,
    Tablet,
    Accessory,
}

impl AssetType {
    pub const ALL: [AssetType; 9] = [
        AssetType::Laptop,
        AssetType::Desktop,
        AssetType::Monitor,
        AssetType::Keyboard,
        AssetType::Mouse,
        AssetType::Headset,
        AssetType::Phone,
        AssetType::Tablet,
        AssetType::Accessory,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Laptop => "Laptop",
            AssetType::Desktop => "Desktop",
            AssetType::Monitor => "Monitor",
            AssetType::Keyboard => "Keyboard",
            AssetType::Mouse => "Mouse",
            AssetType::Headset => "Headset",
            AssetType::Phone => "Phone",
            AssetType::Tablet => "Tablet",
            AssetType::Accessory => "Accessory",
        }
    }
}

impl std::fmt::Display for AssetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AssetType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AssetType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Invalid asset type: {}", s))
    }
}

// ---------------------------------------------------------------------------
// AssetStatus
// ---------------------------------------------------------------------------

/// Lifecycle state of an asset. Only mutation operations change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetStatus {
    Available,
    Assigned,
    Maintenance,
}

impl AssetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetStatus::Available => "Available",
            AssetStatus::Assigned => "Assigned",
            AssetStatus::Maintenance => "Maintenance",
        }
    }
}

impl std::fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Department
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Department {
    Engineering,
    Design,
    Marketing,
    Sales,
    #[serde(rename = "HR")]
    Hr,
    #[serde(rename = "IT")]
    It,
    Finance,
}

impl Department {
    pub const ALL: [Department; 7] = [
        Department::Engineering,
        Department::Design,
        Department::Marketing,
        Department::Sales,
        Department::Hr,
        Department::It,
        Department::Finance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Engineering => "Engineering",
            Department::Design => "Design",
            Department::Marketing => "Marketing",
            Department::Sales => "Sales",
            Department::Hr => "HR",
            Department::It => "IT",
            Department::Finance => "Finance",
        }
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Department {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Department::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Invalid department: {}", s))
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Role of an employee or logged-in user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Employee,
    DepartmentHead,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Employee, Role::DepartmentHead, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employee => "employee",
            Role::DepartmentHead => "department_head",
            Role::Admin => "admin",
        }
    }

    /// Badge text, e.g. "DEPARTMENT HEAD"
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ").to_uppercase()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "employee" => Ok(Role::Employee),
            "department_head" => Ok(Role::DepartmentHead),
            "admin" => Ok(Role::Admin),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}
