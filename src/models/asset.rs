//! Asset model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::enums::{AssetStatus, AssetType, Department};
use super::ids::AssetId;

/// Asset record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: AssetId,
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub serial_number: String,
    pub status: AssetStatus,
    /// Name of the employee holding the asset
    pub assigned_to: Option<String>,
    /// Mirrors the assignee's department
    pub department: Option<Department>,
    pub purchase_date: NaiveDate,
    pub warranty_expiry: NaiveDate,
}

impl Asset {
    pub fn is_assigned(&self) -> bool {
        self.assigned_to.is_some()
    }

    /// Merge the provided fields onto this record
    pub fn apply(&mut self, data: &UpdateAsset) {
        if let Some(ref name) = data.name {
            self.name = name.clone();
        }
        if let Some(asset_type) = data.asset_type {
            self.asset_type = asset_type;
        }
        if let Some(ref serial_number) = data.serial_number {
            self.serial_number = serial_number.clone();
        }
        if let Some(purchase_date) = data.purchase_date {
            self.purchase_date = purchase_date;
        }
        if let Some(warranty_expiry) = data.warranty_expiry {
            self.warranty_expiry = warranty_expiry;
        }
    }

    pub(crate) fn clear_assignment(&mut self, status: AssetStatus) {
        self.status = status;
        self.assigned_to = None;
        self.department = None;
    }
}

/// Asset form as entered by the user (add / edit dialog)
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct AssetForm {
    #[validate(custom(function = "crate::validation::not_blank", code = "required", message = "Asset name is required"))]
    pub name: String,
    #[serde(rename = "type")]
    #[validate(custom(function = "crate::validation::not_blank", code = "required", message = "Asset type is required"))]
    pub asset_type: String,
    #[validate(custom(function = "crate::validation::not_blank", code = "required", message = "Serial number is required"))]
    pub serial_number: String,
    #[validate(custom(function = "crate::validation::not_blank", code = "required", message = "Purchase date is required"))]
    pub purchase_date: String,
    #[validate(custom(
        function = "crate::validation::not_blank",
        code = "required",
        message = "Warranty expiry date is required"
    ))]
    pub warranty_expiry: String,
}

impl AssetForm {
    /// Prefill the edit dialog from an existing record
    pub fn from_asset(asset: &Asset) -> Self {
        Self {
            name: asset.name.clone(),
            asset_type: asset.asset_type.to_string(),
            serial_number: asset.serial_number.clone(),
            purchase_date: asset.purchase_date.to_string(),
            warranty_expiry: asset.warranty_expiry.to_string(),
        }
    }
}

/// Create asset request (validated)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAsset {
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub serial_number: String,
    pub purchase_date: NaiveDate,
    pub warranty_expiry: NaiveDate,
}

/// Update asset request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAsset {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub asset_type: Option<AssetType>,
    pub serial_number: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub warranty_expiry: Option<NaiveDate>,
}

impl From<CreateAsset> for UpdateAsset {
    fn from(data: CreateAsset) -> Self {
        Self {
            name: Some(data.name),
            asset_type: Some(data.asset_type),
            serial_number: Some(data.serial_number),
            purchase_date: Some(data.purchase_date),
            warranty_expiry: Some(data.warranty_expiry),
        }
    }
}

/// Assignment form as entered by the user
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct AssignmentForm {
    #[validate(custom(
        function = "crate::validation::not_blank",
        code = "required",
        message = "Employee selection is required"
    ))]
    pub employee_name: String,
    #[validate(custom(function = "crate::validation::not_blank", code = "required", message = "Department is required"))]
    pub department: String,
    #[validate(custom(
        function = "crate::validation::not_blank",
        code = "required",
        message = "Assignment date is required"
    ))]
    pub assignment_date: String,
}

impl AssignmentForm {
    /// Empty form with the date preset to today
    pub fn for_date(today: NaiveDate) -> Self {
        Self {
            assignment_date: today.to_string(),
            ..Default::default()
        }
    }
}

/// Assign asset request (validated)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub employee_name: String,
    pub department: Department,
    pub assignment_date: NaiveDate,
}
