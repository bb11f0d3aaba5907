//! Form validation
//!
//! Presence and email format are declared on the form types with
//! `#[derive(Validate)]`; the checks here add parsing, date ordering and the
//! past-date rule. Failures are collected into a [`FieldErrors`] map keyed by
//! the form's field names (`serialNumber`, `warrantyExpiry`, ...) so the
//! presentation layer can show each message next to its input. On success the
//! typed request is returned.

use std::str::FromStr;

use chrono::NaiveDate;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use validator::{Validate, ValidationError};

use crate::models::{
    AssetForm, AssetType, Assignment, AssignmentForm, CreateAsset, CreateEmployee, Department,
    EmployeeForm, Role,
};

pub(crate) static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid email regex"));

const DATE_FORMAT: &str = "%Y-%m-%d";

/// (struct field, form field) in the order the dialog shows them
const ASSET_FIELDS: &[(&str, &str)] = &[
    ("name", "name"),
    ("asset_type", "type"),
    ("serial_number", "serialNumber"),
    ("purchase_date", "purchaseDate"),
    ("warranty_expiry", "warrantyExpiry"),
];

const EMPLOYEE_FIELDS: &[(&str, &str)] = &[
    ("name", "name"),
    ("email", "email"),
    ("department", "department"),
    ("role", "role"),
];

const ASSIGNMENT_FIELDS: &[(&str, &str)] = &[
    ("employee_name", "employeeName"),
    ("department", "department"),
    ("assignment_date", "assignmentDate"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
struct FieldError {
    code: &'static str,
    message: String,
}

/// Field name to message, in form order. Empty means the form is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(IndexMap<&'static str, FieldError>);

impl FieldErrors {
    /// Record a failure; a later rule on the same field replaces the earlier message
    pub fn add(&mut self, field: &'static str, code: &'static str, message: impl Into<String>) {
        self.0.insert(
            field,
            FieldError {
                code,
                message: message.into(),
            },
        );
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(|e| e.message.as_str())
    }

    pub fn code(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).map(|e| e.code)
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.0.iter().map(|(k, v)| (*k, v.message.as_str()))
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

// ---------------------------------------------------------------------------
// Field helpers
// ---------------------------------------------------------------------------

/// Whitespace-only input counts as missing
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// Run the form's declared rules and key the failures by form field.
/// A missing value wins over a format failure on the same field.
fn declared<F: Validate>(form: &F, fields: &[(&'static str, &'static str)]) -> FieldErrors {
    let mut errors = FieldErrors::default();
    let Err(failed) = form.validate() else {
        return errors;
    };
    let by_field = failed.field_errors();
    for &(struct_field, form_field) in fields {
        let Some(found) = by_field.get(struct_field) else {
            continue;
        };
        let Some(error) = found.iter().find(|e| e.code == "required").or_else(|| found.first()) else {
            continue;
        };
        let code = match error.code.as_ref() {
            "required" => "required",
            "format" => "format",
            _ => "invalid",
        };
        let message = error.message.as_deref().unwrap_or("Value is invalid");
        errors.add(form_field, code, message);
    }
    errors
}

/// Trimmed value of a field that passed the declared rules
fn accepted(errors: &FieldErrors, field: &str, value: &str) -> Option<String> {
    if errors.contains(field) {
        None
    } else {
        Some(value.trim().to_string())
    }
}

fn parsed<T: FromStr>(errors: &mut FieldErrors, field: &'static str, value: &str, invalid: &str) -> Option<T> {
    let value = accepted(errors, field, value)?;
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            errors.add(field, "invalid", invalid);
            None
        }
    }
}

fn parsed_date(errors: &mut FieldErrors, field: &'static str, value: &str, invalid: &str) -> Option<NaiveDate> {
    let value = accepted(errors, field, value)?;
    match NaiveDate::parse_from_str(&value, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            errors.add(field, "invalid", invalid);
            None
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

// ---------------------------------------------------------------------------
// Forms
// ---------------------------------------------------------------------------

/// Validate the add/edit asset dialog
pub fn check_asset(form: &AssetForm) -> Result<CreateAsset, FieldErrors> {
    let mut errors = declared(form, ASSET_FIELDS);

    let name = accepted(&errors, "name", &form.name);
    let asset_type = parsed::<AssetType>(&mut errors, "type", &form.asset_type, "Asset type is invalid");
    let serial_number = accepted(&errors, "serialNumber", &form.serial_number);
    let purchase_date = parsed_date(&mut errors, "purchaseDate", &form.purchase_date, "Purchase date is invalid");
    let warranty_expiry = parsed_date(
        &mut errors,
        "warrantyExpiry",
        &form.warranty_expiry,
        "Warranty expiry date is invalid",
    );

    if let (Some(purchase), Some(expiry)) = (purchase_date, warranty_expiry) {
        if expiry <= purchase {
            errors.add("warrantyExpiry", "date_order", "Warranty expiry must be after purchase date");
        }
    }

    match (name, asset_type, serial_number, purchase_date, warranty_expiry) {
        (Some(name), Some(asset_type), Some(serial_number), Some(purchase_date), Some(warranty_expiry))
            if errors.is_empty() =>
        {
            Ok(CreateAsset {
                name,
                asset_type,
                serial_number,
                purchase_date,
                warranty_expiry,
            })
        }
        _ => Err(errors),
    }
}

/// Validate the add/edit employee dialog
pub fn check_employee(form: &EmployeeForm) -> Result<CreateEmployee, FieldErrors> {
    let mut errors = declared(form, EMPLOYEE_FIELDS);

    let name = accepted(&errors, "name", &form.name);
    let email = accepted(&errors, "email", &form.email);
    let department = parsed::<Department>(&mut errors, "department", &form.department, "Department is invalid");
    let role = parsed::<Role>(&mut errors, "role", &form.role, "Role is invalid");

    match (name, email, department, role) {
        (Some(name), Some(email), Some(department), Some(role)) if errors.is_empty() => Ok(CreateEmployee {
            name,
            email,
            department,
            role,
        }),
        _ => Err(errors),
    }
}

/// Validate the assignment dialog. `today` is the current calendar date.
pub fn check_assignment(form: &AssignmentForm, today: NaiveDate) -> Result<Assignment, FieldErrors> {
    let mut errors = declared(form, ASSIGNMENT_FIELDS);

    let employee_name = accepted(&errors, "employeeName", &form.employee_name);
    let department = parsed::<Department>(&mut errors, "department", &form.department, "Department is invalid");
    let assignment_date = parsed_date(
        &mut errors,
        "assignmentDate",
        &form.assignment_date,
        "Assignment date is invalid",
    )
    .and_then(|date| {
        if date < today {
            errors.add("assignmentDate", "past_date", "Assignment date cannot be in the past");
            None
        } else {
            Some(date)
        }
    });

    match (employee_name, department, assignment_date) {
        (Some(employee_name), Some(department), Some(assignment_date)) if errors.is_empty() => Ok(Assignment {
            employee_name,
            department,
            assignment_date,
        }),
        _ => Err(errors),
    }
}
