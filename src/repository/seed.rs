//! Demo records loaded at session start

use chrono::NaiveDate;

use super::{ActivityLog, Collection, Repository};
use crate::models::{Asset, AssetId, AssetStatus, AssetType, Department, Employee, EmployeeId, Role};

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn asset(
    seq: u32,
    name: &str,
    asset_type: AssetType,
    serial_number: &str,
    status: AssetStatus,
    holder: Option<(&str, Department)>,
    purchase_date: NaiveDate,
    warranty_expiry: NaiveDate,
) -> Asset {
    Asset {
        id: AssetId::new(seq),
        name: name.to_string(),
        asset_type,
        serial_number: serial_number.to_string(),
        status,
        assigned_to: holder.map(|(name, _)| name.to_string()),
        department: holder.map(|(_, department)| department),
        purchase_date,
        warranty_expiry,
    }
}

fn employee(seq: u32, name: &str, email: &str, department: Department, role: Role, join_date: NaiveDate) -> Employee {
    Employee {
        id: EmployeeId::new(seq),
        name: name.to_string(),
        email: email.to_string(),
        department,
        role,
        assigned_assets: Vec::new(),
        join_date,
    }
}

fn demo_assets() -> Vec<Asset> {
    use AssetStatus::{Assigned, Available, Maintenance};
    vec![
        asset(1, "MacBook Pro 16\"", AssetType::Laptop, "MBP-2023-001", Assigned,
            Some(("Sarah Johnson", Department::Engineering)), ymd(2023, 1, 15), ymd(2026, 1, 15)),
        asset(2, "Dell Monitor 27\"", AssetType::Monitor, "DM-2023-045", Available,
            None, ymd(2023, 3, 10), ymd(2026, 3, 10)),
        asset(3, "Wireless Mouse", AssetType::Accessory, "WM-2023-089", Maintenance,
            None, ymd(2023, 2, 20), ymd(2025, 2, 20)),
        asset(4, "iMac 27\"", AssetType::Desktop, "IM-2023-012", Assigned,
            Some(("Mike Chen", Department::Design)), ymd(2023, 2, 1), ymd(2026, 2, 1)),
        asset(5, "iPad Pro", AssetType::Tablet, "IPP-2022-031", Assigned,
            Some(("Emma Davis", Department::Marketing)), ymd(2022, 11, 15), ymd(2025, 11, 15)),
        asset(6, "MacBook Air", AssetType::Laptop, "MBA-2022-030", Assigned,
            Some(("Emma Davis", Department::Marketing)), ymd(2022, 11, 15), ymd(2025, 11, 15)),
    ]
}

fn demo_employees() -> Vec<Employee> {
    vec![
        employee(1, "Sarah Johnson", "sarah.johnson@company.com", Department::Engineering, Role::Employee, ymd(2023, 1, 15)),
        employee(2, "Mike Chen", "mike.chen@company.com", Department::Design, Role::Employee, ymd(2023, 2, 10)),
        employee(3, "Emma Davis", "emma.davis@company.com", Department::Marketing, Role::DepartmentHead, ymd(2022, 11, 20)),
    ]
}

impl Repository {
    /// Store preloaded with the demo assets and employees. Each employee's
    /// `assigned_assets` is derived from the assets assigned to them.
    pub fn seeded(activity_capacity: usize) -> Self {
        let assets = demo_assets();
        let mut employees = demo_employees();
        for employee in &mut employees {
            employee.assigned_assets = assets
                .iter()
                .filter(|a| a.assigned_to.as_deref() == Some(employee.name.as_str()))
                .map(|a| a.name.clone())
                .collect();
        }

        Self {
            assets: Collection::from_records(assets, |a| a.id.seq()),
            employees: Collection::from_records(employees, |e| e.id.seq()),
            activity: ActivityLog::new(activity_capacity),
            revision: 0,
        }
    }
}
