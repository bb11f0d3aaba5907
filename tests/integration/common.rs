use assetdesk::{
    clock::FixedClock,
    config::AppConfig,
    models::{AssetForm, EmployeeForm},
    AppState,
};
use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
}

/// Session with the demo records, frozen on `today()`
pub fn seeded_state() -> AppState {
    AppState::with_clock(AppConfig::default(), Box::new(FixedClock::on(today())))
}

/// Session with no records
pub fn empty_state() -> AppState {
    let mut config = AppConfig::default();
    config.store.seed_demo_data = false;
    AppState::with_clock(config, Box::new(FixedClock::on(today())))
}

pub fn asset_form(name: &str, asset_type: &str, serial: &str) -> AssetForm {
    AssetForm {
        name: name.to_string(),
        asset_type: asset_type.to_string(),
        serial_number: serial.to_string(),
        purchase_date: "2024-01-15".to_string(),
        warranty_expiry: "2027-01-15".to_string(),
    }
}

pub fn employee_form(name: &str, email: &str, department: &str) -> EmployeeForm {
    EmployeeForm {
        name: name.to_string(),
        email: email.to_string(),
        department: department.to_string(),
        role: "employee".to_string(),
    }
}

/// Every employee's `assigned_assets` names exactly the assets recorded under them
pub fn assert_holdings_consistent(state: &AppState) {
    let repo = state.repository();
    for employee in repo.employees_list().iter() {
        let mut listed = employee.assigned_assets.clone();
        let mut held: Vec<String> = repo.assets_held_by(&employee.name).into_iter().map(|a| a.name).collect();
        listed.sort();
        held.sort();
        assert_eq!(listed, held, "holdings of {}", employee.name);
    }
}
