use std::sync::Arc;

use assetdesk::{
    models::{AssetForm, AssetId, AssetStatus, AssignmentForm, Department, EmployeeForm},
    AppError,
};

use crate::common::{asset_form, assert_holdings_consistent, empty_state, employee_form, seeded_state, today};

fn assignment(employee: &str, department: &str) -> AssignmentForm {
    AssignmentForm {
        employee_name: employee.to_string(),
        department: department.to_string(),
        assignment_date: today().to_string(),
    }
}

#[test]
fn test_ids_follow_creation_order() {
    let mut state = empty_state();
    let mut assets = state.assets();
    let ids: Vec<String> = ["A", "B", "C", "D"]
        .iter()
        .map(|name| assets.create(&asset_form(name, "Mouse", name)).unwrap().id.to_string())
        .collect();
    assert_eq!(ids, vec!["AST-001", "AST-002", "AST-003", "AST-004"]);
}

#[test]
fn test_delete_newest_then_create_gets_fresh_id() {
    let mut state = empty_state();
    let mut assets = state.assets();
    assets.create(&asset_form("A", "Mouse", "A-1")).unwrap();
    let b = assets.create(&asset_form("B", "Mouse", "B-1")).unwrap();
    assets.delete(b.id);
    let c = assets.create(&asset_form("C", "Mouse", "C-1")).unwrap();
    assert_eq!(c.id.to_string(), "AST-003");
    assert_eq!(assets.list().len(), 2);

    let mut employees = state.employees();
    let e1 = employees.create(&employee_form("One", "one@company.com", "IT")).unwrap();
    employees.delete(e1.id);
    let e2 = employees.create(&employee_form("Two", "two@company.com", "IT")).unwrap();
    assert_eq!(e2.id.to_string(), "EMP-002");
}

#[test]
fn test_delete_is_idempotent() {
    let mut state = seeded_state();
    let id: AssetId = "AST-002".parse().unwrap();
    assert!(state.assets().delete(id).is_some());
    state.take_notifications();

    let revision = state.repository().revision();
    let snapshot = state.repository().assets_list();
    assert!(state.assets().delete(id).is_none());
    assert!(state
        .assets()
        .update(id, &asset_form("Dell Monitor 27\"", "Monitor", "DM-2023-045"))
        .unwrap()
        .is_none());
    assert_eq!(state.repository().revision(), revision);
    assert!(Arc::ptr_eq(&snapshot, &state.repository().assets_list()));
    assert!(state.notifications().is_empty());
}

#[test]
fn test_every_mutation_replaces_the_collection() {
    let mut state = seeded_state();
    let before = state.repository().assets_list();
    let id: AssetId = "AST-002".parse().unwrap();

    state.assets().assign(id, &assignment("Mike Chen", "Design")).unwrap();
    let after_assign = state.repository().assets_list();
    assert!(!Arc::ptr_eq(&before, &after_assign));
    assert_eq!(before[1].status, AssetStatus::Available);
    assert_eq!(after_assign[1].status, AssetStatus::Assigned);
}

#[test]
fn test_edit_merges_and_keeps_assignment() {
    let mut state = seeded_state();
    let id: AssetId = "AST-001".parse().unwrap();
    let mut form = AssetForm::from_asset(&state.assets().get(id).unwrap());
    form.name = "MacBook Pro 16\" (M3)".to_string();

    let updated = state.assets().update(id, &form).unwrap().unwrap();
    assert_eq!(updated.status, AssetStatus::Assigned);
    assert_eq!(updated.assigned_to.as_deref(), Some("Sarah Johnson"));
    assert_eq!(updated.serial_number, "MBP-2023-001");

    let sarah = state.repository().employees_get_by_name("Sarah Johnson").unwrap();
    assert_eq!(sarah.assigned_assets, vec!["MacBook Pro 16\" (M3)".to_string()]);
}

#[test]
fn test_assign_available_then_reassign() {
    let mut state = seeded_state();
    let id: AssetId = "AST-002".parse().unwrap();

    let asset = state
        .assets()
        .assign(id, &assignment("Sarah Johnson", "Engineering"))
        .unwrap()
        .unwrap();
    assert_eq!(asset.status, AssetStatus::Assigned);
    assert_eq!(asset.assigned_to.as_deref(), Some("Sarah Johnson"));
    assert_eq!(asset.department, Some(Department::Engineering));

    let asset = state
        .assets()
        .assign(id, &assignment("Mike Chen", "Design"))
        .unwrap()
        .unwrap();
    assert_eq!(asset.assigned_to.as_deref(), Some("Mike Chen"));

    let repo = state.repository();
    let sarah = repo.employees_get_by_name("Sarah Johnson").unwrap();
    let mike = repo.employees_get_by_name("Mike Chen").unwrap();
    assert!(!sarah.assigned_assets.contains(&"Dell Monitor 27\"".to_string()));
    assert!(mike.assigned_assets.contains(&"Dell Monitor 27\"".to_string()));
}

#[test]
fn test_assign_rejects_past_date() {
    let mut state = seeded_state();
    let id: AssetId = "AST-002".parse().unwrap();
    let mut form = assignment("Sarah Johnson", "Engineering");
    form.assignment_date = today().pred_opt().unwrap().to_string();

    let err = state.assets().assign(id, &form).unwrap_err();
    let errors = err.field_errors().unwrap();
    assert_eq!(errors.get("assignmentDate"), Some("Assignment date cannot be in the past"));
    assert_eq!(state.assets().get(id).unwrap().status, AssetStatus::Available);
}

#[test]
fn test_picker_prefills_department() {
    let mut state = seeded_state();
    let assets = state.assets();
    let mut form = assets.assignment_form();
    assets.pick_assignee(&mut form, "Emma Davis");
    assert_eq!(form.department, "Marketing");
    assert_eq!(form.assignment_date, today().to_string());
    assert_eq!(assets.assignees().len(), 3);
}

#[test]
fn test_return_and_maintenance() {
    let mut state = seeded_state();
    let id: AssetId = "AST-001".parse().unwrap();

    let returned = state.assets().return_asset(id).unwrap();
    assert_eq!(returned.status, AssetStatus::Available);
    assert!(returned.assigned_to.is_none());
    assert!(returned.department.is_none());
    assert!(state
        .repository()
        .employees_get_by_name("Sarah Johnson")
        .unwrap()
        .assigned_assets
        .is_empty());

    let serviced = state.assets().send_to_maintenance(id).unwrap();
    assert_eq!(serviced.status, AssetStatus::Maintenance);
}

#[test]
fn test_search_assets() {
    let mut state = seeded_state();
    let assets = state.assets();
    let names: Vec<String> = assets.search("mac").into_iter().map(|a| a.name).collect();
    assert_eq!(
        names,
        vec!["MacBook Pro 16\"".to_string(), "iMac 27\"".to_string(), "MacBook Air".to_string()]
    );
    assert_eq!(assets.search("").len(), assets.list().len());
    assert_eq!(assets.search("dm-2023")[0].name, "Dell Monitor 27\"");
}

#[test]
fn test_search_employees() {
    let mut state = seeded_state();
    let employees = state.employees();
    assert_eq!(employees.search("design")[0].name, "Mike Chen");
    assert_eq!(employees.search("@company.com").len(), 3);
    assert!(employees.search("finance").is_empty());
}

#[test]
fn test_employee_delete_releases_assets() {
    let mut state = seeded_state();
    let emma = state.repository().employees_get_by_name("Emma Davis").unwrap().id;
    assert_eq!(state.employees().holdings(emma).unwrap().len(), 2);

    state.employees().delete(emma);
    let repo = state.repository();
    assert!(repo.assets_held_by("Emma Davis").is_empty());
    let ipad = repo.assets_list().iter().find(|a| a.name == "iPad Pro").cloned().unwrap();
    assert_eq!(ipad.status, AssetStatus::Available);
}

#[test]
fn test_employee_form_errors_block_creation() {
    let mut state = empty_state();
    let err = state.employees().create(&EmployeeForm::default()).unwrap_err();
    match err {
        AppError::Validation(errors) => assert_eq!(errors.len(), 4),
        other => panic!("unexpected error: {other}"),
    }
    assert!(state.employees().list().is_empty());
}

#[test]
fn test_toasts() {
    let mut state = empty_state();
    let asset = state.assets().create(&asset_form("Jabra Evolve", "Headset", "JE-1")).unwrap();
    state.assets().delete(asset.id);
    let toasts = state.take_notifications();
    let titles: Vec<&str> = toasts.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Asset Added", "Asset Deleted"]);
    assert_eq!(toasts[0].description, "Jabra Evolve has been successfully added.");
    assert!(state.notifications().is_empty());
}

#[test]
fn test_rename_one_of_two_identical_assets() {
    let mut state = seeded_state();
    let first = state.assets().create(&asset_form("Wireless Mouse", "Mouse", "WM-1")).unwrap();
    let second = state.assets().create(&asset_form("Wireless Mouse", "Mouse", "WM-2")).unwrap();
    for id in [first.id, second.id] {
        state.assets().assign(id, &assignment("Sarah Johnson", "Engineering")).unwrap();
    }

    let mut form = AssetForm::from_asset(&first);
    form.name = "Logitech MX".to_string();
    state.assets().update(first.id, &form).unwrap();

    let sarah = state.repository().employees_get_by_name("Sarah Johnson").unwrap().clone();
    let mut listed = sarah.assigned_assets.clone();
    listed.sort();
    assert_eq!(listed, vec!["Logitech MX", "MacBook Pro 16\"", "Wireless Mouse"]);
    assert_holdings_consistent(&state);
}

#[test]
fn test_assignee_must_exist() {
    let mut state = seeded_state();
    let id: AssetId = "AST-002".parse().unwrap();

    let err = state.assets().assign(id, &assignment("Lisa Wang", "HR")).unwrap_err();
    assert!(err.field_errors().unwrap().contains("employeeName"));
    assert!(state.repository().assets_held_by("Lisa Wang").is_empty());

    state
        .employees()
        .create(&employee_form("Lisa Wang", "lisa.wang@company.com", "HR"))
        .unwrap();
    state.assets().assign(id, &assignment("Lisa Wang", "HR")).unwrap();
    let lisa = state.repository().employees_get_by_name("Lisa Wang").unwrap();
    assert_eq!(lisa.assigned_assets, vec!["Dell Monitor 27\"".to_string()]);
    assert_holdings_consistent(&state);
}

#[test]
fn test_employee_names_are_unique() {
    let mut state = seeded_state();
    let err = state
        .employees()
        .create(&employee_form("Mike Chen", "m.chen@company.com", "Design"))
        .unwrap_err();
    assert!(err.field_errors().unwrap().contains("name"));

    let emma = state.repository().employees_get_by_name("Emma Davis").unwrap().clone();
    let mut rename = EmployeeForm::from_employee(&emma);
    rename.name = "Sarah Johnson".to_string();
    assert!(state.employees().update(emma.id, &rename).is_err());
    assert_eq!(state.repository().assets_held_by("Emma Davis").len(), 2);
    assert_eq!(state.repository().employees_list().len(), 3);
    assert_holdings_consistent(&state);
}

#[test]
fn test_holdings_consistent_through_a_session() {
    let mut state = seeded_state();
    assert_holdings_consistent(&state);

    let monitor: AssetId = "AST-002".parse().unwrap();
    let laptop: AssetId = "AST-001".parse().unwrap();
    state.assets().assign(monitor, &assignment("Emma Davis", "Marketing")).unwrap();
    state.assets().assign(laptop, &assignment("Mike Chen", "Design")).unwrap();
    assert_holdings_consistent(&state);

    let mike = state.repository().employees_get_by_name("Mike Chen").unwrap().clone();
    let mut rename = EmployeeForm::from_employee(&mike);
    rename.name = "Michael Chen".to_string();
    state.employees().update(mike.id, &rename).unwrap();
    assert_holdings_consistent(&state);

    state.assets().send_to_maintenance(monitor);
    state.employees().delete(mike.id);
    assert_holdings_consistent(&state);
    assert!(state.repository().assets_held_by("Michael Chen").is_empty());
}
