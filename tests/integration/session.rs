use assetdesk::{
    models::{Credentials, MenuSection, Role, Variant},
    AppError,
};

use crate::common::seeded_state;

#[test]
fn test_admin_login() {
    let mut state = seeded_state();
    let profile = state
        .auth()
        .login(&Credentials::new("admin@company.com", "password123"))
        .unwrap();
    assert_eq!(profile.role, Role::Admin);
    assert_eq!(state.current_user(), Some(&profile));

    let toast = state.take_notifications().pop().unwrap();
    assert_eq!(toast.title, "Login Successful");
    assert_eq!(toast.description, "Welcome back, John Admin!");
}

#[test]
fn test_wrong_password_fails() {
    let mut state = seeded_state();
    let err = state
        .auth()
        .login(&Credentials::new("admin@company.com", "letmein"))
        .unwrap_err();
    assert!(matches!(err, AppError::Authentication(_)));
    assert!(state.current_user().is_none());

    let toast = state.take_notifications().pop().unwrap();
    assert_eq!(toast.title, "Login Failed");
    assert_eq!(toast.variant, Variant::Destructive);
}

#[test]
fn test_department_head_menu() {
    let mut state = seeded_state();
    let profile = state
        .auth()
        .login(&Credentials::new("dept.head@company.com", "password123"))
        .unwrap();
    assert_eq!(
        profile.visible_sections(),
        vec![
            MenuSection::Dashboard,
            MenuSection::Assets,
            MenuSection::Employees,
            MenuSection::Reports,
        ]
    );
    assert!(state.auth().open_section(MenuSection::Employees).is_ok());
    assert!(matches!(
        state.auth().open_section(MenuSection::Departments),
        Err(AppError::Authorization(_))
    ));
}

#[test]
fn test_logout_clears_session() {
    let mut state = seeded_state();
    state
        .auth()
        .login(&Credentials::new("employee@company.com", "password123"))
        .unwrap();
    let profile = state.auth().logout().unwrap();
    assert_eq!(profile.name, "Bob Employee");
    assert!(state.current_user().is_none());
    assert_eq!(
        state.notifications().last().map(|n| n.title.as_str()),
        Some("Logged Out")
    );
}

#[test]
fn test_roles_do_not_gate_mutations() {
    let mut state = seeded_state();
    state
        .auth()
        .login(&Credentials::new("employee@company.com", "password123"))
        .unwrap();
    let id = "AST-003".parse().unwrap();
    assert!(state.assets().delete(id).is_some());
}
