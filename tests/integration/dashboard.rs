use assetdesk::{
    models::{ActivityKind, AssetId, AssignmentForm},
    services::AlertReason,
};

use crate::common::{asset_form, employee_form, empty_state, seeded_state, today};

#[test]
fn test_stats_track_mutations() {
    let mut state = empty_state();
    assert_eq!(state.dashboard().stats().total_assets, 0);

    state
        .employees()
        .create(&employee_form("Lisa Wang", "lisa.wang@company.com", "HR"))
        .unwrap();
    let asset = state.assets().create(&asset_form("Pixel 8", "Phone", "PX-8")).unwrap();
    let stats = state.dashboard().stats();
    assert_eq!(stats.total_assets, 1);
    assert_eq!(stats.available_assets, 1);

    state
        .assets()
        .assign(
            asset.id,
            &AssignmentForm {
                employee_name: "Lisa Wang".to_string(),
                department: "HR".to_string(),
                assignment_date: today().to_string(),
            },
        )
        .unwrap();
    let stats = state.dashboard().stats();
    assert_eq!(stats.assigned_assets, 1);
    assert_eq!(stats.available_assets, 0);
    assert_eq!(stats.active_employees, 1);
}

#[test]
fn test_recent_activity_newest_first() {
    let mut state = seeded_state();
    let monitor: AssetId = "AST-002".parse().unwrap();
    let laptop: AssetId = "AST-001".parse().unwrap();

    let mut form = state.assets().assignment_form();
    state.assets().pick_assignee(&mut form, "Mike Chen");
    state.assets().assign(monitor, &form).unwrap();
    state.assets().return_asset(laptop);
    state.assets().send_to_maintenance(monitor);

    let kinds: Vec<ActivityKind> = state
        .dashboard()
        .recent_activity(10)
        .into_iter()
        .map(|a| a.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![ActivityKind::Maintenance, ActivityKind::Return, ActivityKind::Assignment]
    );

    let latest = state.dashboard().recent_activity(2);
    let returned = &latest[1];
    assert_eq!(returned.employee.as_deref(), Some("Sarah Johnson"));
    assert_eq!(returned.kind.status_label(), "returned");
}

#[test]
fn test_snapshot_serializes() {
    let state = seeded_state();
    let snapshot = state.dashboard().snapshot(5);
    assert!(snapshot
        .alerts
        .iter()
        .any(|a| a.asset_name == "Wireless Mouse" && a.reason == AlertReason::InMaintenance));

    let value = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(value["stats"]["total_assets"], 6);
    assert!(value["recent_activity"].as_array().unwrap().is_empty());
}
