use std::sync::Arc;

use deepsea_console::config::{FieldKey, ModuleCatalog, ModuleId, ModuleOutputs};
use deepsea_console::input::command::*;
use deepsea_console::state::{Credentials, TabId, View};
use deepsea_console::{ConsoleError, ConsoleState, SessionSnapshot};

fn signed_in() -> ConsoleState {
    let catalog = ModuleCatalog::builtin().expect("builtin catalog");
    let mut state = ConsoleState::new(Arc::new(catalog));
    state
        .apply(&LoginCommand(Credentials::new("operator", "secret")))
        .expect("login");
    state
}

fn open(state: &mut ConsoleState, module: u32) -> TabId {
    let snapshot = state
        .apply(&OpenModuleCommand(ModuleId(module)))
        .expect("open module");
    snapshot.active_tab_id.expect("active tab")
}

fn has_run(snapshot: &SessionSnapshot, id: TabId) -> bool {
    snapshot
        .tabs
        .iter()
        .find(|t| t.id == id)
        .map(|t| t.has_run)
        .expect("tab present")
}

#[test]
fn run_then_edit_goes_stale() {
    let mut state = signed_in();
    let tab = open(&mut state, 1);

    state
        .apply(&UpdateFieldCommand {
            tab_id: tab,
            field: "class".to_string(),
            value: "Class Alpha".to_string(),
        })
        .unwrap();
    let snapshot = state.apply(&RunCommand(tab)).unwrap();

    assert!(has_run(&snapshot, tab));
    assert_eq!(
        snapshot.active.as_ref().and_then(|a| a.outputs.clone()),
        Some(ModuleOutputs {
            graph: "/assets/graph1.png".to_string(),
            table: "/assets/table1.png".to_string(),
        })
    );

    let snapshot = state
        .apply(&UpdateFieldCommand {
            tab_id: tab,
            field: "class".to_string(),
            value: "Class Beta".to_string(),
        })
        .unwrap();
    assert!(!has_run(&snapshot, tab));
    assert_eq!(snapshot.active.and_then(|a| a.outputs), None);
}

#[test]
fn every_module_exposes_its_configured_inputs() {
    let mut state = signed_in();
    let expected = [
        (1, vec![FieldKey::Class, FieldKey::Name, FieldKey::Year]),
        (2, vec![FieldKey::Class, FieldKey::Name, FieldKey::Year, FieldKey::Mtu]),
        (3, vec![FieldKey::Class, FieldKey::Name]),
        (4, vec![FieldKey::Class, FieldKey::Year]),
        (5, vec![FieldKey::Mtu, FieldKey::Year]),
        (6, vec![FieldKey::Class, FieldKey::Name, FieldKey::Mtu]),
    ];

    for (module, inputs) in expected {
        let tab = open(&mut state, module);
        let snapshot = state.snapshot();
        let active = snapshot.active.expect("active view");
        assert_eq!(active.tab_id, tab);
        assert_eq!(active.required_inputs, inputs, "module {}", module);
    }
}

#[test]
fn back_to_back_tabs_get_distinct_ids() {
    let mut state = signed_in();
    let ids: Vec<_> = (0..5).map(|_| open(&mut state, 2)).collect();

    let mut deduped = ids.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), ids.len());
}

#[test]
fn closing_sole_tab_returns_to_dashboard() {
    let mut state = signed_in();
    let tab = open(&mut state, 4);

    let snapshot = state.apply(&CloseTabCommand(tab)).unwrap();
    assert!(snapshot.tabs.is_empty());
    assert_eq!(snapshot.active_tab_id, None);
    assert_eq!(snapshot.active, None);
    assert_eq!(snapshot.current_view, View::Dashboard);
}

#[test]
fn closing_inactive_tab_keeps_active() {
    let mut state = signed_in();
    let a = open(&mut state, 1);
    let b = open(&mut state, 2);

    let snapshot = state.apply(&CloseTabCommand(a)).unwrap();
    assert_eq!(snapshot.active_tab_id, Some(b));
    assert_eq!(snapshot.current_view, View::Analysis);
}

#[test]
fn closing_active_tab_selects_most_recent_survivor() {
    let mut state = signed_in();
    let _a = open(&mut state, 1);
    let b = open(&mut state, 2);
    let c = open(&mut state, 3);

    let snapshot = state.apply(&CloseTabCommand(c)).unwrap();
    assert_eq!(snapshot.active_tab_id, Some(b));
}

#[test]
fn logout_resets_everything() {
    for open_tabs in 0..3 {
        let mut state = signed_in();
        for _ in 0..open_tabs {
            open(&mut state, 6);
        }

        let snapshot = state.apply(&LogoutCommand).unwrap();
        assert_eq!(snapshot.current_view, View::Login);
        assert!(!snapshot.is_logged_in);
        assert_eq!(snapshot.username, None);
        assert!(snapshot.tabs.is_empty());
        assert_eq!(snapshot.active_tab_id, None);
    }
}

#[test]
fn logout_from_login_screen_is_harmless() {
    let catalog = ModuleCatalog::builtin().unwrap();
    let mut state = ConsoleState::new(Arc::new(catalog));
    let snapshot = state.apply(&LogoutCommand).unwrap();
    assert_eq!(snapshot.current_view, View::Login);
}

#[test]
fn unknown_module_leaves_state_unchanged() {
    let mut state = signed_in();
    open(&mut state, 1);
    state.apply(&NavigateToDashboardCommand).unwrap();
    let before = state.snapshot();

    assert_eq!(
        state.apply(&OpenModuleCommand(ModuleId(99))),
        Err(ConsoleError::UnknownModule(ModuleId(99)))
    );
    assert_eq!(state.snapshot(), before);
}

#[test]
fn rejected_tab_commands_leave_state_unchanged() {
    let mut state = signed_in();
    let tab = open(&mut state, 1);
    state.apply(&RunCommand(tab)).unwrap();
    let before = state.snapshot();
    let ghost = TabId(10_000);

    assert_eq!(state.apply(&CloseTabCommand(ghost)), Err(ConsoleError::UnknownTab(ghost)));
    assert_eq!(state.apply(&SetActiveTabCommand(ghost)), Err(ConsoleError::UnknownTab(ghost)));
    assert_eq!(state.apply(&RunCommand(ghost)), Err(ConsoleError::UnknownTab(ghost)));
    assert_eq!(
        state.apply(&UpdateFieldCommand {
            tab_id: tab,
            field: "depth".to_string(),
            value: "deep".to_string(),
        }),
        Err(ConsoleError::InvalidFieldKey("depth".to_string()))
    );

    assert_eq!(state.snapshot(), before);
}

#[test]
fn staleness_is_per_tab() {
    let mut state = signed_in();
    let a = open(&mut state, 1);
    let b = open(&mut state, 3);
    state.apply(&RunCommand(a)).unwrap();
    state.apply(&RunCommand(b)).unwrap();

    let snapshot = state
        .apply(&UpdateFieldCommand {
            tab_id: b,
            field: "name".to_string(),
            value: "INS Kalvari".to_string(),
        })
        .unwrap();

    assert!(has_run(&snapshot, a));
    assert!(!has_run(&snapshot, b));
}

#[test]
fn snapshot_serializes_for_inspection() {
    let mut state = signed_in();
    let tab = open(&mut state, 5);
    state
        .apply(&UpdateFieldCommand {
            tab_id: tab,
            field: "mtu".to_string(),
            value: "MTU-X".to_string(),
        })
        .unwrap();

    let json = serde_json::to_value(state.snapshot()).unwrap();
    assert_eq!(json["current_view"], "Analysis");
    assert_eq!(json["tabs"][0]["form_data"]["mtu"], "MTU-X");
    assert!(json["tabs"][0]["form_data"]["class"].is_null());
    assert_eq!(json["active"]["required_inputs"], serde_json::json!(["mtu", "year"]));
}
