// src/state/snapshot.rs
use serde::Serialize;

use super::session::{FormData, TabId};
use super::view::View;
use crate::config::{FieldKey, ModuleId, ModuleOutputs};

/// Read model handed to the presentation layer after every command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub current_view: View,
    pub is_logged_in: bool,
    pub username: Option<String>,
    pub tabs: Vec<TabSummary>,
    pub active_tab_id: Option<TabId>,
    pub active: Option<ActiveTabView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabSummary {
    pub id: TabId,
    pub module_id: ModuleId,
    pub display_name: String,
    pub form_data: FormData,
    pub has_run: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActiveTabView {
    pub tab_id: TabId,
    pub required_inputs: Vec<FieldKey>,
    /// Present only once the tab has been run against its current inputs.
    pub outputs: Option<ModuleOutputs>,
}

impl SessionSnapshot {
    pub fn active_tab(&self) -> Option<&TabSummary> {
        let id = self.active_tab_id?;
        self.tabs.iter().find(|t| t.id == id)
    }
}
