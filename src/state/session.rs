// src/state/session.rs
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::config::{FieldKey, FieldVocabulary, ModuleCatalog, ModuleId};
use crate::error::ConsoleError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TabId(pub u64);

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One selection slot per vocabulary field. `None` means unselected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormData(BTreeMap<FieldKey, Option<String>>);

impl FormData {
    pub fn unselected(vocabulary: &FieldVocabulary) -> Self {
        Self(vocabulary.keys().map(|key| (key, None)).collect())
    }

    pub fn get(&self, key: FieldKey) -> Option<&str> {
        self.0.get(&key).and_then(|v| v.as_deref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, Option<&str>)> {
        self.0.iter().map(|(k, v)| (*k, v.as_deref()))
    }

    fn set(&mut self, key: FieldKey, value: Option<String>) {
        self.0.insert(key, value);
    }
}

/// A single open module instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub id: TabId,
    pub module_id: ModuleId,
    pub display_name: String,
    pub form_data: FormData,
    /// True only while the resolved outputs reflect `form_data` as of the last run.
    pub has_run: bool,
}

/// Owns the open tabs in creation order and the active-tab pointer.
#[derive(Debug)]
pub struct SessionManager {
    catalog: Arc<ModuleCatalog>,
    tabs: Vec<Tab>,
    active_tab_id: Option<TabId>,
    next_tab_id: u64,
}

impl SessionManager {
    pub fn new(catalog: Arc<ModuleCatalog>) -> Self {
        Self {
            catalog,
            tabs: Vec::new(),
            active_tab_id: None,
            next_tab_id: 1,
        }
    }

    pub fn catalog(&self) -> &ModuleCatalog {
        &self.catalog
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn active_tab_id(&self) -> Option<TabId> {
        self.active_tab_id
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.active_tab_id.and_then(|id| self.tab(id))
    }

    pub fn tab(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    fn position(&self, id: TabId) -> Result<usize, ConsoleError> {
        self.tabs
            .iter()
            .position(|t| t.id == id)
            .ok_or(ConsoleError::UnknownTab(id))
    }

    pub fn create_tab(&mut self, module_id: ModuleId) -> Result<Tab, ConsoleError> {
        let module = self.catalog.resolve(module_id)?;

        // Ids are never reused, not even after clear_all.
        let id = TabId(self.next_tab_id);
        self.next_tab_id += 1;

        let tab = Tab {
            id,
            module_id,
            display_name: module.name.clone(),
            form_data: FormData::unselected(self.catalog.vocabulary()),
            has_run: false,
        };
        self.tabs.push(tab.clone());
        self.active_tab_id = Some(id);
        Ok(tab)
    }

    pub fn close_tab(&mut self, id: TabId) -> Result<(), ConsoleError> {
        let index = self.position(id)?;
        self.tabs.remove(index);

        if self.active_tab_id == Some(id) {
            // Most recently created survivor, not the neighbour of the closed tab.
            self.active_tab_id = self.tabs.last().map(|t| t.id);
        }
        Ok(())
    }

    pub fn set_active_tab(&mut self, id: TabId) -> Result<(), ConsoleError> {
        self.position(id)?;
        self.active_tab_id = Some(id);
        Ok(())
    }

    /// Stores the selection and marks the tab stale, even when the value is
    /// unchanged. An empty value clears the selection.
    pub fn update_field(&mut self, id: TabId, field: &str, value: &str) -> Result<(), ConsoleError> {
        let index = self.position(id)?;
        let key = self.catalog.vocabulary().parse_key(field)?;

        let value = (!value.is_empty()).then(|| value.to_string());
        let tab = &mut self.tabs[index];
        tab.form_data.set(key, value);
        tab.has_run = false;
        Ok(())
    }

    /// Required inputs are not checked; an incomplete form still runs.
    pub fn run(&mut self, id: TabId) -> Result<(), ConsoleError> {
        let index = self.position(id)?;
        self.tabs[index].has_run = true;
        Ok(())
    }

    pub fn clear_all(&mut self) {
        self.tabs.clear();
        self.active_tab_id = None;
    }
}
