// src/state/mod.rs
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::auth::{AcceptAnyCredentials, Authenticator};
use crate::config::{ModuleCatalog, ModuleId};
use crate::error::ConsoleError;
use crate::input::command::Command;

pub mod session;
pub mod snapshot;
pub mod ui_state;
pub mod view;

pub use session::{FormData, SessionManager, Tab, TabId};
pub use snapshot::{ActiveTabView, SessionSnapshot, TabSummary};
pub use ui_state::UiState;
pub use view::{Credentials, View, ViewController};

/// The one mutable aggregate behind the console: current view, signed-in user
/// and open tabs. Every handler validates before it mutates, so a rejected
/// command leaves the state exactly as it was.
pub struct ConsoleState {
    view: ViewController,
    sessions: SessionManager,
    authenticator: Box<dyn Authenticator>,
}

impl fmt::Debug for ConsoleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleState")
            .field("view", &self.view)
            .field("sessions", &self.sessions)
            .finish_non_exhaustive()
    }
}

impl ConsoleState {
    pub fn new(catalog: Arc<ModuleCatalog>) -> Self {
        Self {
            view: ViewController::new(),
            sessions: SessionManager::new(catalog),
            authenticator: Box::new(AcceptAnyCredentials),
        }
    }

    pub fn with_authenticator(mut self, authenticator: impl Authenticator + 'static) -> Self {
        self.authenticator = Box::new(authenticator);
        self
    }

    pub fn view(&self) -> &ViewController {
        &self.view
    }

    pub fn sessions(&self) -> &SessionManager {
        &self.sessions
    }

    pub fn catalog(&self) -> &ModuleCatalog {
        self.sessions.catalog()
    }

    /// Runs one command to completion and hands back the resulting read model.
    pub fn apply(&mut self, command: &dyn Command) -> Result<SessionSnapshot, ConsoleError> {
        match command.execute(self) {
            Ok(()) => Ok(self.snapshot()),
            Err(e) => {
                warn!(?command, error = %e, "command rejected");
                Err(e)
            }
        }
    }

    pub fn login(&mut self, credentials: Credentials) -> Result<(), ConsoleError> {
        if self.view.is_logged_in() {
            debug!(username = credentials.username(), "already signed in, ignoring login");
            return Ok(());
        }

        self.authenticator.authenticate(&credentials)?;
        let username = credentials.username().to_string();
        self.view.sign_in(credentials);
        info!(%username, "signed in");
        Ok(())
    }

    pub fn logout(&mut self) {
        let closed = self.sessions.tabs().len();
        self.sessions.clear_all();
        self.view.sign_out();
        info!(closed_tabs = closed, "signed out");
    }

    /// No-op while logged out.
    pub fn navigate_to_dashboard(&mut self) {
        if self.view.navigate_to_dashboard() {
            debug!("showing dashboard");
        }
    }

    /// Returns to the analysis workspace when there is at least one tab to show.
    pub fn resume_analysis(&mut self) {
        if self.sessions.is_empty() {
            return;
        }
        if self.view.enter_analysis() {
            debug!("showing analysis workspace");
        }
    }

    pub fn open_module(&mut self, module_id: ModuleId) -> Result<TabId, ConsoleError> {
        if !self.view.is_logged_in() {
            return Err(ConsoleError::NotLoggedIn);
        }

        let tab = self.sessions.create_tab(module_id)?;
        self.view.enter_analysis();
        info!(tab_id = %tab.id, module_id = %module_id, module = %tab.display_name, "opened module");
        Ok(tab.id)
    }

    pub fn close_tab(&mut self, tab_id: TabId) -> Result<(), ConsoleError> {
        self.sessions.close_tab(tab_id)?;
        info!(%tab_id, remaining = self.sessions.tabs().len(), "closed tab");

        if self.sessions.is_empty() {
            self.view.navigate_to_dashboard();
        }
        Ok(())
    }

    pub fn set_active_tab(&mut self, tab_id: TabId) -> Result<(), ConsoleError> {
        self.sessions.set_active_tab(tab_id)?;
        debug!(%tab_id, "switched tab");
        Ok(())
    }

    pub fn update_field(&mut self, tab_id: TabId, field: &str, value: &str) -> Result<(), ConsoleError> {
        self.sessions.update_field(tab_id, field, value)?;
        debug!(%tab_id, field, value, "updated field");
        Ok(())
    }

    pub fn run(&mut self, tab_id: TabId) -> Result<(), ConsoleError> {
        self.sessions.run(tab_id)?;
        debug!(%tab_id, "ran tab");
        Ok(())
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let tabs = self
            .sessions
            .tabs()
            .iter()
            .map(|tab| TabSummary {
                id: tab.id,
                module_id: tab.module_id,
                display_name: tab.display_name.clone(),
                form_data: tab.form_data.clone(),
                has_run: tab.has_run,
            })
            .collect();

        let active = self.sessions.active_tab().and_then(|tab| {
            let module = self.catalog().resolve(tab.module_id).ok()?;
            Some(ActiveTabView {
                tab_id: tab.id,
                required_inputs: module.inputs.clone(),
                outputs: tab.has_run.then(|| module.outputs.clone()),
            })
        });

        SessionSnapshot {
            current_view: self.view.current_view(),
            is_logged_in: self.view.is_logged_in(),
            username: self.view.username().map(str::to_string),
            tabs,
            active_tab_id: self.sessions.active_tab_id(),
            active,
        }
    }
}
