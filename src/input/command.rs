// src/input/command.rs
use std::fmt;

use crate::config::ModuleId;
use crate::error::ConsoleError;
use crate::state::{ConsoleState, Credentials, TabId};

pub trait Command: fmt::Debug {
    fn execute(&self, state: &mut ConsoleState) -> Result<(), ConsoleError>;
}

#[derive(Debug)]
pub struct LoginCommand(pub Credentials);
impl Command for LoginCommand {
    fn execute(&self, state: &mut ConsoleState) -> Result<(), ConsoleError> {
        state.login(self.0.clone())
    }
}

#[derive(Debug)]
pub struct LogoutCommand;
impl Command for LogoutCommand {
    fn execute(&self, state: &mut ConsoleState) -> Result<(), ConsoleError> {
        state.logout();
        Ok(())
    }
}

#[derive(Debug)]
pub struct NavigateToDashboardCommand;
impl Command for NavigateToDashboardCommand {
    fn execute(&self, state: &mut ConsoleState) -> Result<(), ConsoleError> {
        state.navigate_to_dashboard();
        Ok(())
    }
}

#[derive(Debug)]
pub struct ResumeAnalysisCommand;
impl Command for ResumeAnalysisCommand {
    fn execute(&self, state: &mut ConsoleState) -> Result<(), ConsoleError> {
        state.resume_analysis();
        Ok(())
    }
}

#[derive(Debug)]
pub struct OpenModuleCommand(pub ModuleId);
impl Command for OpenModuleCommand {
    fn execute(&self, state: &mut ConsoleState) -> Result<(), ConsoleError> {
        state.open_module(self.0).map(|_| ())
    }
}

#[derive(Debug)]
pub struct CloseTabCommand(pub TabId);
impl Command for CloseTabCommand {
    fn execute(&self, state: &mut ConsoleState) -> Result<(), ConsoleError> {
        state.close_tab(self.0)
    }
}

#[derive(Debug)]
pub struct SetActiveTabCommand(pub TabId);
impl Command for SetActiveTabCommand {
    fn execute(&self, state: &mut ConsoleState) -> Result<(), ConsoleError> {
        state.set_active_tab(self.0)
    }
}

#[derive(Debug)]
pub struct UpdateFieldCommand {
    pub tab_id: TabId,
    pub field: String,
    pub value: String,
}
impl Command for UpdateFieldCommand {
    fn execute(&self, state: &mut ConsoleState) -> Result<(), ConsoleError> {
        state.update_field(self.tab_id, &self.field, &self.value)
    }
}

#[derive(Debug)]
pub struct RunCommand(pub TabId);
impl Command for RunCommand {
    fn execute(&self, state: &mut ConsoleState) -> Result<(), ConsoleError> {
        state.run(self.0)
    }
}
