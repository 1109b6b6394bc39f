// src/state/view.rs
use serde::Serialize;
use std::fmt;

// Top-level screen tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum View {
    Login,
    Dashboard,
    Analysis,
}

/// Username and password as typed into the sign-in form. Dropped on logout.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Tracks which screen is showing and who is signed in. Being signed in is the
/// same thing as holding credentials.
#[derive(Debug)]
pub struct ViewController {
    view: View,
    credentials: Option<Credentials>,
}

impl Default for ViewController {
    fn default() -> Self {
        Self {
            view: View::Login,
            credentials: None,
        }
    }
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_view(&self) -> View {
        self.view
    }

    pub fn is_logged_in(&self) -> bool {
        self.credentials.is_some()
    }

    pub fn username(&self) -> Option<&str> {
        self.credentials.as_ref().map(Credentials::username)
    }

    /// Returns false when a user is already signed in; the existing session is kept.
    pub(crate) fn sign_in(&mut self, credentials: Credentials) -> bool {
        if self.is_logged_in() {
            return false;
        }
        self.credentials = Some(credentials);
        self.view = View::Dashboard;
        true
    }

    pub(crate) fn sign_out(&mut self) {
        self.credentials = None;
        self.view = View::Login;
    }

    pub fn navigate_to_dashboard(&mut self) -> bool {
        if !self.is_logged_in() {
            return false;
        }
        self.view = View::Dashboard;
        true
    }

    pub(crate) fn enter_analysis(&mut self) -> bool {
        if !self.is_logged_in() {
            return false;
        }
        self.view = View::Analysis;
        true
    }
}
