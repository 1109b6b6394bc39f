// src/auth.rs
use crate::error::ConsoleError;
use crate::state::Credentials;

/// Credential check consulted on sign-in. The console ships without one; swap in
/// a real implementation through `ConsoleState::with_authenticator`.
pub trait Authenticator {
    fn authenticate(&self, credentials: &Credentials) -> Result<(), ConsoleError>;
}

/// Accepts any username and password, including empty ones.
#[derive(Debug, Default, Clone, Copy)]
pub struct AcceptAnyCredentials;

impl Authenticator for AcceptAnyCredentials {
    fn authenticate(&self, _credentials: &Credentials) -> Result<(), ConsoleError> {
        Ok(())
    }
}
