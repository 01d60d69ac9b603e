use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::api;
use crate::models::{LoginPayload, RegisterPayload, SessionUser};

/// Holds the authenticated identity for the lifetime of the app.
///
/// The identity starts unresolved: `current_user` is `None` until the
/// persisted-session check completes. Loading and clearing the data
/// store on sign-in/sign-out is driven by an observer effect in the
/// root component, not by this container.
#[derive(Clone, Copy)]
pub struct Session {
    user: Signal<Option<SessionUser>>,
    resolved: Signal<bool>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            user: Signal::new(None),
            resolved: Signal::new(false),
        }
    }

    pub fn current_user(&self) -> Option<SessionUser> {
        self.user.read().clone()
    }

    /// True once the persisted-session check has completed, whether or
    /// not it produced a user.
    pub fn resolved(&self) -> bool {
        *self.resolved.read()
    }

    /// Resolves the persisted session, if any. A failed lookup leaves
    /// the identity unresolved; there is no retry.
    pub async fn restore(mut self) {
        if let Ok(user) = api::get_me().await {
            self.user.set(Some(user));
        }
        self.resolved.set(true);
    }

    pub async fn sign_in(mut self, email: String, password: String) -> Result<(), String> {
        let user = api::login(LoginPayload { email, password }).await?;
        self.user.set(Some(user));
        Ok(())
    }

    /// Registration signs the new user in directly.
    pub async fn sign_up(mut self, email: String, password: String) -> Result<(), String> {
        let user = api::register(RegisterPayload { email, password }).await?;
        self.user.set(Some(user));
        Ok(())
    }

    /// The local identity is dropped even if the logout call fails;
    /// the cookie then expires server-side on its own.
    pub async fn sign_out(mut self) {
        if let Err(e) = api::logout().await {
            warn!("logout request failed: {}", e);
        }
        self.user.set(None);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
