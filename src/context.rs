//! Application Context
//!
//! Shared event bus provided via Leptos Context API.

use leptos::prelude::*;

/// Auth failure notifications broadcast by the login/register actions
#[derive(Clone, Debug, PartialEq)]
pub enum AuthEvent {
    FailedAuthentication(String),
    FailedRegistering(String),
}

impl AuthEvent {
    pub fn message(&self) -> &str {
        match self {
            AuthEvent::FailedAuthentication(msg) | AuthEvent::FailedRegistering(msg) => msg,
        }
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Latest auth failure, if any - read
    pub auth_event: ReadSignal<Option<AuthEvent>>,
    /// Latest auth failure - write
    set_auth_event: WriteSignal<Option<AuthEvent>>,
}

impl AppContext {
    pub fn new(
        auth_event: (ReadSignal<Option<AuthEvent>>, WriteSignal<Option<AuthEvent>>),
    ) -> Self {
        Self {
            auth_event: auth_event.0,
            set_auth_event: auth_event.1,
        }
    }

    /// Broadcast an auth failure to any listening view
    pub fn broadcast(&self, event: AuthEvent) {
        self.set_auth_event.set(Some(event));
    }

    /// Drop the pending auth failure
    pub fn clear_auth_event(&self) {
        self.set_auth_event.set(None);
    }
}
