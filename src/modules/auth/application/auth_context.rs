// src/modules/auth/application/auth_context.rs

use std::sync::Arc;

use tracing::{error, info, warn};

use super::domain::entities::{LoginError, INCORRECT_PASSWORD_MESSAGE, LOGIN_FLAG_KEY};
use super::ports::outgoing::session_store::SessionStore;

/// Process-wide "admin is editing" flag plus the login modal state.
///
/// This is a UI affordance toggle only. Nothing that talks to the backend
/// consults it.
pub struct AuthContext {
    store: Arc<dyn SessionStore>,
    admin_password: String,
    is_logged_in: bool,
    show_login_modal: bool,
    login_error: Option<String>,
}

impl AuthContext {
    /// Restores the flag from the store; anything but `"true"` means logged out.
    pub fn restore(store: Arc<dyn SessionStore>, admin_password: impl Into<String>) -> Self {
        let is_logged_in = match store.get(LOGIN_FLAG_KEY) {
            Ok(value) => value.as_deref() == Some("true"),
            Err(e) => {
                warn!("Failed to read persisted login flag: {}", e);
                false
            }
        };

        Self {
            store,
            admin_password: admin_password.into(),
            is_logged_in,
            show_login_modal: false,
            login_error: None,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.is_logged_in
    }

    pub fn show_login_modal(&self) -> bool {
        self.show_login_modal
    }

    pub fn login_error(&self) -> Option<&str> {
        self.login_error.as_deref()
    }

    pub fn login(&mut self) {
        self.set_logged_in(true);
    }

    pub fn logout(&mut self) {
        self.set_logged_in(false);
    }

    pub fn open_login_modal(&mut self) {
        self.show_login_modal = true;
        self.login_error = None;
    }

    pub fn close_login_modal(&mut self) {
        self.show_login_modal = false;
        self.login_error = None;
    }

    /// Exact string compare against the configured admin password.
    pub fn submit_password(&mut self, password: &str) -> Result<(), LoginError> {
        if password != self.admin_password {
            self.login_error = Some(INCORRECT_PASSWORD_MESSAGE.to_string());
            return Err(LoginError::IncorrectPassword);
        }

        self.login();
        self.close_login_modal();
        Ok(())
    }

    fn set_logged_in(&mut self, value: bool) {
        self.is_logged_in = value;
        info!("Admin mode {}", if value { "enabled" } else { "disabled" });

        if let Err(e) = self.store.set(LOGIN_FLAG_KEY, &value.to_string()) {
            error!("Failed to persist login flag: {}", e);
        }
    }
}
