use std::cell::{Cell, RefCell};

use shapes_common::User;

use crate::{api::AccountApi, pending::PendingGuard};

/// Authenticated session state of the current browser tab. Created once by the app and passed
/// explicitly to every page and flow that needs it.
#[derive(Debug, Default)]
pub struct SessionContext {
    user: RefCell<Option<User>>,
    is_authenticated: Cell<bool>,
    /// Session checks in flight
    is_loading: Cell<usize>,
}

impl SessionContext {
    /// Ask the API for the user of the current session. On success the user is stored and the
    /// session marked authenticated. Errors are logged and reported as not logged in.
    pub async fn check_auth_user<A>(&self, api: &A) -> bool
    where
        A: AccountApi + ?Sized,
    {
        let _loading = PendingGuard::new(&self.is_loading);
        match api.current_user().await {
            Ok(Some(user)) => {
                log::debug!("Session belongs to {}", user.username);
                self.user.replace(Some(user));
                self.is_authenticated.set(true);
                true
            }
            Ok(None) => false,
            Err(error) => {
                log::error!("Could not check the current session. {error}");
                false
            }
        }
    }

    pub fn user(&self) -> Option<User> {
        self.user.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated.get()
    }

    /// True while a session check is in flight
    pub fn is_loading(&self) -> bool {
        self.is_loading.get() > 0
    }
}
