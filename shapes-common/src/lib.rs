#![warn(clippy::missing_docs_in_private_items)]
#![warn(clippy::missing_const_for_fn)]

//! Data exchanged between the Shapes client and the account API

use serde::{Deserialize, Serialize};

pub mod validation;

/// Sign-in details. Only ever held in memory while a form is being filled in.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Details of a new account
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

impl Registration {
    /// The email/password subset used to sign in once the account exists
    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

/// Account as returned by the API
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub username: String,
    pub email: String,
}

/// Proof of login returned by a successful sign-in. The client only cares that one exists, the
/// token is forwarded as a bearer token and never inspected.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
}
