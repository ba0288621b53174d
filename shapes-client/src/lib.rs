#![warn(clippy::expect_used)]
#![warn(clippy::manual_let_else)]
#![warn(clippy::missing_errors_doc)]
#![warn(clippy::needless_pass_by_value)]
#![warn(clippy::uninlined_format_args)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::use_self)]

//! Browser client of the Shapes sign-in and sign-up forms

pub mod api;
pub mod config;
pub mod flows;
pub mod form;
pub mod notify;
pub mod pending;
pub mod routes;
pub mod session;

#[cfg(feature = "csr")]
pub mod app;
#[cfg(feature = "csr")]
mod components;
#[cfg(feature = "csr")]
mod pages;

/// Install the browser console logger and panic hook. Logging is best effort, a failure to
/// install the logger leaves the application running without logs.
#[cfg(feature = "csr")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    if let Err(error) = console_log::init_with_level(log::Level::Debug) {
        leptos::error!("Could not start logging. {error}");
    }
}
