//! Side effects a flow can request from the UI: transient notifications and route changes.

#[cfg(test)]
use mockall::automock;

/// Sink for toast notifications. Fire and forget, nothing is reported back.
#[cfg_attr(test, automock)]
pub trait Toaster {
    fn toast(&self, title: &str);
}

/// Imperative route change
#[cfg_attr(test, automock)]
pub trait Navigator {
    fn navigate(&self, path: &str);
}
