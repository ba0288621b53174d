/// Pages of the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    SignIn,
    SignUp,
}

impl Page {
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::SignIn => "/sign-in",
            Self::SignUp => "/sign-up",
        }
    }
}

#[cfg(feature = "csr")]
pub use router::RouterNavigator;

#[cfg(feature = "csr")]
mod router {
    use std::rc::Rc;

    use leptos::Scope;
    use leptos_router::{use_navigate, NavigateOptions, NavigationError};

    use crate::notify::Navigator;

    /// Boxed navigate function returned by the router
    type NavigateFn = dyn Fn(&str, NavigateOptions) -> Result<(), NavigationError>;

    /// [Navigator] backed by the leptos router. Must be created within a `<Router>`.
    #[derive(Clone)]
    pub struct RouterNavigator {
        /// Navigate function of the enclosing router
        navigate: Rc<NavigateFn>,
    }

    impl RouterNavigator {
        pub fn new(cx: Scope) -> Self {
            Self {
                navigate: Rc::new(use_navigate(cx)),
            }
        }
    }

    impl Navigator for RouterNavigator {
        fn navigate(&self, path: &str) {
            if let Err(error) = (self.navigate)(path, NavigateOptions::default()) {
                log::error!("Could not navigate to {path}. {error:?}");
            }
        }
    }
}
