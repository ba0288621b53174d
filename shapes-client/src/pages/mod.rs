pub mod home;
pub mod sign_in;
pub mod sign_up;

use std::rc::Rc;

use leptos::*;
use leptos_router::*;

use crate::{
    api::HttpAccountApi,
    components::ToastQueue,
    flows::AuthFlows,
    routes::{Page, RouterNavigator},
    session::SessionContext,
};

/// Flows as wired in the browser
type ClientFlows = AuthFlows<HttpAccountApi, ToastQueue, RouterNavigator>;

/// Bind the flows to the router of the current page
fn client_flows(
    cx: Scope,
    api: Rc<HttpAccountApi>,
    session: Rc<SessionContext>,
    toasts: ToastQueue,
) -> ClientFlows {
    AuthFlows::new(api, session, toasts, RouterNavigator::new(cx))
}

/// Frame of the sign-in and sign-up pages. Sends an already authenticated user home.
#[component]
pub fn AuthLayout(cx: Scope, authenticated: bool, children: Children) -> impl IntoView {
    if authenticated {
        return view! { cx, <Redirect path=Page::Home.path()/> }.into_view(cx);
    }
    view! { cx,
        <section class="flex flex-1 justify-center items-center flex-col py-10">
            {children(cx)}
        </section>
        <img
            src="/assets/images/side-img.svg"
            alt="logo"
            class="hidden xl:block h-screen w-1/2 object-cover bg-no-repeat"
        />
    }
    .into_view(cx)
}
