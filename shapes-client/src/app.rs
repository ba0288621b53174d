use std::rc::Rc;

use leptos::*;
use leptos_router::*;

use crate::{
    api::HttpAccountApi,
    components::{ToastQueue, Toasts},
    config::ClientConfig,
    pages::{home::Home, sign_in::SignIn, sign_up::SignUp},
    routes::Page,
    session::SessionContext,
};

#[component]
pub fn App(cx: Scope, config: ClientConfig) -> impl IntoView {
    let api = Rc::new(HttpAccountApi::new(config));
    let session = Rc::new(SessionContext::default());
    let toasts = ToastQueue::new(cx);

    let home_session = Rc::clone(&session);
    let sign_in_api = Rc::clone(&api);
    let sign_in_session = Rc::clone(&session);
    view! { cx,
        <Router>
            <main class="flex h-screen">
                <Routes>
                    <Route
                        path=Page::Home.path()
                        view=move |cx| view! { cx, <Home session=Rc::clone(&home_session)/> }
                    />
                    <Route
                        path=Page::SignIn.path()
                        view=move |cx| {
                            view! { cx,
                                <SignIn
                                    api=Rc::clone(&sign_in_api)
                                    session=Rc::clone(&sign_in_session)
                                    toasts=toasts
                                />
                            }
                        }
                    />
                    <Route
                        path=Page::SignUp.path()
                        view=move |cx| {
                            view! { cx,
                                <SignUp
                                    api=Rc::clone(&api)
                                    session=Rc::clone(&session)
                                    toasts=toasts
                                />
                            }
                        }
                    />
                </Routes>
            </main>
            <Toasts queue=toasts/>
        </Router>
    }
}
