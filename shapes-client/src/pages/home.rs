use std::rc::Rc;

use leptos::*;
use leptos_router::*;

use crate::{routes::Page, session::SessionContext};

#[component]
pub fn Home(cx: Scope, session: Rc<SessionContext>) -> impl IntoView {
    view! { cx,
        <h2>"Shapes"</h2>
        {match session.user() {
            Some(user) => {
                view! { cx, <p>"You are logged in as " {user.name} "."</p> }
                    .into_view(cx)
            }
            None => {
                view! { cx,
                    <p>"You are not logged in."</p>
                    <A href=Page::SignIn.path()>"Sign in now."</A>
                }
                    .into_view(cx)
            }
        }}
    }
}
