use std::rc::Rc;

use leptos::*;
use leptos_router::*;
use shapes_common::{
    validation::{SignInField, SigninValidation},
    Credentials,
};

use super::{client_flows, AuthLayout};
use crate::{
    api::HttpAccountApi,
    components::{FormInput, SubmitButton, ToastQueue},
    form::FormState,
    routes::Page,
    session::SessionContext,
};

#[component]
pub fn SignIn(
    cx: Scope,
    api: Rc<HttpAccountApi>,
    session: Rc<SessionContext>,
    toasts: ToastQueue,
) -> impl IntoView {
    let authenticated = session.is_authenticated();
    let flows = client_flows(cx, api, session, toasts);
    let form = create_rw_signal(cx, FormState::<SigninValidation>::new());

    let sign_in = create_action(cx, move |credentials: &Credentials| {
        let flows = flows.clone();
        let credentials = credentials.clone();
        async move {
            let result = flows
                .sign_in(&credentials, move || form.update(FormState::reset))
                .await;
            if let Err(error) = result {
                log::error!("Unhandled error while signing in {}: {error}", credentials.email);
            }
        }
    });
    // an action counts its overlapping dispatches, so this covers every step of the flow
    let busy = Signal::derive(cx, move || sign_in.pending().get());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let mut credentials = None;
        form.update(|f| credentials = f.handle_submit());
        if let Some(credentials) = credentials {
            sign_in.dispatch(credentials);
        }
    };

    view! { cx,
        <AuthLayout authenticated=authenticated>
            <div class="sm:w-420 flex-center flex-col">
                <img src="/assets/images/logo.png" alt="logo"/>
                <h2 class="h3-bold md:h2-bold pt-5 sm:pt-12">"Sign in to your account"</h2>
                <p class="text-light-3 small-medium md:base-regular mt-2">
                    "To use Shapes, please enter your details"
                </p>
                <form on:submit=on_submit class="flex flex-col gap-5 w-full mt-4">
                    <FormInput form=form field=SignInField::Email label="Email"/>
                    <FormInput
                        form=form
                        field=SignInField::Password
                        label="Password"
                        input_type="password"
                    />
                    <SubmitButton busy=busy label="Sign in"/>
                    <p class="text-small-regular text-light-2 text-center mt-2">
                        "Don't have an account? "
                        <A href=Page::SignUp.path() class="text-primary-500 text-small-semibold ml-1">
                            "Sign up"
                        </A>
                    </p>
                </form>
            </div>
        </AuthLayout>
    }
}
