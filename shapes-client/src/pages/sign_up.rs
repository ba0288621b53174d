use std::rc::Rc;

use leptos::*;
use leptos_router::*;
use shapes_common::{
    validation::{SignUpField, SignupValidation},
    Registration,
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
pub fn SignUp(
    cx: Scope,
    api: Rc<HttpAccountApi>,
    session: Rc<SessionContext>,
    toasts: ToastQueue,
) -> impl IntoView {
    let authenticated = session.is_authenticated();
    let flows = client_flows(cx, api, session, toasts);
    let form = create_rw_signal(cx, FormState::<SignupValidation>::new());

    let sign_up = create_action(cx, move |registration: &Registration| {
        let flows = flows.clone();
        let registration = registration.clone();
        async move {
            let outcome = flows
                .sign_up(&registration, move || form.update(FormState::reset))
                .await;
            log::debug!("Sign up finished with {outcome:?}");
        }
    });
    // an action counts its overlapping dispatches, so this covers every step of the flow
    let busy = Signal::derive(cx, move || sign_up.pending().get());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let mut registration = None;
        form.update(|f| registration = f.handle_submit());
        if let Some(registration) = registration {
            sign_up.dispatch(registration);
        }
    };

    view! { cx,
        <AuthLayout authenticated=authenticated>
            <div class="sm:w-420 flex-center flex-col">
                <img src="/assets/images/logo.png" alt="logo"/>
                <h2 class="h3-bold md:h2-bold pt-5 sm:pt-12">"Create a new account"</h2>
                <p class="text-light-3 small-medium md:base-regular mt-2">
                    "To use Shapes, please enter your details"
                </p>
                <form on:submit=on_submit class="flex flex-col gap-5 w-full mt-4">
                    <FormInput form=form field=SignUpField::Name label="Name"/>
                    <FormInput form=form field=SignUpField::Username label="Username"/>
                    <FormInput form=form field=SignUpField::Email label="Email"/>
                    <FormInput
                        form=form
                        field=SignUpField::Password
                        label="Password"
                        input_type="password"
                    />
                    <SubmitButton busy=busy label="Sign up"/>
                    <p class="text-small-regular text-light-2 text-center mt-2">
                        "Already have an account? "
                        <A href=Page::SignIn.path() class="text-primary-500 text-small-semibold ml-1">
                            "Sign in"
                        </A>
                    </p>
                </form>
            </div>
        </AuthLayout>
    }
}
