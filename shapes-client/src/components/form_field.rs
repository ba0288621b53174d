use common::validation::{FormField, Schema};
use leptos::*;

use crate::form::FormState;

/// Labelled input bound to one field of a [FormState], with its validation message underneath
#[component]
pub fn FormInput<S>(
    cx: Scope,
    form: RwSignal<FormState<S>>,
    field: S::Field,
    label: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
) -> impl IntoView
where
    S: Schema + 'static,
{
    let name = field.name();
    view! { cx,
        <div class="form-group">
            <label class="shad-form_label" for=name>{label}</label>
            <input
                class="form-control shad-input"
                type=input_type.unwrap_or("text")
                id=name
                name=name
                prop:value=move || form.with(|f| f.value(field).to_owned())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.set_value(field, value));
                }
            />
            {move || {
                form.with(|f| f.error(field).map(str::to_owned))
                    .map(|err| view! { cx, <p class="shad-form_message">{err}</p> })
            }}
        </div>
    }
}

/// Submit button showing a loader while `busy`. The button stays clickable while busy.
#[component]
pub fn SubmitButton(cx: Scope, busy: Signal<bool>, label: &'static str) -> impl IntoView {
    view! { cx,
        <button type="submit" class="btn btn-primary shad-button_primary">
            {move || {
                if busy.get() {
                    view! { cx,
                        <div class="flex-center gap-2">
                            <span class="spinner-border spinner-border-sm" role="status"></span>
                            "Loading..."
                        </div>
                    }
                        .into_view(cx)
                } else {
                    label.into_view(cx)
                }
            }}
        </button>
    }
}
