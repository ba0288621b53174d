use std::time::Duration;

use leptos::*;
use uuid::Uuid;

use crate::notify::Toaster;

/// How long a toast stays up unless closed earlier
const TOAST_LIFETIME: Duration = Duration::from_secs(5);

/// Toast waiting to be dismissed or to expire
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastMessage {
    id: Uuid,
    title: String,
}

/// Reactive stack of toasts shown in the corner of the page
#[derive(Clone, Copy)]
pub struct ToastQueue {
    toasts: RwSignal<Vec<ToastMessage>>,
}

impl ToastQueue {
    pub fn new(cx: Scope) -> Self {
        Self {
            toasts: create_rw_signal(cx, Vec::new()),
        }
    }

    fn dismiss(self, id: Uuid) {
        self.toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
    }
}

impl Toaster for ToastQueue {
    fn toast(&self, title: &str) {
        let toast = ToastMessage {
            id: Uuid::new_v4(),
            title: title.to_owned(),
        };
        let id = toast.id;
        self.toasts.update(|toasts| toasts.push(toast));
        let queue = *self;
        set_timeout(move || queue.dismiss(id), TOAST_LIFETIME);
    }
}

#[component]
pub fn Toasts(cx: Scope, queue: ToastQueue) -> impl IntoView {
    view! { cx,
        <div class="toast-container top-0 end-0 p-3" id="toasts">
            <For
                each=move || queue.toasts.get()
                key=|toast| toast.id
                view=move |cx, toast: ToastMessage| {
                    let id = toast.id;
                    view! { cx,
                        <div class="toast fade show" role="alert" aria-live="assertive" aria-atomic="true">
                            <div class="toast-header">
                                <strong class="me-auto">"Shapes"</strong>
                                <button
                                    type="button"
                                    class="btn-close"
                                    aria-label="Close"
                                    on:click=move |_| queue.dismiss(id)
                                ></button>
                            </div>
                            <div class="toast-body">{toast.title}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}
