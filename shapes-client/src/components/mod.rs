mod form_field;
mod toast;

pub use form_field::{FormInput, SubmitButton};
pub use toast::{ToastQueue, Toasts};
