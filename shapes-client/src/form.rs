//! Explicit form state driven by discrete input events.
//!
//! Validation re-runs synchronously on every change and on submit. Errors are shown for fields
//! the user has edited, and for every field once a submit has been attempted.

use std::{collections::HashSet, fmt::Debug, marker::PhantomData};

use common::{
    error::ValidationErrors,
    validation::{FieldValues, Schema},
};

pub struct FormState<S: Schema> {
    values: FieldValues<S::Field>,
    errors: ValidationErrors<S::Field>,
    dirty: HashSet<S::Field>,
    submitted: bool,
    schema: PhantomData<S>,
}

impl<S: Schema> FormState<S> {
    /// Form with every field empty
    pub fn new() -> Self {
        Self {
            values: FieldValues::new(),
            errors: ValidationErrors::new(),
            dirty: HashSet::new(),
            submitted: false,
            schema: PhantomData,
        }
    }

    pub fn value(&self, field: S::Field) -> &str {
        self.values.get(field)
    }

    /// Message to display under `field`, if any
    pub fn error(&self, field: S::Field) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn is_dirty(&self, field: S::Field) -> bool {
        self.dirty.contains(&field)
    }

    pub const fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// True if the current values pass the schema
    pub fn is_valid(&self) -> bool {
        S::validate(&self.values).is_ok()
    }

    /// Input event on `field`
    pub fn set_value<V: Into<String>>(&mut self, field: S::Field, value: V) {
        self.values.set(field, value);
        self.dirty.insert(field);
        self.revalidate();
    }

    /// Submit event. Returns the validated output to hand to the submit handler, or [None] when a
    /// field is invalid, in which case every failing field shows its message.
    pub fn handle_submit(&mut self) -> Option<S::Output> {
        self.submitted = true;
        match S::validate(&self.values) {
            Ok(output) => {
                self.errors = ValidationErrors::new();
                Some(output)
            }
            Err(errors) => {
                log::debug!("Submit blocked. {errors}");
                self.errors = errors;
                None
            }
        }
    }

    /// Restore the empty defaults, clearing errors, dirty flags and the submitted flag
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn revalidate(&mut self) {
        self.errors = match S::validate(&self.values) {
            Ok(_) => ValidationErrors::new(),
            Err(mut errors) => {
                if !self.submitted {
                    errors.retain(|field| self.dirty.contains(&field));
                }
                errors
            }
        };
    }
}

impl<S: Schema> Default for FormState<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Schema> Clone for FormState<S> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
            errors: self.errors.clone(),
            dirty: self.dirty.clone(),
            submitted: self.submitted,
            schema: PhantomData,
        }
    }
}

impl<S: Schema> Debug for FormState<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormState")
            .field("dirty", &self.dirty)
            .field("errors", &self.errors)
            .field("submitted", &self.submitted)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod test {
    use shapes_common::{
        validation::{
            SignInField, SignUpField, SigninValidation, SignupValidation, INVALID_EMAIL,
            PASSWORD_TOO_SHORT,
        },
        Credentials,
    };

    use super::FormState;

    #[test]
    fn new_form_should_be_empty_and_clean() {
        let form = FormState::<SigninValidation>::new();

        assert_eq!(form.value(SignInField::Email), "");
        assert_eq!(form.error(SignInField::Email), None);
        assert!(!form.is_dirty(SignInField::Email));
        assert!(!form.is_valid());
    }

    #[test]
    fn set_value_should_only_report_errors_for_edited_fields() {
        let mut form = FormState::<SigninValidation>::new();

        form.set_value(SignInField::Email, "jane@");

        assert_eq!(form.error(SignInField::Email), Some(INVALID_EMAIL));
        assert_eq!(form.error(SignInField::Password), None);
        assert!(form.is_dirty(SignInField::Email));
    }

    #[test]
    fn set_value_should_clear_error_once_fixed() {
        let mut form = FormState::<SigninValidation>::new();
        form.set_value(SignInField::Email, "jane@");

        form.set_value(SignInField::Email, "jane@example.com");

        assert_eq!(form.error(SignInField::Email), None);
    }

    #[test]
    fn handle_submit_should_block_invalid_values() {
        let mut form = FormState::<SigninValidation>::new();
        form.set_value(SignInField::Email, "a@b.com");
        form.set_value(SignInField::Password, "secret1");
        let mut handler_calls = 0;

        if form.handle_submit().is_some() {
            handler_calls += 1;
        }

        assert_eq!(handler_calls, 0);
        assert!(form.is_submitted());
        assert_eq!(form.error(SignInField::Password), Some(PASSWORD_TOO_SHORT));
        assert_eq!(form.value(SignInField::Password), "secret1");
    }

    #[test]
    fn handle_submit_should_show_errors_for_untouched_fields() {
        let mut form = FormState::<SignupValidation>::new();
        form.set_value(SignUpField::Name, "Jane Doe");

        let registration = form.handle_submit();

        assert!(registration.is_none());
        assert_eq!(form.error(SignUpField::Name), None);
        assert!(form.error(SignUpField::Username).is_some());
        assert!(form.error(SignUpField::Email).is_some());
        assert!(form.error(SignUpField::Password).is_some());
    }

    #[test]
    fn handle_submit_should_yield_exactly_the_entered_fields() {
        let mut form = FormState::<SigninValidation>::new();
        form.set_value(SignInField::Email, "a@b.com");
        form.set_value(SignInField::Password, "secret12");

        let credentials = form.handle_submit();

        assert_eq!(
            credentials,
            Some(Credentials {
                email: "a@b.com".to_owned(),
                password: "secret12".to_owned(),
            })
        );
    }

    #[test]
    fn reset_should_restore_defaults() {
        let mut form = FormState::<SigninValidation>::new();
        form.set_value(SignInField::Email, "a@b.com");
        form.handle_submit();

        form.reset();

        assert_eq!(form.value(SignInField::Email), "");
        assert!(!form.is_dirty(SignInField::Email));
        assert!(!form.is_submitted());
        assert_eq!(form.error(SignInField::Password), None);
    }
}
