use common::{
    error::ValidationErrors,
    validation::{FieldValues, Rule, Schema},
};
use strum::{EnumIter, IntoStaticStr};

use crate::{Credentials, Registration};

/// Minimum number of characters of a password
pub const PASSWORD_MIN_LENGTH: usize = 8;
/// Minimum number of characters of a name or username
pub const NAME_MIN_LENGTH: usize = 2;

pub const INVALID_EMAIL: &str = "Invalid email";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters.";
pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters.";
pub const USERNAME_TOO_SHORT: &str = "Username must be at least 2 characters.";

/// Inputs of the sign-in form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum SignInField {
    Email,
    Password,
}

/// Inputs of the sign-up form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum SignUpField {
    Name,
    Username,
    Email,
    Password,
}

/// Schema of the sign-in form, producing [Credentials]
#[derive(Debug, Clone, Copy, Default)]
pub struct SigninValidation;

impl Schema for SigninValidation {
    type Field = SignInField;
    type Output = Credentials;

    fn validate(
        values: &FieldValues<Self::Field>,
    ) -> Result<Self::Output, ValidationErrors<Self::Field>> {
        let mut errors = ValidationErrors::new();
        errors.check(values, SignInField::Email, Rule::Email, INVALID_EMAIL);
        errors.check(
            values,
            SignInField::Password,
            Rule::MinLength(PASSWORD_MIN_LENGTH),
            PASSWORD_TOO_SHORT,
        );
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Credentials {
            email: values.take(SignInField::Email),
            password: values.take(SignInField::Password),
        })
    }
}

/// Schema of the sign-up form, producing a [Registration]
#[derive(Debug, Clone, Copy, Default)]
pub struct SignupValidation;

impl Schema for SignupValidation {
    type Field = SignUpField;
    type Output = Registration;

    fn validate(
        values: &FieldValues<Self::Field>,
    ) -> Result<Self::Output, ValidationErrors<Self::Field>> {
        let mut errors = ValidationErrors::new();
        errors.check(
            values,
            SignUpField::Name,
            Rule::MinLength(NAME_MIN_LENGTH),
            NAME_TOO_SHORT,
        );
        errors.check(
            values,
            SignUpField::Username,
            Rule::MinLength(NAME_MIN_LENGTH),
            USERNAME_TOO_SHORT,
        );
        errors.check(values, SignUpField::Email, Rule::Email, INVALID_EMAIL);
        errors.check(
            values,
            SignUpField::Password,
            Rule::MinLength(PASSWORD_MIN_LENGTH),
            PASSWORD_TOO_SHORT,
        );
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Registration {
            name: values.take(SignUpField::Name),
            username: values.take(SignUpField::Username),
            email: values.take(SignUpField::Email),
            password: values.take(SignUpField::Password),
        })
    }
}
