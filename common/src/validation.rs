use std::{collections::HashMap, fmt::Debug, hash::Hash};

use lazy_regex::regex_is_match;
use strum::IntoEnumIterator;

use crate::error::ValidationErrors;

/// A named input of a form. Implemented for any field enum deriving strum's [EnumIter] and
/// [IntoStaticStr].
///
/// [EnumIter]: strum::EnumIter
/// [IntoStaticStr]: strum::IntoStaticStr
pub trait FormField: Debug + Copy + Eq + Hash + IntoEnumIterator + Into<&'static str> + 'static {
    /// Name of the field as used for the input's `name` and `id` attributes
    fn name(self) -> &'static str {
        self.into()
    }
}

impl<T> FormField for T where
    T: Debug + Copy + Eq + Hash + IntoEnumIterator + Into<&'static str> + 'static
{
}

/// Raw values entered into a form, keyed by field. Missing fields read as an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValues<F: FormField>(HashMap<F, String>);

impl<F: FormField> FieldValues<F> {
    /// Values with every field of `F` set to an empty string
    pub fn new() -> Self {
        Self(F::iter().map(|field| (field, String::new())).collect())
    }

    pub fn get(&self, field: F) -> &str {
        self.0.get(&field).map_or("", String::as_str)
    }

    pub fn set<S: Into<String>>(&mut self, field: F, value: S) {
        self.0.insert(field, value.into());
    }

    /// Owned copy of the value of `field`
    pub fn take(&self, field: F) -> String {
        self.get(field).to_owned()
    }
}

impl<F: FormField> Default for FieldValues<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FormField, S: Into<String>> FromIterator<(F, S)> for FieldValues<F> {
    fn from_iter<I: IntoIterator<Item = (F, S)>>(iter: I) -> Self {
        let mut values = Self::new();
        for (field, value) in iter {
            values.set(field, value);
        }
        values
    }
}

/// Single constraint a field value must satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// `local@domain.tld` with no whitespace, no leading dot and no consecutive dots
    Email,
    /// At least this many characters
    MinLength(usize),
}

impl Rule {
    /// Check the `value` against this rule. Values are checked exactly as entered.
    pub fn check(self, value: &str) -> bool {
        match self {
            Self::Email => {
                !value.starts_with('.')
                    && !value.contains("..")
                    && regex_is_match!(
                        r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$",
                        value
                    )
            }
            Self::MinLength(length) => value.chars().count() >= length,
        }
    }
}

impl<F> ValidationErrors<F>
where
    F: FormField,
{
    /// Check the value of `field` against `rule`, recording `message` if it fails
    pub fn check(&mut self, values: &FieldValues<F>, field: F, rule: Rule, message: &str) {
        if !rule.check(values.get(field)) {
            self.insert(field, message);
        }
    }
}

/// Schema mapping the raw values of a form to a validated output. Modeled as a pure function, no
/// state is kept between calls.
pub trait Schema {
    /// Fields of the form this schema validates
    type Field: FormField;
    /// Validated data produced when every field passes
    type Output;

    /// Validate all `values`, producing the output or the error of every failing field.
    /// # Errors
    /// This function will return an error if any field does not satisfy its rules
    fn validate(values: &FieldValues<Self::Field>) -> Result<Self::Output, ValidationErrors<Self::Field>>;
}
