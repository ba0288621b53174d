use std::{collections::HashMap, fmt::Debug, hash::Hash};

use thiserror::Error;

/// Field level validation errors of a form. Each field holds at most one message, the first rule
/// it failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Validation failed for {} field(s)", .0.len())]
pub struct ValidationErrors<F: Debug + Eq + Hash>(HashMap<F, String>);

impl<F> ValidationErrors<F>
where
    F: Debug + Eq + Hash + Copy,
{
    /// Create an empty set of errors
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Record `message` against `field` unless the field already failed a previous rule
    pub fn insert<S: Into<String>>(&mut self, field: F, message: S) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    /// Message recorded for `field`, if any
    pub fn get(&self, field: F) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: F) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Keep only the errors of fields matching `predicate`
    pub fn retain<P>(&mut self, mut predicate: P)
    where
        P: FnMut(F) -> bool,
    {
        self.0.retain(|field, _| predicate(*field));
    }
}

impl<F> Default for ValidationErrors<F>
where
    F: Debug + Eq + Hash + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}
