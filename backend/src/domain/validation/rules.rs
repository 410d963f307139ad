//! Reusable property rules.

use std::collections::BTreeMap;

/// A single check against a property value.
pub trait Rule<T: ?Sized> {
    /// Return the violation message for `field`, or `None` when satisfied.
    fn check(&self, field: &str, value: &T) -> Option<String>;
}

/// Text must not be empty.
#[derive(Debug, Clone, Copy)]
pub struct Required;

impl Rule<str> for Required {
    fn check(&self, field: &str, value: &str) -> Option<String> {
        value
            .is_empty()
            .then(|| format!("{field} should not be empty"))
    }
}

/// Text must not exceed the given number of characters.
#[derive(Debug, Clone, Copy)]
pub struct MaxLength(pub usize);

impl Rule<str> for MaxLength {
    fn check(&self, field: &str, value: &str) -> Option<String> {
        let Self(max) = *self;
        (value.chars().count() > max)
            .then(|| format!("{field} must be shorter than or equal to {max} characters"))
    }
}

/// Text must contain at least the given number of characters.
#[derive(Debug, Clone, Copy)]
pub struct MinLength(pub usize);

impl Rule<str> for MinLength {
    fn check(&self, field: &str, value: &str) -> Option<String> {
        let Self(min) = *self;
        (value.chars().count() < min)
            .then(|| format!("{field} must be longer than or equal to {min} characters"))
    }
}

/// Collections that can report emptiness.
pub trait HasLen {
    /// Number of members.
    fn len(&self) -> usize;

    /// Whether there are no members.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> HasLen for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<T> HasLen for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<K, V> HasLen for BTreeMap<K, V> {
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}

/// Collection must hold at least one member.
#[derive(Debug, Clone, Copy)]
pub struct NotEmpty;

impl<C: HasLen + ?Sized> Rule<C> for NotEmpty {
    fn check(&self, field: &str, value: &C) -> Option<String> {
        value
            .is_empty()
            .then(|| format!("{field} should not be empty"))
    }
}
