//! Entity-specific filter parsing.

use std::convert::Infallible;

use serde_json::Value;

use crate::input::coerce_text;

/// Filter shape accepted by a searchable repository.
///
/// Implementations turn the raw `filter` request value into a typed filter.
/// Returning `Ok(None)` means "no filtering"; returning an error means the
/// caller supplied a filter that cannot be honoured.
pub trait SearchFilter: Sized {
    /// Error raised for malformed filters.
    type Error;

    /// Parse the raw filter value.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] when the value cannot describe a filter.
    fn parse(raw: &Value) -> Result<Option<Self>, Self::Error>;
}

/// Free-text filter: scalars are coerced to text, empty values disable it.
impl SearchFilter for String {
    type Error = Infallible;

    fn parse(raw: &Value) -> Result<Option<Self>, Self::Error> {
        Ok(coerce_text(raw))
    }
}
