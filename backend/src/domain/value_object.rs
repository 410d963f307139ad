//! Value object contract.
//!
//! Value objects are immutable once constructed: they expose no setters and
//! no interior mutability, so any two instances that compare equal stay
//! equal for their whole lifetime.

use std::fmt;

/// Immutable wrapper around a primitive or structured value.
///
/// Equality is structural and provided by `PartialEq`; distinct value
/// object types never compare equal because the type system keeps them
/// apart.
///
/// # Examples
///
/// ```
/// use catalog::domain::{CategoryId, ValueObject};
///
/// let id = CategoryId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6")?;
/// let same = CategoryId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6")?;
/// assert!(id.equals(Some(&same)));
/// assert!(!id.equals(None));
/// # Ok::<(), catalog::domain::InvalidIdentityError>(())
/// ```
pub trait ValueObject: Clone + PartialEq + fmt::Debug {
    /// Primitive projection of the wrapped value.
    type Value: PartialEq + fmt::Debug;

    /// Project the wrapped value to its primitive representation.
    fn value(&self) -> Self::Value;

    /// Deep value equality; an absent counterpart is never equal.
    fn equals(&self, other: Option<&Self>) -> bool {
        other.is_some_and(|candidate| candidate == self)
    }
}
