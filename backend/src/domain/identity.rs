//! UUID-backed entity identities.
//!
//! An [`Identity`] is tagged with the entity type it identifies, so a
//! category id can never be passed where a genre id is expected. The same
//! type serves as primary key and as a foreign-key token held by other
//! aggregates.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use super::value_object::ValueObject;

/// Names the entity type an [`Identity`] belongs to.
pub trait IdentityKind: 'static {
    /// Human readable entity name used in error messages.
    const NAME: &'static str;
}

/// Raised when a raw identifier is not a valid UUID.
///
/// Kept distinct from entity validation failures so callers can tell a
/// malformed identifier apart from a business-rule violation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} id must be a valid UUID (got {value:?})")]
pub struct InvalidIdentityError {
    kind: &'static str,
    value: String,
}

impl InvalidIdentityError {
    /// Entity name the identifier was meant for.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// The rejected input.
    pub fn value(&self) -> &str {
        self.value.as_str()
    }
}

/// Stable entity identifier stored as a UUID.
///
/// ## Invariants
/// - The raw string is a parseable UUID without surrounding whitespace.
/// - The raw string is kept verbatim for round-tripping.
pub struct Identity<K> {
    uuid: Uuid,
    raw: String,
    kind: PhantomData<fn() -> K>,
}

impl<K: IdentityKind> Identity<K> {
    /// Validate and construct an identity from borrowed input.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidIdentityError`] when `id` is empty, padded with
    /// whitespace, or not a UUID.
    pub fn new(id: impl AsRef<str>) -> Result<Self, InvalidIdentityError> {
        Self::from_owned(id.as_ref().to_owned())
    }

    /// Generate a new random identity.
    pub fn generate() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    /// Wrap an already-parsed UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self {
            uuid,
            raw: uuid.to_string(),
            kind: PhantomData,
        }
    }

    fn from_owned(id: String) -> Result<Self, InvalidIdentityError> {
        let invalid = |value: String| InvalidIdentityError {
            kind: K::NAME,
            value,
        };
        if id.is_empty() || id.trim() != id {
            return Err(invalid(id));
        }
        match Uuid::parse_str(&id) {
            Ok(uuid) => Ok(Self {
                uuid,
                raw: id,
                kind: PhantomData,
            }),
            Err(_) => Err(invalid(id)),
        }
    }
}

impl<K> Clone for Identity<K> {
    fn clone(&self) -> Self {
        Self {
            uuid: self.uuid,
            raw: self.raw.clone(),
            kind: PhantomData,
        }
    }
}

impl<K: IdentityKind> fmt::Debug for Identity<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Id({})", K::NAME, self.raw)
    }
}

impl<K> PartialEq for Identity<K> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<K> Eq for Identity<K> {}

impl<K> Hash for Identity<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<K> PartialOrd for Identity<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K> Ord for Identity<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw.cmp(&other.raw)
    }
}

impl<K> AsRef<str> for Identity<K> {
    fn as_ref(&self) -> &str {
        self.raw.as_str()
    }
}

impl<K> fmt::Display for Identity<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl<K> From<Identity<K>> for String {
    fn from(value: Identity<K>) -> Self {
        value.raw
    }
}

impl<K: IdentityKind> TryFrom<String> for Identity<K> {
    type Error = InvalidIdentityError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

impl<K: IdentityKind> ValueObject for Identity<K> {
    type Value = Uuid;

    fn value(&self) -> Uuid {
        self.uuid
    }
}

impl<K> Serialize for Identity<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_ref())
    }
}

impl<'de, K: IdentityKind> Deserialize<'de> for Identity<K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer)?
            .try_into()
            .map_err(serde::de::Error::custom)
    }
}

/// Normalises raw identifiers and ready-made identities alike.
///
/// Aggregate factories accept either form for foreign keys.
pub trait IntoIdentity<K: IdentityKind> {
    /// Convert into a validated identity.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidIdentityError`] for malformed raw input.
    fn into_identity(self) -> Result<Identity<K>, InvalidIdentityError>;
}

impl<K: IdentityKind> IntoIdentity<K> for Identity<K> {
    fn into_identity(self) -> Result<Identity<K>, InvalidIdentityError> {
        Ok(self)
    }
}

impl<K: IdentityKind> IntoIdentity<K> for &Identity<K> {
    fn into_identity(self) -> Result<Identity<K>, InvalidIdentityError> {
        Ok(self.clone())
    }
}

impl<K: IdentityKind> IntoIdentity<K> for &str {
    fn into_identity(self) -> Result<Identity<K>, InvalidIdentityError> {
        Identity::new(self)
    }
}

impl<K: IdentityKind> IntoIdentity<K> for String {
    fn into_identity(self) -> Result<Identity<K>, InvalidIdentityError> {
        Identity::try_from(self)
    }
}

#[cfg(test)]
mod tests {
    //! Identity parsing and equality.

    use rstest::rstest;

    use super::*;

    enum Widget {}

    impl IdentityKind for Widget {
        const NAME: &'static str = "Widget";
    }

    enum Gadget {}

    impl IdentityKind for Gadget {
        const NAME: &'static str = "Gadget";
    }

    const RAW: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

    #[rstest]
    fn accepts_valid_uuid() {
        let id = Identity::<Widget>::new(RAW).expect("valid id");
        assert_eq!(id.as_ref(), RAW);
        assert_eq!(id.value(), Uuid::parse_str(RAW).expect("uuid"));
    }

    #[rstest]
    #[case::empty("")]
    #[case::padded(" 3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    #[case::garbage("fake id")]
    #[case::truncated("3fa85f64-5717-4562-b3fc")]
    fn rejects_invalid_input(#[case] raw: &str) {
        let err = Identity::<Widget>::new(raw).expect_err("invalid id");
        assert_eq!(err.kind(), "Widget");
        assert_eq!(err.value(), raw);
        assert!(err.to_string().contains("Widget id must be a valid UUID"));
    }

    #[rstest]
    fn generated_ids_are_distinct() {
        let first = Identity::<Widget>::generate();
        let second = Identity::<Widget>::generate();
        assert_ne!(first, second);
        assert!(Identity::<Widget>::new(first.as_ref()).is_ok());
    }

    #[rstest]
    fn equality_is_by_value() {
        let left = Identity::<Widget>::new(RAW).expect("valid id");
        let right = Identity::<Widget>::new(RAW).expect("valid id");
        assert!(left.equals(Some(&right)));
        assert!(!left.equals(None));
        assert!(!left.equals(Some(&Identity::generate())));
    }

    #[rstest]
    fn raw_and_typed_inputs_normalise_alike() {
        let typed = Identity::<Gadget>::new(RAW).expect("valid id");
        let from_raw: Identity<Gadget> = RAW.into_identity().expect("raw converts");
        let from_typed = (&typed).into_identity().expect("typed converts");
        assert_eq!(from_raw, typed);
        assert_eq!(from_typed, typed);
    }

    #[rstest]
    fn serde_round_trips_as_string() {
        let id = Identity::<Widget>::new(RAW).expect("valid id");
        let json = serde_json::to_value(&id).expect("serialise");
        assert_eq!(json, serde_json::json!(RAW));

        let invalid = serde_json::from_value::<Identity<Widget>>(serde_json::json!("nope"));
        assert!(invalid.is_err());
    }
}
