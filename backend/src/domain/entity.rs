//! Entity contract and the validated-mutation helper shared by entities.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use super::error::EntityValidationError;
use super::identity::{Identity, IdentityKind};
use super::validation::PropsValidator;

/// Mutable record keyed by a fixed [`Identity`].
///
/// The entity type doubles as the identity kind, so `Identity<Category>` is
/// the category key.
pub trait Entity: IdentityKind + Clone + Serialize + Send + Sync {
    /// Identity fixed for the entity's lifetime.
    fn entity_id(&self) -> &Identity<Self>;

    /// Creation timestamp, used as the default search order.
    fn created_at(&self) -> DateTime<Utc>;

    /// JSON projection: `id`, every declared property and `created_at`.
    ///
    /// # Errors
    ///
    /// Propagates serialisation failures from `serde_json`.
    fn to_json(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

/// Validate a freshly assembled property snapshot.
pub(crate) fn validate_props<P, V>(
    entity_kind: &'static str,
    props: &P,
) -> Result<(), EntityValidationError>
where
    V: PropsValidator<P>,
{
    V::validate(props).map_err(|errors| EntityValidationError::new(entity_kind, errors))
}

/// Apply `mutate` to a clone of `props`, validate the candidate and only
/// then assign it back.
///
/// On failure `props` is left exactly as it was.
pub(crate) fn commit_validated<P, V, R>(
    entity_kind: &'static str,
    props: &mut P,
    mutate: impl FnOnce(&mut P) -> R,
) -> Result<R, EntityValidationError>
where
    P: Clone,
    V: PropsValidator<P>,
{
    let mut candidate = props.clone();
    let outcome = mutate(&mut candidate);
    validate_props::<P, V>(entity_kind, &candidate)?;
    *props = candidate;
    Ok(outcome)
}
