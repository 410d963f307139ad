//! Domain-level error types.
//!
//! These errors are transport agnostic. Inbound adapters map them to
//! protocol-specific envelopes using the stable [`ErrorCode`].

use serde::{Deserialize, Serialize};

use super::identity::InvalidIdentityError;
use super::ports::{RepositoryError, StoreError};
use super::validation::FieldsError;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The input is malformed or fails validation.
    InvalidRequest,
    /// The requested entity does not exist.
    NotFound,
    /// The store rejected a write that clashes with existing data.
    Conflict,
    /// An unexpected error occurred, including corrupt stored data.
    InternalError,
}

/// Malformed low-level input such as a bad identifier or an unknown code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidArgumentError {
    /// An identifier is not a valid UUID.
    #[error(transparent)]
    Identity(#[from] InvalidIdentityError),
    /// A cast member type code is not recognised.
    #[error("cast member type must be 1 (director) or 2 (actor) (got {value})")]
    CastMemberType {
        /// The rejected code.
        value: i64,
    },
}

/// One or more business-rule violations on an entity's properties.
///
/// Always carries every violation found, never just the first.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity_kind} validation failed: {errors}")]
pub struct EntityValidationError {
    entity_kind: &'static str,
    errors: FieldsError,
}

impl EntityValidationError {
    /// Wrap the aggregated violations for `entity_kind`.
    pub fn new(entity_kind: &'static str, errors: FieldsError) -> Self {
        Self {
            entity_kind,
            errors,
        }
    }

    /// Entity the violations belong to.
    pub fn entity_kind(&self) -> &'static str {
        self.entity_kind
    }

    /// Every violation keyed by property.
    pub fn errors(&self) -> &FieldsError {
        &self.errors
    }
}

/// Search input that cannot be honoured, e.g. a filter naming a malformed id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("search parameters are invalid: {errors}")]
pub struct SearchValidationError {
    errors: FieldsError,
}

impl SearchValidationError {
    /// Wrap the aggregated violations.
    pub fn new(errors: FieldsError) -> Self {
        Self { errors }
    }

    /// Every violation keyed by search field.
    pub fn errors(&self) -> &FieldsError {
        &self.errors
    }
}

/// One or more identities are absent from the store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity_kind} not found using id {}", .ids.join(", "))]
pub struct NotFoundError {
    entity_kind: &'static str,
    ids: Vec<String>,
}

impl NotFoundError {
    /// Report missing `ids` of `entity_kind`.
    pub fn new<I, S>(entity_kind: &'static str, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            entity_kind,
            ids: ids.into_iter().map(|id| id.as_ref().to_owned()).collect(),
        }
    }

    /// Entity that was looked up.
    pub fn entity_kind(&self) -> &'static str {
        self.entity_kind
    }

    /// Identifiers that could not be found.
    pub fn ids(&self) -> &[String] {
        self.ids.as_slice()
    }
}

/// A stored record failed entity reconstruction.
///
/// Distinguishes corrupt stored data from fresh invalid input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to load {entity_kind} from storage: {errors}")]
pub struct LoadEntityError {
    entity_kind: &'static str,
    errors: FieldsError,
}

impl LoadEntityError {
    /// Wrap the violations found while rebuilding `entity_kind`.
    pub fn new(entity_kind: &'static str, errors: FieldsError) -> Self {
        Self {
            entity_kind,
            errors,
        }
    }

    /// Entity that failed to load.
    pub fn entity_kind(&self) -> &'static str {
        self.entity_kind
    }

    /// Every violation keyed by property.
    pub fn errors(&self) -> &FieldsError {
        &self.errors
    }
}

impl From<EntityValidationError> for LoadEntityError {
    fn from(value: EntityValidationError) -> Self {
        Self::new(value.entity_kind, value.errors)
    }
}

/// Any failure surfaced by the catalogue core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Malformed low-level input.
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgumentError),
    /// Entity properties violate business rules.
    #[error(transparent)]
    Validation(#[from] EntityValidationError),
    /// Search input cannot be honoured.
    #[error(transparent)]
    Search(#[from] SearchValidationError),
    /// Repository lookups, stored-data corruption and store failures.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl CatalogError {
    /// Stable machine-readable code for adapters.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidArgument(_) | Self::Validation(_) | Self::Search(_) => {
                ErrorCode::InvalidRequest
            }
            Self::Repository(RepositoryError::NotFound(_)) => ErrorCode::NotFound,
            Self::Repository(RepositoryError::Store(StoreError::Conflict { .. })) => {
                ErrorCode::Conflict
            }
            Self::Repository(RepositoryError::Load(_) | RepositoryError::Store(_)) => {
                ErrorCode::InternalError
            }
        }
    }
}

impl From<InvalidIdentityError> for CatalogError {
    fn from(value: InvalidIdentityError) -> Self {
        Self::InvalidArgument(value.into())
    }
}

impl From<NotFoundError> for CatalogError {
    fn from(value: NotFoundError) -> Self {
        Self::Repository(value.into())
    }
}

impl From<LoadEntityError> for CatalogError {
    fn from(value: LoadEntityError) -> Self {
        Self::Repository(value.into())
    }
}
