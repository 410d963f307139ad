//! Domain primitives and aggregates.
//!
//! Purpose: Define the catalogue entities together with the substrate they
//! share: typed identities, declarative validation, the repository and
//! search ports, and the error taxonomy surfaced to adapters.
//!
//! Public surface:
//! - Category, CastMember, Genre: catalogue entities and their drafts.
//! - Identity and IdentitySet: UUID keys and keyed foreign-key sets.
//! - FieldsError, Validator, PropsValidator: aggregated validation.
//! - CatalogError and ErrorCode: transport-agnostic failures.

pub mod cast_member;
pub mod category;
pub mod category_existence_service;
pub mod either;
pub mod entity;
pub mod error;
pub mod genre;
pub mod identity;
pub mod identity_set;
pub mod ports;
pub mod validation;
pub mod value_object;

pub use self::cast_member::{
    CAST_MEMBER_SORTABLE_FIELDS, CastMember, CastMemberDraft, CastMemberFilter, CastMemberId,
    CastMemberType,
};
pub use self::category::{
    CATEGORY_SORTABLE_FIELDS, Category, CategoryDraft, CategoryFilter, CategoryId,
};
pub use self::category_existence_service::CategoryExistenceService;
pub use self::either::EitherExt;
pub use self::entity::Entity;
pub use self::error::{
    CatalogError, EntityValidationError, ErrorCode, InvalidArgumentError, LoadEntityError,
    NotFoundError, SearchValidationError,
};
pub use self::genre::{GENRE_SORTABLE_FIELDS, Genre, GenreDraft, GenreFilter, GenreId};
pub use self::identity::{Identity, IdentityKind, IntoIdentity, InvalidIdentityError};
pub use self::identity_set::{IdentitySet, SetDiff};
pub use self::validation::{FieldsError, PropsValidator, Validator};
pub use self::value_object::ValueObject;
