//! Record-to-entity converters shared by persistence adapters.
//!
//! A record that fails entity validation is corrupt stored data and is
//! reported as [`LoadEntityError`]. Any other failure, such as a malformed
//! identifier, propagates unchanged.

use tracing::warn;

use crate::domain::{
    CastMember, CastMemberDraft, CastMemberId, CastMemberType, CatalogError, Category,
    CategoryDraft, CategoryId, Entity, EntityValidationError, FieldsError, Genre, GenreDraft,
    GenreId, IdentityKind, LoadEntityError,
};

use super::models::{CastMemberRecord, CategoryRecord, GenreRecord};

/// Two-way mapping between a storage record and its entity.
pub trait EntityRecord: Sized {
    /// Entity the record stores.
    type Entity: Entity;

    /// Rebuild the entity from stored state.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Repository`] wrapping a [`LoadEntityError`]
    /// when the stored state violates entity rules, and any other
    /// reconstruction error unchanged.
    fn to_entity(self) -> Result<Self::Entity, CatalogError>;

    /// Capture the entity's current state.
    fn from_entity(entity: &Self::Entity) -> Self;
}

fn corrupt_record(id: &str, error: EntityValidationError) -> CatalogError {
    warn!(
        entity = error.entity_kind(),
        id,
        errors = %error.errors(),
        "stored record failed validation"
    );
    LoadEntityError::from(error).into()
}

impl EntityRecord for CategoryRecord {
    type Entity = Category;

    fn to_entity(self) -> Result<Category, CatalogError> {
        let id = CategoryId::new(&self.id)?;
        let draft = CategoryDraft {
            name: self.name,
            description: self.description,
            is_active: self.is_active,
        };
        Category::restore(id, draft, self.created_at)
            .map_err(|error| corrupt_record(&self.id, error))
    }

    fn from_entity(entity: &Category) -> Self {
        Self {
            id: entity.id().to_string(),
            name: entity.name().to_owned(),
            description: entity.description().map(ToOwned::to_owned),
            is_active: entity.is_active(),
            created_at: entity.created_at(),
        }
    }
}

impl EntityRecord for CastMemberRecord {
    type Entity = CastMember;

    fn to_entity(self) -> Result<CastMember, CatalogError> {
        let id = CastMemberId::new(&self.id)?;
        match CastMemberType::try_from(self.cast_member_type) {
            Ok(cast_member_type) => {
                let draft = CastMemberDraft::new(self.name, cast_member_type);
                CastMember::restore(id, draft, self.created_at)
                    .map_err(|error| corrupt_record(&self.id, error))
            }
            Err(type_error) => {
                // Report the bad code alongside any name violations.
                let mut errors = FieldsError::single("type", type_error.to_string());
                let probe = CastMemberDraft::new(self.name, CastMemberType::Director);
                if let Err(error) = CastMember::restore(id, probe, self.created_at) {
                    errors.merge(error.errors().clone());
                }
                Err(corrupt_record(
                    &self.id,
                    EntityValidationError::new(CastMember::NAME, errors),
                ))
            }
        }
    }

    fn from_entity(entity: &CastMember) -> Self {
        Self {
            id: entity.id().to_string(),
            name: entity.name().to_owned(),
            cast_member_type: i64::from(entity.cast_member_type().code()),
            created_at: entity.created_at(),
        }
    }
}

impl EntityRecord for GenreRecord {
    type Entity = Genre;

    fn to_entity(self) -> Result<Genre, CatalogError> {
        let id = GenreId::new(&self.id)?;
        let draft = GenreDraft::new(self.name, self.categories_id)?.with_active(self.is_active);
        Genre::restore(id, draft, self.created_at).map_err(|error| corrupt_record(&self.id, error))
    }

    fn from_entity(entity: &Genre) -> Self {
        Self {
            id: entity.id().to_string(),
            name: entity.name().to_owned(),
            categories_id: entity
                .categories_id()
                .iter()
                .map(ToString::to_string)
                .collect(),
            is_active: entity.is_active(),
            created_at: entity.created_at(),
        }
    }
}
