//! Category existence domain service.
//!
//! Genre use cases call this before persisting a genre so that every
//! referenced category is known to exist.

use std::sync::Arc;

use tracing::debug;

use crate::domain::ports::CategoryExistence;
use crate::domain::{Category, CatalogError, CategoryId, Genre, IdentityKind, NotFoundError};

/// Verifies category references against the category store.
#[derive(Clone)]
pub struct CategoryExistenceService<C> {
    categories: Arc<C>,
}

impl<C> CategoryExistenceService<C> {
    /// Create a service backed by `categories`.
    pub fn new(categories: Arc<C>) -> Self {
        Self { categories }
    }
}

impl<C: CategoryExistence> CategoryExistenceService<C> {
    /// Fail unless every id in `ids` names a stored category.
    ///
    /// # Errors
    ///
    /// Returns a not-found error listing all missing ids, or the port's
    /// error unchanged.
    pub async fn ensure_categories_exist(&self, ids: &[CategoryId]) -> Result<(), CatalogError> {
        let partition = self.categories.categories_exist(ids).await?;
        if partition.all_exist() {
            return Ok(());
        }
        debug!(
            missing = partition.not_exists.len(),
            "genre references unknown categories"
        );
        Err(NotFoundError::new(Category::NAME, &partition.not_exists).into())
    }

    /// Fail unless every category `genre` references is stored.
    ///
    /// # Errors
    ///
    /// As [`Self::ensure_categories_exist`].
    pub async fn ensure_genre_categories_exist(&self, genre: &Genre) -> Result<(), CatalogError> {
        let ids: Vec<CategoryId> = genre.categories_id().iter().cloned().collect();
        self.ensure_categories_exist(&ids).await
    }
}

#[cfg(test)]
#[path = "category_existence_service_tests.rs"]
mod tests;
