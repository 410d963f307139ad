//! Port used by genre use cases to confirm referenced categories exist.

use async_trait::async_trait;

use crate::domain::{Category, CategoryId};

use super::{ExistsById, RepositoryError};

/// Read-only existence check over stored categories.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryExistence: Send + Sync {
    /// Partition `ids` into stored and missing categories.
    async fn categories_exist(
        &self,
        ids: &[CategoryId],
    ) -> Result<ExistsById<Category>, RepositoryError>;
}
