//! Category entity.
//!
//! Categories are flat labels that genres group together. Every mutation
//! runs through the category rule-set so a stored category always has a
//! non-empty name of at most 255 characters.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::entity::{Entity, commit_validated, validate_props};
use super::error::EntityValidationError;
use super::identity::{Identity, IdentityKind};
use super::validation::{MaxLength, PropsValidator, Required, Validator};

/// Identity of a [`Category`].
pub type CategoryId = Identity<Category>;

/// Free-text name filter accepted by category searches.
pub type CategoryFilter = String;

/// Fields a category search may sort by.
pub const CATEGORY_SORTABLE_FIELDS: &[&str] = &["name", "created_at"];

const NAME_MAX_CHARS: usize = 255;

/// Input payload for [`Category::create`] and [`Category::restore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDraft {
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
}

impl CategoryDraft {
    /// Active category with no description.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            is_active: true,
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the activation flag.
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct CategoryProps {
    name: String,
    description: Option<String>,
    is_active: bool,
}

impl From<CategoryDraft> for CategoryProps {
    fn from(draft: CategoryDraft) -> Self {
        Self {
            name: draft.name,
            description: draft.description,
            is_active: draft.is_active,
        }
    }
}

struct CategoryRules;

impl PropsValidator<CategoryProps> for CategoryRules {
    fn rules(validator: &mut Validator, props: &CategoryProps) {
        validator
            .field("name", props.name.as_str())
            .rule(&Required)
            .rule(&MaxLength(NAME_MAX_CHARS));
    }
}

/// Catalogue category.
///
/// Serialises as `{id, name, description, is_active, created_at}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    id: CategoryId,
    #[serde(flatten)]
    props: CategoryProps,
    created_at: DateTime<Utc>,
}

impl Category {
    /// Validate and construct a new category with a fresh identity.
    ///
    /// # Errors
    ///
    /// Returns every violated rule when the draft is invalid.
    pub fn create(draft: CategoryDraft) -> Result<Self, EntityValidationError> {
        Self::restore(CategoryId::generate(), draft, Utc::now())
    }

    /// Rebuild a category from previously stored state.
    ///
    /// # Errors
    ///
    /// Returns every violated rule when the stored state is invalid.
    pub fn restore(
        id: CategoryId,
        draft: CategoryDraft,
        created_at: DateTime<Utc>,
    ) -> Result<Self, EntityValidationError> {
        let props = CategoryProps::from(draft);
        validate_props::<_, CategoryRules>(Self::NAME, &props)?;
        Ok(Self {
            id,
            props,
            created_at,
        })
    }

    pub fn id(&self) -> &CategoryId {
        &self.id
    }
    pub fn name(&self) -> &str {
        self.props.name.as_str()
    }
    pub fn description(&self) -> Option<&str> {
        self.props.description.as_deref()
    }
    pub fn is_active(&self) -> bool {
        self.props.is_active
    }

    /// Rename the category.
    ///
    /// # Errors
    ///
    /// Leaves the category unchanged when the new name is invalid.
    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), EntityValidationError> {
        let name = name.into();
        self.commit(|props| props.name = name)
    }

    /// Replace or clear the description.
    ///
    /// # Errors
    ///
    /// Leaves the category unchanged when the result is invalid.
    pub fn change_description(
        &mut self,
        description: Option<String>,
    ) -> Result<(), EntityValidationError> {
        self.commit(|props| props.description = description)
    }

    /// Rename and redescribe in one validated step.
    ///
    /// # Errors
    ///
    /// Leaves the category unchanged when any field is invalid.
    pub fn update(
        &mut self,
        name: impl Into<String>,
        description: Option<String>,
    ) -> Result<(), EntityValidationError> {
        let name = name.into();
        self.commit(|props| {
            props.name = name;
            props.description = description;
        })
    }

    pub fn activate(&mut self) {
        self.props.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.props.is_active = false;
    }

    fn commit(
        &mut self,
        mutate: impl FnOnce(&mut CategoryProps),
    ) -> Result<(), EntityValidationError> {
        commit_validated::<_, CategoryRules, _>(Self::NAME, &mut self.props, mutate)
    }
}

impl IdentityKind for Category {
    const NAME: &'static str = "Category";
}

impl Entity for Category {
    fn entity_id(&self) -> &CategoryId {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests;
