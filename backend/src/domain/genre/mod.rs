//! Genre aggregate.
//!
//! A genre owns the set of category identities it groups. The set is keyed
//! by identity value, so membership is unique, and it must never be empty:
//! every mutator works on a clone, validates the candidate and only then
//! commits it.

use chrono::{DateTime, Utc};
use pagination::{SearchFilter, coerce_text};
use serde::Serialize;
use serde_json::Value;

use super::category::{Category, CategoryId};
use super::either::EitherExt;
use super::entity::{Entity, commit_validated, validate_props};
use super::error::{EntityValidationError, SearchValidationError};
use super::identity::{Identity, IdentityKind, IntoIdentity, InvalidIdentityError};
use super::identity_set::{IdentitySet, SetDiff};
use super::validation::{FieldsError, MaxLength, NotEmpty, PropsValidator, Required, Validator};

/// Identity of a [`Genre`].
pub type GenreId = Identity<Genre>;

/// Fields a genre search may sort by.
pub const GENRE_SORTABLE_FIELDS: &[&str] = &["name", "created_at"];

const NAME_MAX_CHARS: usize = 255;

/// Input payload for [`Genre::create`] and [`Genre::restore`].
///
/// Category references are normalised into a keyed set on construction, so
/// raw strings and built identities are accepted alike and duplicates
/// collapse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreDraft {
    pub name: String,
    pub categories_id: IdentitySet<Category>,
    pub is_active: bool,
}

impl GenreDraft {
    /// Active genre referencing `categories_id`.
    ///
    /// # Errors
    ///
    /// Returns the first malformed category identifier.
    pub fn new<I>(name: impl Into<String>, categories_id: I) -> Result<Self, InvalidIdentityError>
    where
        I: IntoIterator,
        I::Item: IntoIdentity<Category>,
    {
        let ids = Ok(categories_id.into_iter().collect::<Vec<_>>())
            .chain_each(|raw| raw.into_identity())?;
        Ok(Self {
            name: name.into(),
            categories_id: ids.into_iter().collect(),
            is_active: true,
        })
    }

    /// Set the activation flag.
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct GenreProps {
    name: String,
    categories_id: IdentitySet<Category>,
    is_active: bool,
}

struct GenreRules;

impl PropsValidator<GenreProps> for GenreRules {
    fn rules(validator: &mut Validator, props: &GenreProps) {
        validator
            .field("name", props.name.as_str())
            .rule(&Required)
            .rule(&MaxLength(NAME_MAX_CHARS));
        validator
            .field("categories_id", &props.categories_id)
            .rule(&NotEmpty);
    }
}

/// Genre grouping one or more categories.
///
/// Serialises as `{id, name, categories_id, is_active, created_at}` with
/// `categories_id` as a list of id strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Genre {
    id: GenreId,
    #[serde(flatten)]
    props: GenreProps,
    created_at: DateTime<Utc>,
}

impl Genre {
    /// Validate and construct a new genre with a fresh identity.
    ///
    /// # Errors
    ///
    /// Returns every violated rule, including an empty category set.
    pub fn create(draft: GenreDraft) -> Result<Self, EntityValidationError> {
        Self::restore(GenreId::generate(), draft, Utc::now())
    }

    /// Rebuild a genre from previously stored state.
    ///
    /// # Errors
    ///
    /// Returns every violated rule when the stored state is invalid.
    pub fn restore(
        id: GenreId,
        draft: GenreDraft,
        created_at: DateTime<Utc>,
    ) -> Result<Self, EntityValidationError> {
        let props = GenreProps {
            name: draft.name,
            categories_id: draft.categories_id,
            is_active: draft.is_active,
        };
        validate_props::<_, GenreRules>(Self::NAME, &props)?;
        Ok(Self {
            id,
            props,
            created_at,
        })
    }

    pub fn id(&self) -> &GenreId {
        &self.id
    }
    pub fn name(&self) -> &str {
        self.props.name.as_str()
    }
    pub fn categories_id(&self) -> &IdentitySet<Category> {
        &self.props.categories_id
    }
    pub fn is_active(&self) -> bool {
        self.props.is_active
    }

    /// Rename the genre.
    ///
    /// # Errors
    ///
    /// Leaves the genre unchanged when the new name is invalid.
    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), EntityValidationError> {
        let name = name.into();
        self.commit(|props| props.name = name)
    }

    pub fn activate(&mut self) {
        self.props.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.props.is_active = false;
    }

    /// Reference another category. Re-adding a member changes nothing.
    ///
    /// Returns whether the category was newly added.
    ///
    /// # Errors
    ///
    /// Leaves the genre unchanged when the result is invalid.
    pub fn add_category_id(&mut self, id: CategoryId) -> Result<bool, EntityValidationError> {
        self.commit(|props| props.categories_id.insert(id))
    }

    /// Drop a category reference.
    ///
    /// Returns whether the category was a member.
    ///
    /// # Errors
    ///
    /// Removing the last category fails and leaves the set untouched.
    pub fn remove_category_id(&mut self, id: &CategoryId) -> Result<bool, EntityValidationError> {
        self.commit(|props| props.categories_id.remove(id))
    }

    /// Replace the category set wholesale.
    ///
    /// An empty `ids` is a no-op; this path never clears the set. Returns
    /// whether the replacement was applied.
    ///
    /// # Errors
    ///
    /// Leaves the genre unchanged when the result is invalid.
    pub fn update_categories_id(
        &mut self,
        ids: impl IntoIterator<Item = CategoryId>,
    ) -> Result<bool, EntityValidationError> {
        self.commit(|props| props.categories_id.replace(ids))
    }

    /// Make the category set exactly `ids`, removing stale members before
    /// adding new ones.
    ///
    /// An empty `ids` is a no-op. Syncing with the current members changes
    /// nothing.
    ///
    /// # Errors
    ///
    /// Leaves the genre unchanged when the result is invalid.
    pub fn sync_categories(
        &mut self,
        ids: impl IntoIterator<Item = CategoryId>,
    ) -> Result<SetDiff<Category>, EntityValidationError> {
        self.commit(|props| props.categories_id.sync(ids))
    }

    fn commit<R>(
        &mut self,
        mutate: impl FnOnce(&mut GenreProps) -> R,
    ) -> Result<R, EntityValidationError> {
        commit_validated::<_, GenreRules, _>(Self::NAME, &mut self.props, mutate)
    }
}

impl IdentityKind for Genre {
    const NAME: &'static str = "Genre";
}

impl Entity for Genre {
    fn entity_id(&self) -> &GenreId {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Genre search filter; populated parts combine with AND.
///
/// Parsed from `{"name": .., "categories_id": [..]}`. A genre matches the
/// category part when it references any listed category. A bare scalar
/// filters by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenreFilter {
    pub name: Option<String>,
    pub categories_id: Option<Vec<CategoryId>>,
}

impl GenreFilter {
    fn is_empty(&self) -> bool {
        self.name.is_none() && self.categories_id.is_none()
    }
}

impl SearchFilter for GenreFilter {
    type Error = SearchValidationError;

    fn parse(raw: &Value) -> Result<Option<Self>, Self::Error> {
        let filter = match raw {
            Value::Object(fields) => Self {
                name: fields.get("name").and_then(coerce_text),
                categories_id: fields
                    .get("categories_id")
                    .map(parse_category_ids)
                    .transpose()?
                    .flatten(),
            },
            scalar => Self {
                name: coerce_text(scalar),
                categories_id: None,
            },
        };
        Ok((!filter.is_empty()).then_some(filter))
    }
}

/// Convert raw category references, reporting every malformed one.
///
/// `null`, `""` and `[]` mean no category filter. Nested arrays and objects
/// are reported as malformed ids.
fn parse_category_ids(raw: &Value) -> Result<Option<Vec<CategoryId>>, SearchValidationError> {
    let texts: Vec<String> = match raw {
        Value::Array(values) => values.iter().filter_map(category_id_text).collect(),
        single => category_id_text(single).into_iter().collect(),
    };
    if texts.is_empty() {
        return Ok(None);
    }
    Ok(texts)
        .collect_each(CategoryId::new)
        .map(Some)
        .map_err(|failures| {
            let mut errors = FieldsError::new();
            for failure in failures {
                errors.add("categories_id", failure.to_string());
            }
            SearchValidationError::new(errors)
        })
}

fn category_id_text(value: &Value) -> Option<String> {
    match value {
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
        scalar => coerce_text(scalar),
    }
}

#[cfg(test)]
mod tests;
