//! Cast member entity and its search filter.

use std::num::FpCategory;

use chrono::{DateTime, Utc};
use pagination::{SearchFilter, coerce_text};
use serde::Serialize;
use serde_json::Value;

use super::entity::{Entity, commit_validated, validate_props};
use super::error::{EntityValidationError, SearchValidationError};
use super::identity::{Identity, IdentityKind};
use super::validation::{FieldsError, MaxLength, PropsValidator, Required, Validator};

mod cast_member_type;

pub use cast_member_type::CastMemberType;

/// Identity of a [`CastMember`].
pub type CastMemberId = Identity<CastMember>;

/// Fields a cast member search may sort by.
pub const CAST_MEMBER_SORTABLE_FIELDS: &[&str] = &["name", "created_at"];

const NAME_MAX_CHARS: usize = 255;

/// Input payload for [`CastMember::create`] and [`CastMember::restore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastMemberDraft {
    pub name: String,
    pub cast_member_type: CastMemberType,
}

impl CastMemberDraft {
    pub fn new(name: impl Into<String>, cast_member_type: CastMemberType) -> Self {
        Self {
            name: name.into(),
            cast_member_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct CastMemberProps {
    name: String,
    #[serde(rename = "type")]
    cast_member_type: CastMemberType,
}

struct CastMemberRules;

impl PropsValidator<CastMemberProps> for CastMemberRules {
    fn rules(validator: &mut Validator, props: &CastMemberProps) {
        validator
            .field("name", props.name.as_str())
            .rule(&Required)
            .rule(&MaxLength(NAME_MAX_CHARS));
    }
}

/// Person credited on a title, either as director or actor.
///
/// Serialises as `{id, name, type, created_at}` with `type` as its numeric
/// code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CastMember {
    id: CastMemberId,
    #[serde(flatten)]
    props: CastMemberProps,
    created_at: DateTime<Utc>,
}

impl CastMember {
    /// Validate and construct a new cast member with a fresh identity.
    ///
    /// # Errors
    ///
    /// Returns every violated rule when the draft is invalid.
    pub fn create(draft: CastMemberDraft) -> Result<Self, EntityValidationError> {
        Self::restore(CastMemberId::generate(), draft, Utc::now())
    }

    /// Rebuild a cast member from previously stored state.
    ///
    /// # Errors
    ///
    /// Returns every violated rule when the stored state is invalid.
    pub fn restore(
        id: CastMemberId,
        draft: CastMemberDraft,
        created_at: DateTime<Utc>,
    ) -> Result<Self, EntityValidationError> {
        let props = CastMemberProps {
            name: draft.name,
            cast_member_type: draft.cast_member_type,
        };
        validate_props::<_, CastMemberRules>(Self::NAME, &props)?;
        Ok(Self {
            id,
            props,
            created_at,
        })
    }

    pub fn id(&self) -> &CastMemberId {
        &self.id
    }
    pub fn name(&self) -> &str {
        self.props.name.as_str()
    }
    pub fn cast_member_type(&self) -> CastMemberType {
        self.props.cast_member_type
    }

    /// Rename the cast member.
    ///
    /// # Errors
    ///
    /// Leaves the cast member unchanged when the new name is invalid.
    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), EntityValidationError> {
        let name = name.into();
        commit_validated::<_, CastMemberRules, _>(Self::NAME, &mut self.props, |props| {
            props.name = name;
        })
    }

    pub fn change_type(&mut self, cast_member_type: CastMemberType) {
        self.props.cast_member_type = cast_member_type;
    }
}

impl IdentityKind for CastMember {
    const NAME: &'static str = "CastMember";
}

impl Entity for CastMember {
    fn entity_id(&self) -> &CastMemberId {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Cast member search filter; populated parts combine with AND.
///
/// Parsed from `{"name": .., "type": ..}`. A bare scalar filters by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CastMemberFilter {
    pub name: Option<String>,
    pub cast_member_type: Option<CastMemberType>,
}

impl CastMemberFilter {
    fn is_empty(&self) -> bool {
        self.name.is_none() && self.cast_member_type.is_none()
    }
}

impl SearchFilter for CastMemberFilter {
    type Error = SearchValidationError;

    fn parse(raw: &Value) -> Result<Option<Self>, Self::Error> {
        let filter = match raw {
            Value::Object(fields) => Self {
                name: fields.get("name").and_then(coerce_text),
                cast_member_type: fields.get("type").map(parse_type_code).transpose()?.flatten(),
            },
            scalar => Self {
                name: coerce_text(scalar),
                cast_member_type: None,
            },
        };
        Ok((!filter.is_empty()).then_some(filter))
    }
}

/// Read a type code from a filter value.
///
/// `null` and `""` mean no type filter. Codes may be integers, integral
/// floats or their string forms; anything else is rejected.
fn parse_type_code(raw: &Value) -> Result<Option<CastMemberType>, SearchValidationError> {
    let code = match raw {
        Value::Null => return Ok(None),
        Value::String(text) if text.is_empty() => return Ok(None),
        Value::String(text) => whole_code(text.trim()),
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().and_then(integral_code)),
        Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    };
    code.and_then(|whole| CastMemberType::try_from(whole).ok())
        .map(Some)
        .ok_or_else(|| {
            SearchValidationError::new(FieldsError::single(
                "type",
                format!("type must be 1 (director) or 2 (actor) (got {raw})"),
            ))
        })
}

fn whole_code(text: &str) -> Option<i64> {
    text.parse::<i64>()
        .ok()
        .or_else(|| text.parse::<f64>().ok().and_then(integral_code))
}

fn integral_code(value: f64) -> Option<i64> {
    (value.is_finite() && value.fract().classify() == FpCategory::Zero)
        .then(|| format!("{value:.0}"))
        .and_then(|text| text.parse::<i64>().ok())
}
