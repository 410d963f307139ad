//! Cast member role value object.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::error::InvalidArgumentError;
use crate::domain::value_object::ValueObject;

/// Role a cast member plays, stored as a numeric code.
///
/// # Examples
///
/// ```
/// use catalog::domain::CastMemberType;
///
/// assert_eq!(CastMemberType::try_from(2_i64), Ok(CastMemberType::Actor));
/// assert!(CastMemberType::try_from(3_i64).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastMemberType {
    /// Code `1`.
    Director,
    /// Code `2`.
    Actor,
}

impl CastMemberType {
    /// Numeric code used in storage and JSON.
    pub fn code(self) -> u8 {
        match self {
            Self::Director => 1,
            Self::Actor => 2,
        }
    }
}

impl TryFrom<i64> for CastMemberType {
    type Error = InvalidArgumentError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Director),
            2 => Ok(Self::Actor),
            other => Err(InvalidArgumentError::CastMemberType { value: other }),
        }
    }
}

impl fmt::Display for CastMemberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Director => "director",
            Self::Actor => "actor",
        })
    }
}

impl ValueObject for CastMemberType {
    type Value = u8;

    fn value(&self) -> u8 {
        self.code()
    }
}

impl Serialize for CastMemberType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for CastMemberType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = i64::deserialize(deserializer)?;
        Self::try_from(code).map_err(serde::de::Error::custom)
    }
}
