//! Storage records for catalogue entities.
//!
//! Records hold exactly what a store persists: identifiers and codes are
//! kept as raw primitives so a corrupt row can still be read and reported.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored category row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Stored cast member row; `cast_member_type` is the raw role code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMemberRecord {
    pub id: String,
    pub name: String,
    pub cast_member_type: i64,
    pub created_at: DateTime<Utc>,
}

/// Stored genre row with its category references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreRecord {
    pub id: String,
    pub name: String,
    pub categories_id: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
