//! Storage records and their entity mappers.
//!
//! Store-backed adapters read and write these records and never expose them
//! to the domain layer. Converting back into entities always goes through
//! [`EntityRecord::to_entity`], so every adapter reports corrupt rows the
//! same way.
//!
//! # Example
//!
//! ```
//! use catalog::domain::{Category, CategoryDraft};
//! use catalog::outbound::persistence::{CategoryRecord, EntityRecord};
//!
//! let category = Category::create(CategoryDraft::named("Movie")).expect("valid category");
//! let record = CategoryRecord::from_entity(&category);
//! assert_eq!(record.to_entity().expect("valid record"), category);
//! ```

mod mappers;
mod models;

pub use mappers::EntityRecord;
pub use models::{CastMemberRecord, CategoryRecord, GenreRecord};
