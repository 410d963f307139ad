//! Catalogue core library modules.
//!
//! - [`domain`]: entities, validation, ports and the search template.
//! - [`outbound`]: in-memory repositories and storage record mappers.
//! - [`config`] and [`telemetry`]: settings loading and tracing setup.

pub mod config;
pub mod domain;
pub mod outbound;
pub mod telemetry;

pub use config::CatalogSettings;
pub use domain::{CatalogError, ErrorCode};
