//! Outbound adapters implementing domain ports.
//!
//! - **memory**: in-memory reference repositories sharing the domain search
//!   template
//! - **persistence**: storage records and the mappers that rebuild entities
//!   from them
//!
//! Adapters are thin translators between domain types and their storage
//! representation. They contain no business logic.

pub mod memory;
pub mod persistence;
