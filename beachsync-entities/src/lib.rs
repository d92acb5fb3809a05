#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # beachsync-entities
//!
//! Reusable, agnostic domain entities for synchronizing bathing sites.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod cross_reference;
pub mod entity;
pub mod geo;
pub mod site;
pub mod time;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
