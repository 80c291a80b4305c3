#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # rfdb-entities
//!
//! Reusable, agnostic domain entities for the restaurant forum.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod comment;
pub mod id;
pub mod like;
pub mod restaurant;
pub mod time;
pub mod user;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
