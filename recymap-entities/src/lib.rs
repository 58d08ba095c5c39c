#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # recymap-entities
//!
//! Reusable, agnostic domain entities for recymap.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod category;
pub mod classification;
pub mod contact;
pub mod geo;
pub mod id;
pub mod location;
pub mod time;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
