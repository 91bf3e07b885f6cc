#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # geochain-entities
//!
//! Reusable, agnostic domain entities for geochain.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod address;
pub mod geo;
pub mod provider;
pub mod record;
pub mod transport;
