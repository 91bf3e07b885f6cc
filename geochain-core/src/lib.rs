//! # geochain-core
//!
//! Resolves postal addresses into coordinates by querying an ordered
//! chain of geocoding providers until one of them succeeds.

pub mod gateways;
pub mod normalize;
pub mod registry;
pub mod settings;
pub mod usecases;

pub mod entities {
    pub use geochain_entities::{address::*, geo::*, provider::*, record::*, transport::*};
}
