//! # geochain-gateways
//!
//! HTTP transports and the concrete geocoding providers.

pub mod http;
pub mod providers;

pub use self::{http::ReqwestTransportFactory, providers::provider_registry};
