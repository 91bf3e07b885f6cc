mod build_provider_chain;
mod error;
mod geocode_with_fallback;
mod resolve_address;
mod resolve_transport;


type Result<T> = std::result::Result<T, Error>;

pub use self::{
    build_provider_chain::*, error::Error, geocode_with_fallback::*, resolve_address::*,
    resolve_transport::*,
};
