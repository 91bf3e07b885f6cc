use thiserror::Error;

use super::http::TransportError;
use crate::entities::Coordinates;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("No result")]
    NoResult,
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

/// The capability every geocoding provider offers.
pub trait GeocodingProvider {
    /// Look up the address and return at most `limit` candidates,
    /// the best match first. An empty list means "no result".
    fn geocode(&self, text: &str, limit: usize) -> Result<Vec<Coordinates>, ProviderError>;
}
