use thiserror::Error;

use crate::{entities::TransportKind, gateways::http::TransportError};

/// Configuration problems that abort an address resolution.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid transport adapter '{0}'")]
    InvalidTransport(String),
    #[error("Unable to create the '{0}' transport adapter: {1}")]
    TransportInit(TransportKind, #[source] TransportError),
    #[error("No valid providers")]
    NoValidProviders,
}
