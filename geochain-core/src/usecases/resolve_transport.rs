use std::rc::Rc;

use super::{Error, Result};
use crate::{
    entities::TransportKind,
    gateways::http::{HttpTransport, TransportFactory},
};

/// Determine the transport from its (optional) configured name.
///
/// Empty or missing names select the default transport.
pub fn parse_transport_kind(name: Option<&str>) -> Result<TransportKind> {
    let name = name.map(str::trim).unwrap_or_default();
    if name.is_empty() {
        return Ok(TransportKind::default());
    }
    name.parse()
        .map_err(|_| Error::InvalidTransport(name.to_owned()))
}

pub fn resolve_transport(
    factory: &dyn TransportFactory,
    name: Option<&str>,
) -> Result<Rc<dyn HttpTransport>> {
    let kind = parse_transport_kind(name)?;
    log::info!("Use {kind} transport adapter");
    factory
        .create(kind)
        .map_err(|err| Error::TransportInit(kind, err))
}
