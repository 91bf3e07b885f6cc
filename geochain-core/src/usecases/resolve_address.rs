use super::{
    geocode_with_report, parse_provider_list, resolve_transport, FallbackReport,
    ProviderChainBuilder, Result,
};
use crate::{
    entities::{AddressInput, GeocodeRecord},
    gateways::http::TransportFactory,
    normalize::normalize_address,
    registry::ProviderRegistry,
    settings::SettingsMap,
};

/// What the host asks for: the provider chain and the transport.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeocodeRequest {
    /// Provider names in priority order.
    pub providers: Vec<String>,
    pub adapter: Option<String>,
}

impl GeocodeRequest {
    /// Create a request from the raw strings a host has been configured with.
    pub fn from_config(providers: &str, adapter: &str) -> Self {
        let adapter = Some(adapter.trim())
            .filter(|a| !a.is_empty())
            .map(ToOwned::to_owned);
        Self {
            providers: parse_provider_list(providers),
            adapter,
        }
    }
}

/// The read-only collaborators that are shared by all resolutions.
#[derive(Clone, Copy)]
pub struct GeocodingContext<'a> {
    pub registry: &'a ProviderRegistry,
    pub settings: &'a SettingsMap,
    pub transports: &'a dyn TransportFactory,
}

/// Resolve an address into a new record.
///
/// Only configuration problems are reported as error,
/// an address that cannot be located ends up in the record.
pub fn resolve_address(
    ctx: GeocodingContext,
    request: &GeocodeRequest,
    input: AddressInput,
) -> Result<GeocodeRecord> {
    resolve_address_with_report(ctx, request, input).map(|(record, _)| record)
}

pub fn resolve_address_with_report(
    ctx: GeocodingContext,
    request: &GeocodeRequest,
    input: AddressInput,
) -> Result<(GeocodeRecord, FallbackReport)> {
    let transport = resolve_transport(ctx.transports, request.adapter.as_deref())?;
    let chain =
        ProviderChainBuilder::new(ctx.registry, ctx.settings).build(&request.providers, &transport)?;
    let normalized = normalize_address(&input);
    if normalized.is_empty() {
        log::debug!("Empty address: nothing to geocode");
        return Ok((
            GeocodeRecord::not_found(input, normalized),
            FallbackReport::default(),
        ));
    }
    let report = geocode_with_report(&chain, &normalized);
    let record = match report.coordinates() {
        Some(pos) => {
            log::debug!("Resolved address '{normalized}': {pos}");
            GeocodeRecord::located(input, normalized, pos)
        }
        None => {
            log::info!("Unable to resolve address '{normalized}'");
            GeocodeRecord::not_found(input, normalized)
        }
    };
    Ok((record, report))
}

/// The normalized address text, derived from the stored input.
pub fn processed_text(record: &GeocodeRecord) -> String {
    normalize_address(record.raw_input())
}

/// The text that is indexed for full-text search.
pub fn search_text(record: &GeocodeRecord) -> String {
    processed_text(record)
}
