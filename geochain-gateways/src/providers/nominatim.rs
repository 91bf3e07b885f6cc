use std::rc::Rc;

use geochain_core::{
    entities::ProviderKind,
    gateways::{
        geocode::{GeocodingProvider, ProviderError},
        http::HttpTransport,
    },
    settings::ProviderParams,
};

use super::{AddressParam, Candidates, JsonApi, Position};

pub const OSM_ROOT_URL: &str = "https://nominatim.openstreetmap.org";

fn search(
    kind: ProviderKind,
    transport: Rc<dyn HttpTransport>,
    root_url: &str,
    params: &ProviderParams,
) -> Result<Box<dyn GeocodingProvider>, ProviderError> {
    let endpoint = format!("{}/search", root_url.trim_end_matches('/'));
    let api = JsonApi::new(
        kind,
        transport,
        &endpoint,
        AddressParam::Query("q"),
        Candidates::Array(""),
        Position::LatLng {
            lat: "/lat",
            lng: "/lon",
        },
    )?
    .param("format", "jsonv2")
    .param_opt("accept-language", params.get("locale"))
    .limit_param("limit");
    Ok(Box::new(api))
}

/// The public Nominatim instance of OpenStreetMap.
pub fn openstreetmaps(
    transport: Rc<dyn HttpTransport>,
    params: &ProviderParams,
) -> Result<Box<dyn GeocodingProvider>, ProviderError> {
    search(ProviderKind::Openstreetmaps, transport, OSM_ROOT_URL, params)
}

/// A self-hosted Nominatim instance.
pub fn nominatim(
    transport: Rc<dyn HttpTransport>,
    params: &ProviderParams,
) -> Result<Box<dyn GeocodingProvider>, ProviderError> {
    let root_url = params.get("root_url").unwrap_or(OSM_ROOT_URL);
    search(ProviderKind::Nominatim, transport, root_url, params)
}
