use std::rc::Rc;

use geochain_core::{
    entities::ProviderKind,
    gateways::{
        geocode::{GeocodingProvider, ProviderError},
        http::HttpTransport,
    },
    settings::ProviderParams,
};

use super::{required, AddressParam, Candidates, JsonApi, Position};

/// Coordinates are returned in the BD-09 datum.
pub fn baidu(
    transport: Rc<dyn HttpTransport>,
    params: &ProviderParams,
) -> Result<Box<dyn GeocodingProvider>, ProviderError> {
    let kind = ProviderKind::Baidu;
    let api_key = required(kind, params, "api_key")?;
    let api = JsonApi::new(
        kind,
        transport,
        "https://api.map.baidu.com/geocoding/v3",
        AddressParam::Query("address"),
        Candidates::Single("/result"),
        Position::LatLng {
            lat: "/location/lat",
            lng: "/location/lng",
        },
    )?
    .param("output", "json")
    .param("ak", api_key);
    Ok(Box::new(api))
}
