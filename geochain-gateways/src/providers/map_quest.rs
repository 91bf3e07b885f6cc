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

pub fn map_quest(
    transport: Rc<dyn HttpTransport>,
    params: &ProviderParams,
) -> Result<Box<dyn GeocodingProvider>, ProviderError> {
    let kind = ProviderKind::MapQuest;
    let api_key = required(kind, params, "api_key")?;
    // Licensed data instead of OpenStreetMap data
    let host = if params.flag("licensed").unwrap_or(false) {
        "www.mapquestapi.com"
    } else {
        "open.mapquestapi.com"
    };
    let api = JsonApi::new(
        kind,
        transport,
        &format!("https://{host}/geocoding/v1/address"),
        AddressParam::Query("location"),
        Candidates::Array("/results/0/locations"),
        Position::LatLng {
            lat: "/latLng/lat",
            lng: "/latLng/lng",
        },
    )?
    .param("key", api_key)
    .limit_param("maxResults");
    Ok(Box::new(api))
}
