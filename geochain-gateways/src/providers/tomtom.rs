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

pub fn tomtom(
    transport: Rc<dyn HttpTransport>,
    params: &ProviderParams,
) -> Result<Box<dyn GeocodingProvider>, ProviderError> {
    let kind = ProviderKind::Tomtom;
    let api_key = required(kind, params, "api_key")?;
    let api = JsonApi::new(
        kind,
        transport,
        "https://api.tomtom.com/search/2/geocode",
        AddressParam::PathSegment { suffix: ".json" },
        Candidates::Array("/results"),
        Position::LatLng {
            lat: "/position/lat",
            lng: "/position/lon",
        },
    )?
    .param("key", api_key)
    .param_opt("language", params.get("locale"))
    .limit_param("limit");
    Ok(Box::new(api))
}
