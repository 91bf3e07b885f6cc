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

pub fn bing_maps(
    transport: Rc<dyn HttpTransport>,
    params: &ProviderParams,
) -> Result<Box<dyn GeocodingProvider>, ProviderError> {
    let kind = ProviderKind::BingMaps;
    let api_key = required(kind, params, "api_key")?;
    let api = JsonApi::new(
        kind,
        transport,
        "https://dev.virtualearth.net/REST/v1/Locations",
        AddressParam::Query("q"),
        Candidates::Array("/resourceSets/0/resources"),
        Position::LatLngPair("/point/coordinates"),
    )?
    .param("key", api_key)
    .param_opt("culture", params.get("locale"))
    .limit_param("maxResults")
    .error_message("/errorDetails/0");
    Ok(Box::new(api))
}
