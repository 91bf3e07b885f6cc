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

/// Addresses in Canada and the US.
pub fn geocoder_ca(
    transport: Rc<dyn HttpTransport>,
    params: &ProviderParams,
) -> Result<Box<dyn GeocodingProvider>, ProviderError> {
    let api = JsonApi::new(
        ProviderKind::GeocoderCa,
        transport,
        "https://geocoder.ca/",
        AddressParam::Query("locate"),
        Candidates::Single(""),
        Position::LatLng {
            lat: "/latt",
            lng: "/longt",
        },
    )?
    .param("json", "1")
    .param_opt("auth", params.get("api_key"))
    .error_message("/error/description");
    Ok(Box::new(api))
}
