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

pub fn yandex(
    transport: Rc<dyn HttpTransport>,
    params: &ProviderParams,
) -> Result<Box<dyn GeocodingProvider>, ProviderError> {
    let api = JsonApi::new(
        ProviderKind::Yandex,
        transport,
        "https://geocode-maps.yandex.ru/1.x",
        AddressParam::Query("geocode"),
        Candidates::Array("/response/GeoObjectCollection/featureMember"),
        Position::LngLatText("/GeoObject/Point/pos"),
    )?
    .param("format", "json")
    .param_opt("lang", params.get("locale"))
    .param_opt("kind", params.get("toponym"))
    .param_opt("apikey", params.get("api_key"))
    .limit_param("results");
    Ok(Box::new(api))
}
