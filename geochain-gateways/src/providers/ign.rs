use std::rc::Rc;

use geochain_core::{
    entities::ProviderKind,
    gateways::{
        geocode::{GeocodingProvider, ProviderError},
        http::HttpTransport,
    },
    settings::ProviderParams,
};

use super::{scheme, AddressParam, Candidates, JsonApi, Position};

/// The geocoding service of the French IGN (Géoplateforme).
pub fn ign_openls(
    transport: Rc<dyn HttpTransport>,
    params: &ProviderParams,
) -> Result<Box<dyn GeocodingProvider>, ProviderError> {
    let endpoint = format!("{}://data.geopf.fr/geocodage/search", scheme(params));
    let api = JsonApi::new(
        ProviderKind::IgnOpenls,
        transport,
        &endpoint,
        AddressParam::Query("q"),
        Candidates::Array("/features"),
        Position::LngLatPair("/geometry/coordinates"),
    )?
    .param_opt("apikey", params.get("api_key"))
    .limit_param("limit");
    Ok(Box::new(api))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::tests::*;

    #[test]
    fn geocode_address() {
        let body = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [2.347, 48.859] },
                "properties": { "label": "Paris" }
            }]
        }"#;
        let (req, results) = geocode(ProviderKind::IgnOpenls, &params([]), body);
        assert_eq!("https://data.geopf.fr/geocodage/search", req.url);
        assert_eq!(Some("Berlin"), query_param(&req, "q"));
        assert_eq!(Some("1"), query_param(&req, "limit"));
        assert_eq!(vec![(48.859, 2.347)], results);
    }
}
