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

/// The geocoder of the US Census Bureau.
pub fn geocoder_us(
    transport: Rc<dyn HttpTransport>,
    _: &ProviderParams,
) -> Result<Box<dyn GeocodingProvider>, ProviderError> {
    let api = JsonApi::new(
        ProviderKind::GeocoderUs,
        transport,
        "https://geocoding.geo.census.gov/geocoder/locations/onelineaddress",
        AddressParam::Query("address"),
        Candidates::Array("/result/addressMatches"),
        Position::LatLng {
            lat: "/coordinates/y",
            lng: "/coordinates/x",
        },
    )?
    .param("benchmark", "Public_AR_Current")
    .param("format", "json");
    Ok(Box::new(api))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::tests::*;

    #[test]
    fn geocode_address() {
        let body = r#"{
            "result": {
                "input": { "address": { "address": "4600 Silver Hill Rd, Washington, DC 20233" } },
                "addressMatches": [{
                    "matchedAddress": "4600 SILVER HILL RD, WASHINGTON, DC, 20233",
                    "coordinates": { "x": -76.92744, "y": 38.845985 }
                }]
            }
        }"#;
        let (req, results) = geocode(ProviderKind::GeocoderUs, &params([]), body);
        assert_eq!(Some("Berlin"), query_param(&req, "address"));
        assert_eq!(Some("json"), query_param(&req, "format"));
        assert_eq!(vec![(38.845985, -76.92744)], results);
    }

    #[test]
    fn no_address_match() {
        let body = r#"{ "result": { "addressMatches": [] } }"#;
        let (_, results) = geocode(ProviderKind::GeocoderUs, &params([]), body);
        assert!(results.is_empty());
    }
}
