use std::rc::Rc;

use geochain_core::{
    entities::ProviderKind,
    gateways::{
        geocode::{GeocodingProvider, ProviderError},
        http::HttpTransport,
    },
    settings::ProviderParams,
};

use super::{required, scheme, AddressParam, Candidates, JsonApi, Position, UrlSigner};

const LOCATION: Position = Position::LatLng {
    lat: "/geometry/location/lat",
    lng: "/geometry/location/lng",
};

fn geocoding_api(
    kind: ProviderKind,
    transport: Rc<dyn HttpTransport>,
    params: &ProviderParams,
) -> Result<JsonApi, ProviderError> {
    let endpoint = format!(
        "{}://maps.googleapis.com/maps/api/geocode/json",
        scheme(params)
    );
    let api = JsonApi::new(
        kind,
        transport,
        &endpoint,
        AddressParam::Query("address"),
        Candidates::Array("/results"),
        LOCATION,
    )?
    .param_opt("language", params.get("locale"))
    .param_opt("region", params.get("region"))
    .error_message("/error_message");
    Ok(api)
}

pub fn google_maps(
    transport: Rc<dyn HttpTransport>,
    params: &ProviderParams,
) -> Result<Box<dyn GeocodingProvider>, ProviderError> {
    let api = geocoding_api(ProviderKind::GoogleMaps, transport, params)?
        .param_opt("key", params.get("api_key"));
    Ok(Box::new(api))
}

/// Google Maps for premium clients authenticate with a signature.
pub fn google_maps_business(
    transport: Rc<dyn HttpTransport>,
    params: &ProviderParams,
) -> Result<Box<dyn GeocodingProvider>, ProviderError> {
    let kind = ProviderKind::GoogleMapsBusiness;
    let client_id = required(kind, params, "client_id")?;
    let signer = UrlSigner::from_base64(required(kind, params, "private_key")?)?;
    let api = geocoding_api(kind, transport, params)?
        .param("client", client_id)
        .signed(signer);
    Ok(Box::new(api))
}

#[cfg(test)]
mod tests {
    use reqwest::Url;

    use super::*;
    use crate::providers::tests::*;

    const BERLIN: &str = r#"{
        "results": [{
            "formatted_address": "Berlin, Germany",
            "geometry": { "location": { "lat": 52.52000659999999, "lng": 13.404954 } }
        }],
        "status": "OK"
    }"#;

    #[test]
    fn geocode_with_api_key() {
        let params = params([
            ("locale", Some("de")),
            ("region", Some("de")),
            ("use_ssl", None),
            ("api_key", Some("secret")),
        ]);
        let (req, results) = geocode(ProviderKind::GoogleMaps, &params, BERLIN);
        assert_eq!("https://maps.googleapis.com/maps/api/geocode/json", req.url);
        assert_eq!(Some("Berlin"), query_param(&req, "address"));
        assert_eq!(Some("de"), query_param(&req, "language"));
        assert_eq!(Some("secret"), query_param(&req, "key"));
        assert_eq!(vec![(52.52000659999999, 13.404954)], results);
    }

    #[test]
    fn geocode_without_ssl() {
        let params = params([("use_ssl", Some("no"))]);
        let (req, _) = geocode(ProviderKind::GoogleMaps, &params, BERLIN);
        assert!(req.url.starts_with("http://"));
        assert_eq!(None, query_param(&req, "key"));
    }

    #[test]
    fn zero_results() {
        let (_, results) = geocode(
            ProviderKind::GoogleMaps,
            &params([]),
            r#"{"results":[],"status":"ZERO_RESULTS"}"#,
        );
        assert!(results.is_empty());
    }

    #[test]
    fn sign_business_requests() {
        let params = params([
            ("client_id", Some("gme-client")),
            ("private_key", Some("vNIXE0xscrmjlyV-12Nj_BvUPaw=")),
        ]);
        let (req, results) = geocode(ProviderKind::GoogleMapsBusiness, &params, BERLIN);
        assert_eq!(1, results.len());
        assert!(req.query.is_empty());
        let url = Url::parse(&req.url).unwrap();
        let keys: Vec<_> = url.query_pairs().map(|(key, _)| key.into_owned()).collect();
        assert_eq!(vec!["address", "client", "signature"], keys);
    }

    #[test]
    fn business_requires_client_id_and_private_key() {
        let err = construction_error(
            ProviderKind::GoogleMapsBusiness,
            &params([("private_key", Some("vNIXE0xscrmjlyV-12Nj_BvUPaw="))]),
        );
        assert!(err.to_string().contains("GOOGLE_MAPS_BUSINESS_CLIENT_ID"));
        let err = construction_error(
            ProviderKind::GoogleMapsBusiness,
            &params([("client_id", Some("gme-client"))]),
        );
        assert!(err.to_string().contains("GOOGLE_MAPS_BUSINESS_PRIVATE_KEY"));
    }
}
