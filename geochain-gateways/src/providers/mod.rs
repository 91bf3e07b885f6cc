//! The geocoding services geochain can query.

use std::rc::Rc;

use geochain_core::{
    entities::ProviderKind,
    gateways::{
        geocode::{GeocodingProvider, ProviderError},
        http::HttpTransport,
    },
    registry::{ProviderDescriptor, ProviderRegistry},
    settings::{config_key, ProviderParams},
};

mod baidu;
mod bing;
mod data_science_toolkit;
mod geocoder_ca;
mod geocoder_us;
mod google;
mod ign;
mod json_api;
mod map_quest;
mod nominatim;
mod signature;
mod tomtom;
mod yandex;

pub use self::{json_api::*, signature::UrlSigner};

type Construct =
    fn(Rc<dyn HttpTransport>, &ProviderParams) -> Result<Box<dyn GeocodingProvider>, ProviderError>;

fn constructor(kind: ProviderKind) -> Construct {
    use ProviderKind as P;
    match kind {
        P::GoogleMaps => google::google_maps,
        P::GoogleMapsBusiness => google::google_maps_business,
        P::BingMaps => bing::bing_maps,
        P::Openstreetmaps => nominatim::openstreetmaps,
        P::MapQuest => map_quest::map_quest,
        P::Nominatim => nominatim::nominatim,
        P::GeocoderCa => geocoder_ca::geocoder_ca,
        P::GeocoderUs => geocoder_us::geocoder_us,
        P::IgnOpenls => ign::ign_openls,
        P::DataScienceToolkit => data_science_toolkit::data_science_toolkit,
        P::Yandex => yandex::yandex,
        P::Baidu => baidu::baidu,
        P::Tomtom => tomtom::tomtom,
    }
}

/// A registry with all known providers.
pub fn provider_registry() -> ProviderRegistry {
    provider_registry_for(ProviderKind::all())
}

/// A registry with only the given providers.
pub fn provider_registry_for(kinds: impl IntoIterator<Item = ProviderKind>) -> ProviderRegistry {
    kinds
        .into_iter()
        .map(|kind| ProviderDescriptor::new(kind, constructor(kind)))
        .fold(ProviderRegistry::new(), ProviderRegistry::with)
}

fn required<'p>(
    kind: ProviderKind,
    params: &'p ProviderParams,
    name: &str,
) -> Result<&'p str, ProviderError> {
    params.get(name).ok_or_else(|| {
        ProviderError::Configuration(format!(
            "{kind} needs the parameter '{name}' ({})",
            config_key(kind.name(), name)
        ))
    })
}

fn scheme(params: &ProviderParams) -> &'static str {
    if params.flag("use_ssl").unwrap_or(true) {
        "https"
    } else {
        "http"
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::RefCell;

    use geochain_core::{
        entities::{Coordinates, TransportKind},
        gateways::http::{HttpRequest, TransportError},
        settings::SettingsMap,
    };

    use super::*;

    /// Answers every request with the same body.
    #[derive(Debug)]
    pub struct StubTransport {
        body: String,
        requests: RefCell<Vec<HttpRequest>>,
    }

    impl StubTransport {
        pub fn new(body: &str) -> Rc<Self> {
            Rc::new(Self {
                body: body.to_owned(),
                requests: RefCell::default(),
            })
        }

        pub fn last_request(&self) -> HttpRequest {
            self.requests.borrow().last().cloned().unwrap()
        }
    }

    impl HttpTransport for StubTransport {
        fn kind(&self) -> TransportKind {
            TransportKind::DefaultHttp
        }
        fn get(&self, request: &HttpRequest) -> Result<String, TransportError> {
            self.requests.borrow_mut().push(request.clone());
            Ok(self.body.clone())
        }
    }

    /// Look up a query parameter of the request.
    pub fn query_param<'r>(request: &'r HttpRequest, name: &str) -> Option<&'r str> {
        request
            .query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn params<const N: usize>(params: [(&'static str, Option<&str>); N]) -> ProviderParams {
        ProviderParams::from(params)
    }

    /// Construct the provider, geocode "Berlin" and return the request and the result.
    pub fn geocode(
        kind: ProviderKind,
        params: &ProviderParams,
        body: &str,
    ) -> (HttpRequest, Vec<(f64, f64)>) {
        let transport = StubTransport::new(body);
        let provider = constructor(kind)(transport.clone(), params).unwrap();
        let results = provider.geocode("Berlin", 1).unwrap();
        (
            transport.last_request(),
            results.into_iter().map(Coordinates::to_lat_lng_deg).collect(),
        )
    }

    pub fn construction_error(kind: ProviderKind, params: &ProviderParams) -> ProviderError {
        match constructor(kind)(StubTransport::new("{}"), params) {
            Ok(_) => panic!("{kind} should not have been constructed"),
            Err(err) => err,
        }
    }

    #[test]
    fn register_all_providers() {
        let registry = provider_registry();
        assert_eq!(ProviderKind::all().count(), registry.len());
        for kind in ProviderKind::all() {
            assert_eq!(Some(kind), registry.resolve(kind.name()).map(|d| d.kind()));
        }
    }

    #[test]
    fn register_a_subset_of_providers() {
        let registry = provider_registry_for([ProviderKind::Nominatim, ProviderKind::Tomtom]);
        assert_eq!(2, registry.len());
        assert!(registry.resolve("google_maps").is_none());
    }

    #[test]
    fn construct_providers_from_settings() {
        let settings = SettingsMap::new()
            .with("BING_MAPS_API_KEY", "secret")
            .with("MAP_QUEST_API_KEY", "secret")
            .with("BAIDU_API_KEY", "secret")
            .with("TOMTOM_API_KEY", "secret")
            .with("GOOGLE_MAPS_BUSINESS_CLIENT_ID", "gme-client")
            .with("GOOGLE_MAPS_BUSINESS_PRIVATE_KEY", "vNIXE0xscrmjlyV-12Nj_BvUPaw=");
        let registry = provider_registry();
        for descriptor in registry.iter() {
            let params = ProviderParams::resolve(descriptor.kind(), &settings);
            let res = descriptor.construct(StubTransport::new("{}"), &params);
            assert!(res.is_ok(), "{}", descriptor.name());
        }
    }

    #[test]
    fn reject_missing_keys() {
        let none = params([]);
        for kind in [
            ProviderKind::GoogleMapsBusiness,
            ProviderKind::BingMaps,
            ProviderKind::MapQuest,
            ProviderKind::Baidu,
            ProviderKind::Tomtom,
        ] {
            let err = construction_error(kind, &none);
            assert!(matches!(err, ProviderError::Configuration(_)), "{kind}");
        }
    }

    #[test]
    fn name_the_config_key_of_missing_params() {
        let err = construction_error(ProviderKind::Tomtom, &params([("api_key", Some("  "))]));
        assert!(err.to_string().contains("TOMTOM_API_KEY"));
    }

    #[test]
    fn disable_ssl() {
        assert_eq!("https", scheme(&params([])));
        assert_eq!("http", scheme(&params([("use_ssl", Some("false"))])));
        assert_eq!("https", scheme(&params([("use_ssl", Some("1"))])));
    }
}
