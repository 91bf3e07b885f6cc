use std::{fmt, rc::Rc};

use itertools::Itertools;

use super::{Error, Result};
use crate::{
    entities::{ProviderKind, DEFAULT_PROVIDERS},
    gateways::{geocode::GeocodingProvider, http::HttpTransport},
    registry::{ProviderDescriptor, ProviderRegistry},
    settings::{ProviderParams, SettingsMap},
};

/// Split a configured provider list, e.g. `"google_maps, bing_maps nominatim"`.
pub fn parse_provider_list(list: &str) -> Vec<String> {
    list.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|name| !name.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

pub struct ProviderInstance {
    kind: ProviderKind,
    provider: Box<dyn GeocodingProvider>,
}

impl ProviderInstance {
    pub fn new(kind: ProviderKind, provider: Box<dyn GeocodingProvider>) -> Self {
        Self { kind, provider }
    }

    pub fn kind(&self) -> ProviderKind {
        self.kind
    }

    pub fn provider(&self) -> &dyn GeocodingProvider {
        &*self.provider
    }
}

impl fmt::Debug for ProviderInstance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("ProviderInstance").field(&self.kind).finish()
    }
}

/// Ready-to-use providers in the order they are queried.
#[derive(Debug, Default)]
pub struct ProviderChain(Vec<ProviderInstance>);

impl ProviderChain {
    pub fn kinds(&self) -> Vec<ProviderKind> {
        self.0.iter().map(ProviderInstance::kind).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProviderInstance> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<ProviderInstance>> for ProviderChain {
    fn from(from: Vec<ProviderInstance>) -> Self {
        Self(from)
    }
}

pub struct ProviderChainBuilder<'a> {
    registry: &'a ProviderRegistry,
    settings: &'a SettingsMap,
}

impl<'a> ProviderChainBuilder<'a> {
    pub const fn new(registry: &'a ProviderRegistry, settings: &'a SettingsMap) -> Self {
        Self { registry, settings }
    }

    /// Set up the requested providers in the requested order.
    ///
    /// Duplicates and unknown names are skipped. If none of the names
    /// is known the [`DEFAULT_PROVIDERS`] are used instead, so
    /// [`Error::NoValidProviders`] only occurs if none of the registered
    /// defaults exists or all of them reject their construction.
    pub fn build<S: AsRef<str>>(
        &self,
        names: &[S],
        transport: &Rc<dyn HttpTransport>,
    ) -> Result<ProviderChain> {
        let mut descriptors = self.resolve_descriptors(names);
        if descriptors.is_empty() {
            log::info!(
                "No known geocoding provider requested: use the default providers ({})",
                DEFAULT_PROVIDERS.iter().join(", ")
            );
            descriptors = DEFAULT_PROVIDERS
                .iter()
                .filter_map(|kind| self.registry.get(*kind))
                .collect();
        }
        let instances: Vec<_> = descriptors
            .into_iter()
            .filter_map(|descriptor| self.instantiate(descriptor, transport))
            .collect();
        if instances.is_empty() {
            return Err(Error::NoValidProviders);
        }
        log::debug!(
            "Geocoding provider chain: {}",
            instances.iter().map(ProviderInstance::kind).join(" -> ")
        );
        Ok(instances.into())
    }

    fn resolve_descriptors<S: AsRef<str>>(&self, names: &[S]) -> Vec<&'a ProviderDescriptor> {
        names
            .iter()
            .map(|name| name.as_ref().trim())
            .filter(|name| !name.is_empty())
            .unique()
            .filter_map(|name| {
                let descriptor = self.registry.resolve(name);
                if descriptor.is_none() {
                    log::warn!("Skipping unknown geocoding provider '{name}'");
                }
                descriptor
            })
            .collect()
    }

    fn instantiate(
        &self,
        descriptor: &ProviderDescriptor,
        transport: &Rc<dyn HttpTransport>,
    ) -> Option<ProviderInstance> {
        let params = ProviderParams::resolve(descriptor.kind(), self.settings);
        match descriptor.construct(Rc::clone(transport), &params) {
            Ok(provider) => Some(ProviderInstance::new(descriptor.kind(), provider)),
            Err(err) => {
                log::warn!(
                    "Unable to set up geocoding provider '{}': {err}",
                    descriptor.name()
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        gateways::geocode::ProviderError,
        usecases::tests::{offline_transport, recording_registry, ParamsLog},
    };
    use ProviderKind as P;

    fn build(names: &[&str], settings: &SettingsMap) -> (Result<ProviderChain>, ParamsLog) {
        let log = ParamsLog::default();
        let registry = recording_registry(ProviderKind::all(), &log);
        let chain = ProviderChainBuilder::new(&registry, settings).build(names, &offline_transport());
        (chain, log)
    }

    #[test]
    fn parse_space_or_comma_delimited_lists() {
        assert_eq!(
            vec!["google_maps", "bing_maps", "nominatim"],
            parse_provider_list(" google_maps,bing_maps ,\n nominatim,, ")
        );
        assert!(parse_provider_list("  ").is_empty());
    }

    #[test]
    fn deduplicate_and_keep_requested_order() {
        let names = ["map_quest", "google_maps", "map_quest", "unknown_x"];
        let (chain, log) = build(&names, &SettingsMap::new());
        assert_eq!(vec![P::MapQuest, P::GoogleMaps], chain.unwrap().kinds());
        assert_eq!(vec![P::MapQuest, P::GoogleMaps], log.kinds());
    }

    #[test]
    fn never_reorder_providers() {
        let names = ["tomtom", "baidu", "bing_maps", "google_maps"];
        let (chain, _) = build(&names, &SettingsMap::new());
        assert_eq!(
            vec![P::Tomtom, P::Baidu, P::BingMaps, P::GoogleMaps],
            chain.unwrap().kinds()
        );
    }

    #[test]
    fn use_default_providers_if_nothing_requested() {
        let (chain, _) = build(&[], &SettingsMap::new());
        assert_eq!(DEFAULT_PROVIDERS.to_vec(), chain.unwrap().kinds());
        let (chain, _) = build(&["", "  "], &SettingsMap::new());
        assert_eq!(DEFAULT_PROVIDERS.to_vec(), chain.unwrap().kinds());
    }

    #[test]
    fn use_default_providers_if_all_are_unknown() {
        let (chain, _) = build(&["unknown_x", "openstreetmap"], &SettingsMap::new());
        assert_eq!(
            vec![P::GoogleMaps, P::Openstreetmaps, P::MapQuest],
            chain.unwrap().kinds()
        );
    }

    #[test]
    fn fail_without_any_available_provider() {
        let log = ParamsLog::default();
        let registry = recording_registry([P::Yandex], &log);
        let settings = SettingsMap::new();
        let builder = ProviderChainBuilder::new(&registry, &settings);
        let err = builder.build(&["unknown_x"], &offline_transport()).unwrap_err();
        assert!(matches!(err, Error::NoValidProviders));
        let empty = ProviderRegistry::new();
        let builder = ProviderChainBuilder::new(&empty, &settings);
        assert!(builder.build::<&str>(&[], &offline_transport()).is_err());
    }

    #[test]
    fn look_up_params_by_derived_config_key() {
        let settings = SettingsMap::new()
            .with("GOOGLE_MAPS_REGION", "de")
            .with("GOOGLE_MAPS_LOCALE", "de_DE");
        let (chain, log) = build(&["google_maps"], &settings);
        assert!(chain.is_ok());
        let params = log.params_of(P::GoogleMaps).unwrap();
        assert_eq!(Some("de"), params.get("region"));
        assert_eq!(Some("de_DE"), params.get("locale"));
        assert_eq!(None, params.get("api_key"));
        let names: Vec<_> = params.iter().map(|(name, _)| name).collect();
        assert_eq!(vec!["locale", "region", "use_ssl", "api_key"], names);
    }

    #[test]
    fn skip_providers_that_reject_their_construction() {
        let log = ParamsLog::default();
        let registry = recording_registry([P::BingMaps, P::Nominatim], &log).with(
            ProviderDescriptor::new(P::BingMaps, |_, _| {
                Err(ProviderError::Configuration("missing API key".into()))
            }),
        );
        let settings = SettingsMap::new();
        let chain = ProviderChainBuilder::new(&registry, &settings)
            .build(&["bing_maps", "nominatim"], &offline_transport())
            .unwrap();
        assert_eq!(vec![P::Nominatim], chain.kinds());
    }

    #[test]
    fn fail_if_every_provider_rejects_its_construction() {
        let registry = ProviderRegistry::new().with(ProviderDescriptor::new(P::Baidu, |_, _| {
            Err(ProviderError::Configuration("missing API key".into()))
        }));
        let settings = SettingsMap::new();
        let err = ProviderChainBuilder::new(&registry, &settings)
            .build(&["baidu"], &offline_transport())
            .unwrap_err();
        assert!(matches!(err, Error::NoValidProviders));
    }
}
