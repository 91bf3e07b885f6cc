use std::collections::HashMap;

use crate::entities::ProviderKind;

/// Derive the name of the setting that holds a provider parameter,
/// e.g. `GOOGLE_MAPS_REGION`.
pub fn config_key(provider: &str, param: &str) -> String {
    format!("{provider}_{param}").to_uppercase()
}

/// Read-only, process-wide provider settings.
///
/// Keys are stored in upper case. A missing key is reported as `None`,
/// there are no implicit defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsMap(HashMap<String, String>);

impl SettingsMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl AsRef<str>, value: impl Into<String>) {
        self.0.insert(key.as_ref().to_uppercase(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(&key.to_uppercase()).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for SettingsMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut settings = Self::new();
        for (key, value) in iter {
            settings.insert(key, value);
        }
        settings
    }
}

/// The parameters of a provider resolved from the settings,
/// in the order the provider declares them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderParams(Vec<(&'static str, Option<String>)>);

impl ProviderParams {
    pub fn resolve(kind: ProviderKind, settings: &SettingsMap) -> Self {
        let params = kind
            .params()
            .iter()
            .map(|param| {
                let key = config_key(kind.name(), param);
                let value = settings.get(&key).map(ToOwned::to_owned);
                if value.is_none() {
                    log::debug!("No value for {key} configured");
                }
                (*param, value)
            })
            .collect();
        Self(params)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(param, _)| *param == name)
            .and_then(|(_, value)| value.as_deref())
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    /// Interpret a parameter as boolean switch.
    pub fn flag(&self, name: &str) -> Option<bool> {
        let value = self.get(name)?.to_lowercase();
        match value.as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => {
                log::warn!("Ignoring invalid boolean value '{value}' of parameter '{name}'");
                None
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Option<&str>)> + '_ {
        self.0.iter().map(|(param, value)| (*param, value.as_deref()))
    }
}

impl<const N: usize> From<[(&'static str, Option<&str>); N]> for ProviderParams {
    fn from(from: [(&'static str, Option<&str>); N]) -> Self {
        Self(
            from.into_iter()
                .map(|(param, value)| (param, value.map(ToOwned::to_owned)))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_config_key_from_provider_and_param() {
        assert_eq!("GOOGLE_MAPS_REGION", config_key("google_maps", "region"));
        assert_eq!("MAP_QUEST_API_KEY", config_key("map_quest", "api_key"));
    }

    #[test]
    fn settings_keys_are_case_insensitive() {
        let settings = SettingsMap::new().with("google_maps_locale", "de");
        assert_eq!(Some("de"), settings.get("GOOGLE_MAPS_LOCALE"));
        assert!(settings.contains_key("Google_Maps_Locale"));
        assert_eq!(None, settings.get("GOOGLE_MAPS_REGION"));
    }

    #[test]
    fn resolve_params_in_declared_order() {
        let settings: SettingsMap = [
            ("GOOGLE_MAPS_API_KEY", "secret"),
            ("GOOGLE_MAPS_REGION", "de"),
            ("BING_MAPS_LOCALE", "fr"),
        ]
        .into_iter()
        .collect();
        let params = ProviderParams::resolve(ProviderKind::GoogleMaps, &settings);
        let resolved: Vec<_> = params.iter().collect();
        assert_eq!(
            vec![
                ("locale", None),
                ("region", Some("de")),
                ("use_ssl", None),
                ("api_key", Some("secret")),
            ],
            resolved
        );
    }

    #[test]
    fn missing_params_are_absent() {
        let params = ProviderParams::resolve(ProviderKind::Tomtom, &SettingsMap::new());
        assert_eq!(2, params.iter().count());
        assert!(params.iter().all(|(_, value)| value.is_none()));
        assert_eq!(None, params.get("api_key"));
    }

    #[test]
    fn blank_values_are_absent() {
        let params = ProviderParams::from([("api_key", Some("  "))]);
        assert_eq!(None, params.get("api_key"));
    }

    #[test]
    fn parse_flags() {
        let params = ProviderParams::from([
            ("use_ssl", Some("Yes")),
            ("licensed", Some("0")),
            ("other", Some("maybe")),
        ]);
        assert_eq!(Some(true), params.flag("use_ssl"));
        assert_eq!(Some(false), params.flag("licensed"));
        assert_eq!(None, params.flag("other"));
        assert_eq!(None, params.flag("missing"));
    }
}
