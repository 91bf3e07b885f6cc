use strum::{Display, EnumCount, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// All geocoding providers geochain knows about.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCount, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum ProviderKind {
    GoogleMaps,
    GoogleMapsBusiness,
    BingMaps,
    Openstreetmaps,
    MapQuest,
    Nominatim,
    GeocoderCa,
    GeocoderUs,
    IgnOpenls,
    DataScienceToolkit,
    Yandex,
    Baidu,
    Tomtom,
}

/// The providers that are queried if no (known) provider has been requested.
pub const DEFAULT_PROVIDERS: [ProviderKind; 3] = [
    ProviderKind::GoogleMaps,
    ProviderKind::Openstreetmaps,
    ProviderKind::MapQuest,
];

impl ProviderKind {
    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    /// The names of the configuration parameters that are
    /// passed to the provider after the transport, in this order.
    #[rustfmt::skip]
    pub const fn params(self) -> &'static [&'static str] {
        match self {
            Self::GoogleMaps         => &["locale", "region", "use_ssl", "api_key"],
            Self::GoogleMapsBusiness => &["client_id", "private_key", "locale", "region", "use_ssl"],
            Self::BingMaps           => &["api_key", "locale"],
            Self::Openstreetmaps     => &["locale"],
            Self::MapQuest           => &["api_key", "licensed"],
            Self::Nominatim          => &["root_url", "locale"],
            Self::GeocoderCa         => &["api_key"],
            Self::GeocoderUs         => &[],
            Self::IgnOpenls          => &["api_key", "use_ssl"],
            Self::DataScienceToolkit => &["use_ssl"],
            Self::Yandex             => &["locale", "toponym", "api_key"],
            Self::Baidu              => &["api_key"],
            Self::Tomtom             => &["api_key", "locale"],
        }
    }
}
