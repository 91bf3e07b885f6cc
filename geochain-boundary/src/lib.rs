use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[cfg(feature = "entity-conversions")]
pub use conv::RecordError;

#[rustfmt::skip]
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addr1    : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addr2    : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city     : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state    : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postcode : Option<String>,
}

/// Either free text or the individual parts of an address.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(untagged)]
pub enum AddressInput {
    Text(String),
    Structured(Address),
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct GeocodeRecord {
    pub raw: AddressInput,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
