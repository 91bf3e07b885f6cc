//! Geocoding services that answer a single GET request with JSON.

use std::rc::Rc;

use geochain_core::{
    entities::{Coordinates, ProviderKind},
    gateways::{
        geocode::{GeocodingProvider, ProviderError},
        http::{HttpRequest, HttpTransport},
    },
};
use reqwest::Url;
use serde_json::Value;

use super::signature::UrlSigner;

/// Where the address is put into the request.
#[derive(Debug, Clone, Copy)]
pub enum AddressParam {
    Query(&'static str),
    /// Appended as the last path segment, followed by `suffix`.
    PathSegment { suffix: &'static str },
}

/// Where the results are found in the response (JSON pointers).
#[derive(Debug, Clone, Copy)]
pub enum Candidates {
    Array(&'static str),
    Single(&'static str),
    /// An object with one result per requested address.
    Values(&'static str),
}

/// How the position is read from a single result (JSON pointers).
#[derive(Debug, Clone, Copy)]
pub enum Position {
    LatLng {
        lat: &'static str,
        lng: &'static str,
    },
    /// `[lat, lng]`
    LatLngPair(&'static str),
    /// `[lng, lat]`
    LngLatPair(&'static str),
    /// `"lng lat"`
    LngLatText(&'static str),
}

pub struct JsonApi {
    kind: ProviderKind,
    transport: Rc<dyn HttpTransport>,
    endpoint: Url,
    address: AddressParam,
    params: Vec<(&'static str, String)>,
    limit_param: Option<&'static str>,
    candidates: Candidates,
    position: Position,
    error_message: Option<&'static str>,
    signer: Option<UrlSigner>,
}

impl JsonApi {
    pub fn new(
        kind: ProviderKind,
        transport: Rc<dyn HttpTransport>,
        endpoint: &str,
        address: AddressParam,
        candidates: Candidates,
        position: Position,
    ) -> Result<Self, ProviderError> {
        let endpoint = Url::parse(endpoint).map_err(|err| {
            ProviderError::Configuration(format!("Invalid endpoint '{endpoint}': {err}"))
        })?;
        if endpoint.cannot_be_a_base() {
            return Err(ProviderError::Configuration(format!(
                "Invalid endpoint '{endpoint}'"
            )));
        }
        Ok(Self {
            kind,
            transport,
            endpoint,
            address,
            params: vec![],
            limit_param: None,
            candidates,
            position,
            error_message: None,
            signer: None,
        })
    }

    pub fn param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.params.push((name, value.into()));
        self
    }

    pub fn param_opt(self, name: &'static str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.param(name, value),
            None => self,
        }
    }

    /// The query parameter that restricts the number of results.
    pub fn limit_param(mut self, name: &'static str) -> Self {
        self.limit_param = Some(name);
        self
    }

    /// A response with a message at this location is a failure.
    pub fn error_message(mut self, pointer: &'static str) -> Self {
        self.error_message = Some(pointer);
        self
    }

    pub fn signed(mut self, signer: UrlSigner) -> Self {
        self.signer = Some(signer);
        self
    }

    pub fn kind(&self) -> ProviderKind {
        self.kind
    }

    pub fn request(&self, text: &str, limit: usize) -> Result<HttpRequest, ProviderError> {
        let mut request = match self.address {
            AddressParam::Query(name) => HttpRequest::get(self.endpoint.as_str()).query(name, text),
            AddressParam::PathSegment { suffix } => {
                let mut url = self.endpoint.clone();
                if let Ok(mut segments) = url.path_segments_mut() {
                    segments.pop_if_empty().push(&format!("{text}{suffix}"));
                }
                HttpRequest::get(url.as_str())
            }
        };
        for (name, value) in &self.params {
            request = request.query(name, value.as_str());
        }
        if let Some(name) = self.limit_param {
            request = request.query(name, limit.to_string());
        }
        match &self.signer {
            Some(signer) => signer.sign(request),
            None => Ok(request),
        }
    }

    pub fn parse(&self, body: &str, limit: usize) -> Result<Vec<Coordinates>, ProviderError> {
        let doc: Value = serde_json::from_str(body)
            .map_err(|err| ProviderError::InvalidResponse(err.to_string()))?;
        if let Some(message) = self
            .error_message
            .and_then(|pointer| doc.pointer(pointer))
            .and_then(Value::as_str)
            .filter(|message| !message.is_empty())
        {
            return Err(ProviderError::InvalidResponse(message.to_owned()));
        }
        let mut results = vec![];
        for candidate in self.candidates.select(&doc) {
            if results.len() >= limit {
                break;
            }
            if let Some(pos) = self.position.read(candidate)? {
                results.push(pos);
            }
        }
        Ok(results)
    }
}

impl GeocodingProvider for JsonApi {
    fn geocode(&self, text: &str, limit: usize) -> Result<Vec<Coordinates>, ProviderError> {
        let request = self.request(text, limit)?;
        let body = self.transport.get(&request)?;
        let results = self.parse(&body, limit)?;
        log::debug!("{} found {} result(s)", self.kind, results.len());
        Ok(results)
    }
}

impl Candidates {
    fn select(self, doc: &Value) -> Vec<&Value> {
        match self {
            Self::Array(pointer) => doc
                .pointer(pointer)
                .and_then(Value::as_array)
                .map(|results| results.iter().collect())
                .unwrap_or_default(),
            Self::Single(pointer) => doc
                .pointer(pointer)
                .filter(|result| result.is_object())
                .into_iter()
                .collect(),
            Self::Values(pointer) => doc
                .pointer(pointer)
                .and_then(Value::as_object)
                .map(|results| results.values().filter(|v| !v.is_null()).collect())
                .unwrap_or_default(),
        }
    }
}

impl Position {
    /// Missing coordinates are no error, malformed ones are.
    fn read(self, candidate: &Value) -> Result<Option<Coordinates>, ProviderError> {
        let lat_lng = match self {
            Self::LatLng { lat, lng } => {
                match (number(candidate.pointer(lat))?, number(candidate.pointer(lng))?) {
                    (Some(lat), Some(lng)) => Some((lat, lng)),
                    _ => None,
                }
            }
            Self::LatLngPair(pointer) => pair(candidate.pointer(pointer))?,
            Self::LngLatPair(pointer) => pair(candidate.pointer(pointer))?.map(|(lng, lat)| (lat, lng)),
            Self::LngLatText(pointer) => {
                text_pair(candidate.pointer(pointer))?.map(|(lng, lat)| (lat, lng))
            }
        };
        lat_lng
            .map(|(lat, lng)| Coordinates::try_from_lat_lng_deg(lat, lng))
            .transpose()
            .map_err(|err| ProviderError::InvalidResponse(err.to_string()))
    }
}

fn number(value: Option<&Value>) -> Result<Option<f64>, ProviderError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(num)) => Ok(num.as_f64()),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => parse_number(s).map(Some),
        Some(other) => Err(ProviderError::InvalidResponse(format!(
            "Expected a number instead of {other}"
        ))),
    }
}

fn parse_number(s: &str) -> Result<f64, ProviderError> {
    s.trim()
        .parse()
        .map_err(|_| ProviderError::InvalidResponse(format!("Invalid number '{s}'")))
}

fn pair(value: Option<&Value>) -> Result<Option<(f64, f64)>, ProviderError> {
    let Some(value) = value.filter(|v| !v.is_null()) else {
        return Ok(None);
    };
    match value.as_array().map(Vec::as_slice) {
        Some([first, second, ..]) => match (number(Some(first))?, number(Some(second))?) {
            (Some(first), Some(second)) => Ok(Some((first, second))),
            _ => Ok(None),
        },
        _ => Err(ProviderError::InvalidResponse(format!(
            "Expected a pair of numbers instead of {value}"
        ))),
    }
}

fn text_pair(value: Option<&Value>) -> Result<Option<(f64, f64)>, ProviderError> {
    let Some(text) = value.and_then(Value::as_str) else {
        return Ok(None);
    };
    let mut numbers = text.split_whitespace();
    match (numbers.next(), numbers.next()) {
        (Some(first), Some(second)) => Ok(Some((parse_number(first)?, parse_number(second)?))),
        _ => Err(ProviderError::InvalidResponse(format!(
            "Expected two numbers instead of '{text}'"
        ))),
    }
}
