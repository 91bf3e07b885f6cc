use base64::{
    engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD},
    Engine as _,
};
use geochain_core::gateways::{
    geocode::ProviderError,
    http::{HttpRequest, TransportError},
};
use hmac::{Hmac, Mac};
use reqwest::Url;
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

/// Signs request URLs with a private key,
/// see <https://developers.google.com/maps/documentation/maps-static/digital-signature>.
pub struct UrlSigner {
    key: Vec<u8>,
}

impl UrlSigner {
    /// The key is expected in URL-safe base64 encoding.
    pub fn from_base64(private_key: &str) -> Result<Self, ProviderError> {
        let private_key = private_key.trim();
        let key = URL_SAFE
            .decode(private_key)
            .or_else(|_| URL_SAFE_NO_PAD.decode(private_key))
            .map_err(|err| ProviderError::Configuration(format!("Invalid private key: {err}")))?;
        Ok(Self { key })
    }

    pub fn signature(&self, path_and_query: &str) -> Result<String, ProviderError> {
        let mut mac = HmacSha1::new_from_slice(&self.key)
            .map_err(|err| ProviderError::Configuration(err.to_string()))?;
        mac.update(path_and_query.as_bytes());
        Ok(URL_SAFE.encode(mac.finalize().into_bytes()))
    }

    /// Encode all query parameters into the URL and append the signature.
    pub fn sign(&self, request: HttpRequest) -> Result<HttpRequest, ProviderError> {
        let mut url = Url::parse_with_params(&request.url, &request.query)
            .map_err(|_| TransportError::Url(request.url.clone()))?;
        let path_and_query = match url.query() {
            Some(query) => format!("{}?{query}", url.path()),
            None => url.path().to_owned(),
        };
        let signature = self.signature(&path_and_query)?;
        url.query_pairs_mut().append_pair("signature", &signature);
        Ok(HttpRequest::get(url))
    }
}
