use std::{rc::Rc, time::Duration};

use geochain_core::{
    entities::TransportKind,
    gateways::http::{HttpRequest, HttpTransport, TransportError, TransportFactory},
};
use reqwest::{
    blocking::Client,
    header::{self, HeaderMap, HeaderValue},
    Url,
};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub const DEFAULT_USER_AGENT: &str = concat!("geochain/", env!("CARGO_PKG_VERSION"));

/// Creates blocking [reqwest] clients.
#[derive(Debug, Clone)]
pub struct ReqwestTransportFactory {
    timeout: Duration,
    user_agent: String,
}

impl Default for ReqwestTransportFactory {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }
}

impl ReqwestTransportFactory {
    pub fn new(timeout: Duration, user_agent: impl Into<String>) -> Self {
        Self {
            timeout,
            user_agent: user_agent.into(),
        }
    }

    fn client(&self, kind: TransportKind) -> reqwest::Result<Client> {
        let builder = Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.as_str());
        let builder = match kind {
            TransportKind::DefaultHttp => builder,
            // A fresh connection for every request
            TransportKind::SocketHttp => {
                let mut headers = HeaderMap::new();
                headers.insert(header::CONNECTION, HeaderValue::from_static("close"));
                builder
                    .http1_only()
                    .pool_max_idle_per_host(0)
                    .default_headers(headers)
            }
        };
        builder.build()
    }
}

impl TransportFactory for ReqwestTransportFactory {
    fn create(&self, kind: TransportKind) -> Result<Rc<dyn HttpTransport>, TransportError> {
        let client = self
            .client(kind)
            .map_err(|err| TransportError::Init(err.to_string()))?;
        log::debug!("Created HTTP transport '{kind}'");
        Ok(Rc::new(ReqwestTransport { kind, client }))
    }
}

#[derive(Debug)]
pub struct ReqwestTransport {
    kind: TransportKind,
    client: Client,
}

impl HttpTransport for ReqwestTransport {
    fn kind(&self) -> TransportKind {
        self.kind
    }

    fn get(&self, request: &HttpRequest) -> Result<String, TransportError> {
        let url = Url::parse(&request.url).map_err(|_| TransportError::Url(request.url.clone()))?;
        log::debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .query(&request.query)
            .send()
            .map_err(|err| TransportError::Request(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            log::debug!("Geocoding service responded with {status}");
            return Err(TransportError::Status(status.as_u16()));
        }
        response
            .text()
            .map_err(|err| TransportError::Request(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_both_kinds_of_transport() {
        let factory = ReqwestTransportFactory::default();
        for kind in [TransportKind::DefaultHttp, TransportKind::SocketHttp] {
            assert_eq!(kind, factory.create(kind).unwrap().kind());
        }
    }

    #[test]
    fn reject_invalid_urls_before_sending() {
        let transport = ReqwestTransportFactory::default()
            .create(TransportKind::DefaultHttp)
            .unwrap();
        let err = transport
            .get(&HttpRequest::get("not a url").query("q", "Berlin"))
            .unwrap_err();
        assert!(matches!(err, TransportError::Url(url) if url == "not a url"));
    }
}
