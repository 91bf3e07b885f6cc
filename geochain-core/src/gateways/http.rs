use std::rc::Rc;

use thiserror::Error;

use crate::entities::TransportKind;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Invalid URL '{0}'")]
    Url(String),
    #[error("HTTP request failed: {0}")]
    Request(String),
    #[error("Unexpected HTTP status {0}")]
    Status(u16),
    #[error("Unable to initialize the HTTP client: {0}")]
    Init(String),
}

/// A plain HTTP GET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub query: Vec<(String, String)>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            query: vec![],
        }
    }

    pub fn query(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query.push((key.to_owned(), value.into()));
        self
    }

    /// Only adds the parameter if a value is given.
    pub fn query_opt(self, key: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }
}

/// Executes the HTTP requests of all providers within a single resolution.
pub trait HttpTransport {
    fn kind(&self) -> TransportKind;
    /// Send the request and return the body of a successful response.
    fn get(&self, request: &HttpRequest) -> Result<String, TransportError>;
}

pub trait TransportFactory {
    /// Create a new, unshared transport.
    fn create(&self, kind: TransportKind) -> Result<Rc<dyn HttpTransport>, TransportError>;
}
