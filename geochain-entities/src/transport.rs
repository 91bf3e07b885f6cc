use std::fmt;
use strum::{EnumIter, EnumString};

/// The HTTP execution strategy shared by all providers of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, EnumString)]
pub enum TransportKind {
    /// Pooled connections (keep-alive), negotiated HTTP version.
    #[default]
    #[strum(serialize = "default-http", serialize = "curl")]
    DefaultHttp,
    /// A fresh HTTP/1.1 socket per request that is closed afterwards.
    #[strum(serialize = "socket-http", serialize = "socket")]
    SocketHttp,
}

impl TransportKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DefaultHttp => "default-http",
            Self::SocketHttp => "socket-http",
        }
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
