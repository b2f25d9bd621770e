//! Bind address for the HTTP server.

use serde::{Deserialize, Serialize};

/// Port the service listens on unless configured otherwise
pub const DEFAULT_PORT: u16 = 3000;

/// Listen on every interface unless configured otherwise
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Where the server binds.
///
/// Missing keys take their defaults; unknown keys are rejected so a typo
/// such as `"prot"` does not silently bind the default port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_PORT)
    }
}

impl HttpServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Default host on the given port
    pub fn with_port(port: u16) -> Self {
        Self::new(DEFAULT_HOST, port)
    }

    /// `host:port`, as accepted by `TcpListener::bind`
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
