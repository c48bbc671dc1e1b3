//! Application settings loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Runtime configuration, drawn from CLI flags, `QUADRANGLE_*` environment
/// variables, or a config file.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "QUADRANGLE")]
pub struct AppSettings {
    /// Interface to bind.
    pub bind: Option<String>,
    /// TCP port to listen on.
    pub port: Option<u16>,
    /// Emit log records as JSON lines instead of human-readable text.
    #[ortho_config(default = false)]
    pub log_json: bool,
}

impl AppSettings {
    /// Return the configured bind interface, falling back to all interfaces.
    pub fn bind(&self) -> &str {
        self.bind.as_deref().unwrap_or(DEFAULT_BIND)
    }

    /// Return the configured port, falling back to the default.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// The `(interface, port)` pair handed to the listener.
    pub fn bind_addr(&self) -> (String, u16) {
        (self.bind().to_owned(), self.port())
    }
}
