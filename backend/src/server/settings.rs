//! Server settings loaded via OrthoConfig.
//!
//! Values come from `PRODUCT_HUB_*` environment variables, an optional
//! configuration file and command-line flags.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use product_hub::domain::DEFAULT_STORE_TIMEOUT;

const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 8080);

fn default_items_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("items.json")
}

/// Runtime settings for the catalogue server.
#[derive(Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PRODUCT_HUB")]
pub struct ServerSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<SocketAddr>,
    /// PostgreSQL URL; without one the JSON document file is served.
    pub database_url: Option<String>,
    /// JSON document file holding the catalogue.
    pub items_path: Option<PathBuf>,
    /// Upper bound on a single item store call, in milliseconds.
    pub store_timeout_ms: Option<u64>,
    /// Email accepted by the sign-in endpoint.
    pub login_email: Option<String>,
    /// Password accepted by the sign-in endpoint.
    pub login_password: Option<String>,
    /// Copy the document file into the database at startup.
    #[ortho_config(default = false)]
    pub seed_items: bool,
}

impl ServerSettings {
    /// Socket address to listen on.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr.unwrap_or(DEFAULT_BIND_ADDR)
    }

    /// Location of the JSON document catalogue.
    pub fn items_path(&self) -> PathBuf {
        self.items_path.clone().unwrap_or_else(default_items_path)
    }

    /// Deadline applied to each item store read.
    pub fn store_timeout(&self) -> Duration {
        self.store_timeout_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_STORE_TIMEOUT)
    }

    /// Configured credential pair, when both halves are present and non-blank.
    pub fn login_credentials(&self) -> Option<(&str, &str)> {
        let email = self.login_email.as_deref().map(str::trim)?;
        let password = self.login_password.as_deref()?;
        (!email.is_empty() && !password.is_empty()).then_some((email, password))
    }
}

impl std::fmt::Debug for ServerSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerSettings")
            .field("bind_addr", &self.bind_addr)
            .field("database_url", &self.database_url.as_ref().map(|_| "<set>"))
            .field("items_path", &self.items_path)
            .field("store_timeout_ms", &self.store_timeout_ms)
            .field("login_email", &self.login_email)
            .field("login_password", &self.login_password.as_ref().map(|_| "<redacted>"))
            .field("seed_items", &self.seed_items)
            .finish()
    }
}
