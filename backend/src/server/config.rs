//! HTTP server configuration object.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use actix_web::cookie::{Key, SameSite};
use product_hub::domain::DEFAULT_STORE_TIMEOUT;
use product_hub::domain::ports::{ItemRepository, LoginService};

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) store_timeout: Duration,
    pub(crate) item_repository: Option<Arc<dyn ItemRepository>>,
    pub(crate) login: Option<Arc<dyn LoginService>>,
}

impl ServerConfig {
    /// Session and listener settings; ports fall back to fixtures until set.
    #[must_use]
    pub fn new(key: Key, cookie_secure: bool, same_site: SameSite, bind_addr: SocketAddr) -> Self {
        Self {
            key,
            cookie_secure,
            same_site,
            bind_addr,
            store_timeout: DEFAULT_STORE_TIMEOUT,
            item_repository: None,
            login: None,
        }
    }

    /// Serve the catalogue from `repository`.
    #[must_use]
    pub fn with_item_repository(mut self, repository: Arc<dyn ItemRepository>) -> Self {
        self.item_repository = Some(repository);
        self
    }

    /// Authenticate sign-ins through `login`.
    #[must_use]
    pub fn with_login_service(mut self, login: Arc<dyn LoginService>) -> Self {
        self.login = Some(login);
        self
    }

    /// Bound each item store call by `timeout`.
    #[must_use]
    pub fn with_store_timeout(mut self, timeout: Duration) -> Self {
        self.store_timeout = timeout;
        self
    }
}
