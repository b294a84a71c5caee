//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and depend only on domain
//! services and ports, so tests can swap in doubles without I/O.

use std::sync::Arc;

use crate::domain::CatalogueService;
use crate::domain::ports::LoginService;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Catalogue read service.
    pub catalogue: Arc<CatalogueService>,
    /// Credential check for sign-in.
    pub login: Arc<dyn LoginService>,
}

impl HttpState {
    /// Bundle the catalogue read service with the login port.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use product_hub::domain::CatalogueService;
    /// use product_hub::domain::ports::{FixtureItemRepository, RejectingLoginService};
    /// use product_hub::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(
    ///     CatalogueService::new(Arc::new(FixtureItemRepository)),
    ///     Arc::new(RejectingLoginService),
    /// );
    /// let _catalogue = state.catalogue.clone();
    /// ```
    pub fn new(catalogue: CatalogueService, login: Arc<dyn LoginService>) -> Self {
        Self {
            catalogue: Arc::new(catalogue),
            login,
        }
    }
}
