//! Adapter selection and HTTP state assembly.

use std::path::Path;
use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};

use product_hub::domain::CatalogueService;
use product_hub::domain::ports::{
    FixtureItemRepository, ItemRepository, LoginService, RejectingLoginService,
};
use product_hub::inbound::http::state::HttpState;
use product_hub::outbound::auth::ConfiguredLoginService;
use product_hub::outbound::document_store::{DocumentStoreError, JsonFileItemRepository};
use product_hub::outbound::persistence::{
    DbPool, DieselItemRepository, MigrationError, PoolConfig, PoolError, run_pending_migrations,
};

use super::{ServerConfig, ServerSettings};

/// Failures while preparing the item store.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    DocumentStore(#[from] DocumentStoreError),
    #[error(transparent)]
    Migration(#[from] MigrationError),
    #[error(transparent)]
    Pool(#[from] PoolError),
    #[error("failed to seed item store: {message}")]
    Seed { message: String },
}

/// Pick the item store named by `settings`.
///
/// With a database URL, migrations run and the document file is optionally
/// copied in; otherwise the document file is served from memory.
pub async fn item_repository_from_settings(
    settings: &ServerSettings,
) -> Result<Arc<dyn ItemRepository>, StartupError> {
    let items_path = settings.items_path();
    match settings.database_url.as_deref() {
        Some(url) => {
            let repository = database_repository(url, settings.seed_items, &items_path).await?;
            Ok(Arc::new(repository))
        }
        None => {
            info!(path = %items_path.display(), "serving items from document file");
            Ok(Arc::new(JsonFileItemRepository::load(&items_path)?))
        }
    }
}

async fn database_repository(
    url: &str,
    seed: bool,
    items_path: &Path,
) -> Result<DieselItemRepository, StartupError> {
    run_pending_migrations(url).await?;
    let pool = DbPool::new(PoolConfig::new(url)).await?;
    let repository = DieselItemRepository::new(pool);

    if seed {
        let documents = JsonFileItemRepository::load(items_path)?;
        let inserted = repository
            .seed(documents.items())
            .await
            .map_err(|err| StartupError::Seed {
                message: err.to_string(),
            })?;
        info!(inserted, path = %items_path.display(), "seeded item store");
    }
    Ok(repository)
}

/// Login service for the configured credential pair, if any.
pub fn login_service_from_settings(settings: &ServerSettings) -> Option<Arc<dyn LoginService>> {
    match settings.login_credentials() {
        Some((email, password)) => Some(Arc::new(ConfiguredLoginService::new(email, password))),
        None => {
            warn!("no login credentials configured; sign-in is disabled");
            None
        }
    }
}

/// Assemble handler state, using fixtures for ports left unset.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let repository = config
        .item_repository
        .clone()
        .unwrap_or_else(|| Arc::new(FixtureItemRepository));
    let login_service = config
        .login
        .clone()
        .unwrap_or_else(|| Arc::new(RejectingLoginService));

    web::Data::new(HttpState::new(
        CatalogueService::with_timeout(repository, config.store_timeout),
        login_service,
    ))
}

#[cfg(test)]
mod tests {
    //! Unit tests for adapter selection.

    use super::*;
    use std::ffi::OsString;
    use std::io::Write;
    use std::net::SocketAddr;

    use actix_web::cookie::{Key, SameSite};
    use env_lock::lock_env;
    use ortho_config::OrthoConfig;
    use product_hub::domain::ErrorCode;
    use rstest::rstest;
    use tempfile::NamedTempFile;

    fn settings_for(items_path: &Path) -> ServerSettings {
        let _guard = lock_env([
            ("PRODUCT_HUB_DATABASE_URL", None::<String>),
            ("PRODUCT_HUB_LOGIN_EMAIL", None::<String>),
            ("PRODUCT_HUB_LOGIN_PASSWORD", None::<String>),
            ("PRODUCT_HUB_SEED_ITEMS", None::<String>),
            (
                "PRODUCT_HUB_ITEMS_PATH",
                Some(items_path.display().to_string()),
            ),
        ]);
        ServerSettings::load_from_iter([OsString::from("product-hub")]).expect("settings")
    }

    fn server_config() -> ServerConfig {
        let addr: SocketAddr = "127.0.0.1:0".parse().expect("socket address");
        ServerConfig::new(Key::generate(), false, SameSite::Lax, addr)
    }

    #[rstest]
    #[tokio::test]
    async fn document_file_is_used_without_a_database() {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(br#"[{"_id": "a1", "name": "Alpha", "price": 10}]"#)
            .expect("write documents");

        let repository = item_repository_from_settings(&settings_for(file.path()))
            .await
            .expect("document store");

        assert_eq!(repository.list().await.expect("list").len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn unreadable_document_file_fails_startup() {
        let dir = tempfile::tempdir().expect("temp dir");
        let result = item_repository_from_settings(&settings_for(&dir.path().join("none.json"))).await;
        assert!(matches!(result, Err(StartupError::DocumentStore(_))));
    }

    #[rstest]
    fn login_is_disabled_without_credentials() {
        let dir = tempfile::tempdir().expect("temp dir");
        assert!(login_service_from_settings(&settings_for(dir.path())).is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn unset_ports_fall_back_to_fixtures() {
        let state = build_http_state(&server_config());

        let items = state.catalogue.list_items().await.expect("fixture list");
        assert!(items.is_empty());

        let credentials = product_hub::domain::LoginCredentials::try_from_parts("a@b.c", "pw")
            .expect("credentials shape");
        let err = state
            .login
            .authenticate(&credentials)
            .await
            .expect_err("sign-in disabled");
        assert_eq!(err.code(), ErrorCode::Unauthorized);
    }
}
