//! Backend entry-point: loads settings, selects adapters and serves the API.

mod server;

use actix_web::web;
use color_eyre::eyre::{Context, Result, eyre};
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use product_hub::inbound::http::health::HealthState;
use product_hub::inbound::http::session_config::{BuildMode, session_settings_from_env};
use server::{
    ServerConfig, ServerSettings, create_server, item_repository_from_settings,
    login_service_from_settings,
};

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(error) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(%error, "tracing init failed");
    }

    let settings = ServerSettings::load().map_err(|err| eyre!("invalid server settings: {err}"))?;
    let env = DefaultEnv::new();
    let session = session_settings_from_env(&env, BuildMode::from_debug_assertions())
        .wrap_err("invalid session configuration")?;
    let repository = item_repository_from_settings(&settings)
        .await
        .wrap_err("failed to prepare item store")?;

    let mut config = ServerConfig::new(
        session.key,
        session.cookie_secure,
        session.same_site,
        settings.bind_addr(),
    )
    .with_item_repository(repository)
    .with_store_timeout(settings.store_timeout());
    if let Some(login_service) = login_service_from_settings(&settings) {
        config = config.with_login_service(login_service);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config).wrap_err("failed to start server")?;
    info!(bind_addr = %settings.bind_addr(), "product hub listening");
    server.await.wrap_err("server terminated with an error")
}
