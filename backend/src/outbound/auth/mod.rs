//! Authentication adapters.

mod configured_login_service;

pub use configured_login_service::ConfiguredLoginService;
