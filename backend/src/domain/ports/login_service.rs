//! Driving port for sign-in.
//!
//! Inbound adapters authenticate credentials through this port without
//! knowing where the accepted credentials come from, so handler tests can
//! substitute a double.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, UserId};

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the authenticated user id.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error>;
}

/// Authenticator that rejects every attempt.
///
/// Used when no credential pair is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct RejectingLoginService;

#[async_trait]
impl LoginService for RejectingLoginService {
    async fn authenticate(&self, _credentials: &LoginCredentials) -> Result<UserId, Error> {
        Err(Error::unauthorized("invalid credentials"))
    }
}
