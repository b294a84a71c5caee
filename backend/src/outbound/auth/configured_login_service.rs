//! `LoginService` adapter accepting a single configured credential pair.
//!
//! The catalogue has no user store. One operator account is configured at
//! startup and receives a user id that stays stable for the process
//! lifetime.

use async_trait::async_trait;
use zeroize::Zeroizing;

use crate::domain::ports::LoginService;
use crate::domain::{Error, LoginCredentials, UserId};

/// Login service backed by one email/password pair.
pub struct ConfiguredLoginService {
    email: String,
    password: Zeroizing<String>,
    user_id: UserId,
}

impl ConfiguredLoginService {
    /// Accept `email` (compared case-insensitively) with `password`.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self::with_user_id(email, password, UserId::random())
    }

    /// Accept the pair and answer with a fixed user id.
    pub fn with_user_id(
        email: impl Into<String>,
        password: impl Into<String>,
        user_id: UserId,
    ) -> Self {
        Self {
            email: email.into().trim().to_owned(),
            password: Zeroizing::new(password.into()),
            user_id,
        }
    }

    /// Identifier issued on successful sign-in.
    pub fn user_id(&self) -> UserId {
        self.user_id
    }
}

impl std::fmt::Debug for ConfiguredLoginService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfiguredLoginService")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("user_id", &self.user_id)
            .finish()
    }
}

#[async_trait]
impl LoginService for ConfiguredLoginService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error> {
        let email_matches = credentials.email().eq_ignore_ascii_case(&self.email);
        if !email_matches || credentials.password() != self.password.as_str() {
            return Err(Error::unauthorized("invalid credentials"));
        }
        Ok(self.user_id)
    }
}
