//! Authentication capability and its mock transport.
//!
//! TRADE-OFFS
//! ==========
//! The directory transport mimics the real backend's two-step handshake
//! (token issuance, then profile lookup against that token) and its latency,
//! so the controller's sequencing is exercised the same way it would be in
//! production. Failures are never retried here; the controller converts them
//! to a signed-out session.

use std::collections::HashMap;
use std::fmt::Write;
use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::session::Identity;
use crate::user_type::UserType;

const AUTH_LATENCY: Duration = Duration::from_millis(300);

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex session token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Sign-in form contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }
}

/// Token plus resolved identity returned by a successful sign-in.
#[derive(Debug, Clone)]
pub struct AuthSuccess {
    pub token: String,
    pub identity: Identity,
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("missing credentials")]
    MissingCredentials,
    #[error("malformed credentials: {0}")]
    Malformed(String),
    #[error("credentials rejected for {0}")]
    Rejected(String),
    #[error("token not recognized")]
    InvalidToken,
}

/// Capability that exchanges credentials for a token and identity. Called
/// exactly once per session, at startup.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, credentials: &Credentials) -> Result<AuthSuccess, AuthError>;
}

#[derive(Debug, Clone)]
struct Account {
    password: String,
    name: String,
    user_type: UserType,
}

/// Mock transport backed by an in-memory account directory.
#[derive(Debug)]
pub struct DirectoryAuthenticator {
    accounts: HashMap<String, Account>,
    latency: Duration,
}

impl DirectoryAuthenticator {
    /// Directory with the portal's demo account.
    #[must_use]
    pub fn new() -> Self {
        let mut accounts = HashMap::new();
        accounts.insert(
            "leila@example.com".to_owned(),
            Account {
                password: "password123".to_owned(),
                name: "Leïla".to_owned(),
                user_type: UserType::ParticulierWithoutZeno,
            },
        );
        Self { accounts, latency: AUTH_LATENCY }
    }

    /// Zero-latency directory for tests.
    #[must_use]
    pub fn instant() -> Self {
        Self { latency: Duration::ZERO, ..Self::new() }
    }

    /// Add an account to the directory.
    #[must_use]
    pub fn with_account(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
        user_type: UserType,
    ) -> Self {
        self.accounts.insert(
            username.into(),
            Account { password: password.into(), name: name.into(), user_type },
        );
        self
    }

    /// Step one of the handshake: validate credentials, issue a token.
    async fn issue_token(&self, credentials: &Credentials) -> Result<String, AuthError> {
        tokio::time::sleep(self.latency).await;

        if credentials.username.is_empty() || credentials.password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        if !credentials.username.contains('@') {
            return Err(AuthError::Malformed(credentials.username.clone()));
        }

        match self.accounts.get(&credentials.username) {
            Some(account) if account.password == credentials.password => Ok(generate_token()),
            _ => Err(AuthError::Rejected(credentials.username.clone())),
        }
    }

    /// Step two: look up the profile for an issued token.
    async fn fetch_profile(&self, username: &str, token: &str) -> Result<Identity, AuthError> {
        tokio::time::sleep(self.latency).await;

        if token.is_empty() {
            return Err(AuthError::InvalidToken);
        }
        let account = self
            .accounts
            .get(username)
            .ok_or_else(|| AuthError::Rejected(username.to_owned()))?;
        Ok(Identity {
            name: account.name.clone(),
            user_type: account.user_type,
            // Populated later, from the first data bundle.
            contract_type: None,
        })
    }
}

impl Default for DirectoryAuthenticator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Authenticator for DirectoryAuthenticator {
    async fn authenticate(&self, credentials: &Credentials) -> Result<AuthSuccess, AuthError> {
        let token = self.issue_token(credentials).await?;
        let identity = self.fetch_profile(&credentials.username, &token).await?;
        Ok(AuthSuccess { token, identity })
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
