//! Pluggable sign-in.
//!
//! Accounts gate the favorites feature only; browsing works without them.

use async_trait::async_trait;
use contracts::system::auth::UserInfo;
use thiserror::Error;

use super::api;
use crate::shared::api::ApiError;
use crate::shared::config::{AppConfig, AuthMode};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthError {
    #[error("Введите логин и пароль")]
    MissingCredentials,
    #[error("{0}")]
    Rejected(String),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl AuthError {
    pub fn user_message(&self) -> String {
        match self {
            AuthError::Api(e) => e.user_message(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.username.trim().is_empty() || self.password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        Ok(())
    }
}

#[async_trait(?Send)]
pub trait AuthProvider {
    async fn sign_in(&self, credentials: &Credentials) -> Result<UserInfo, AuthError>;
    async fn sign_out(&self) -> Result<(), AuthError>;
}

/// Session on the API server (`POST /login`, `POST /logout`)
#[derive(Debug, Clone)]
pub struct ServerAuthProvider {
    base_url: String,
}

impl ServerAuthProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[async_trait(?Send)]
impl AuthProvider for ServerAuthProvider {
    async fn sign_in(&self, credentials: &Credentials) -> Result<UserInfo, AuthError> {
        credentials.validate()?;
        api::login(
            &self.base_url,
            credentials.username.trim().to_string(),
            credentials.password.clone(),
        )
        .await
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        api::logout(&self.base_url).await
    }
}

/// Local demo account, never leaves the browser. Opt-in via `TENDER_AUTH=demo`.
#[derive(Debug, Clone, Default)]
pub struct DemoAuthProvider;

#[async_trait(?Send)]
impl AuthProvider for DemoAuthProvider {
    async fn sign_in(&self, credentials: &Credentials) -> Result<UserInfo, AuthError> {
        let username = credentials.username.trim();
        Ok(UserInfo {
            id: 0,
            username: if username.is_empty() {
                "Demo User".to_string()
            } else {
                username.to_string()
            },
            email: Some("demo@test.com".to_string()),
            is_admin: false,
        })
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        Ok(())
    }
}

/// Provider selected by configuration
#[derive(Debug, Clone)]
pub enum AuthBackend {
    Server(ServerAuthProvider),
    Demo(DemoAuthProvider),
}

impl AuthBackend {
    pub fn from_config(config: &AppConfig) -> Self {
        match config.auth.mode {
            AuthMode::Server => AuthBackend::Server(ServerAuthProvider::new(config.api.base_url.clone())),
            AuthMode::Demo => AuthBackend::Demo(DemoAuthProvider),
        }
    }

    pub fn is_demo(&self) -> bool {
        matches!(self, AuthBackend::Demo(_))
    }
}

#[async_trait(?Send)]
impl AuthProvider for AuthBackend {
    async fn sign_in(&self, credentials: &Credentials) -> Result<UserInfo, AuthError> {
        match self {
            AuthBackend::Server(p) => p.sign_in(credentials).await,
            AuthBackend::Demo(p) => p.sign_in(credentials).await,
        }
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        match self {
            AuthBackend::Server(p) => p.sign_out().await,
            AuthBackend::Demo(p) => p.sign_out().await,
        }
    }
}
