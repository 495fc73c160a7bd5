//! Domain service for advertiser accounts: registration, credential checks
//! and the password reset flow.

use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Invalid or expired reset token")]
    InvalidToken,

    #[error("Account not found")]
    NotFound,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sea_orm::DbErr> for AccountError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for AccountError {
    fn from(err: anyhow::Error) -> Self {
        if err.downcast_ref::<sea_orm::DbErr>().is_some() {
            Self::Database(format!("{err:#}"))
        } else {
            Self::Internal(format!("{err:#}"))
        }
    }
}

#[derive(Debug, Clone)]
pub struct AdvertiserInfo {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub active: bool,
}

/// A freshly issued reset token. Delivering it to the owner is up to the caller.
#[derive(Debug, Clone)]
pub struct IssuedResetToken {
    pub username: String,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

#[async_trait::async_trait]
pub trait AccountService: Send + Sync {
    /// Creates an active advertiser account.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::Conflict`] if the username or email is taken.
    async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<AdvertiserInfo, AccountError>;

    async fn find_by_username(&self, username: &str) -> Result<AdvertiserInfo, AccountError>;

    /// True when the account exists, is active and the password matches.
    async fn check_credentials(&self, username: &str, password: &str) -> Result<bool, AccountError>;

    /// Issues a reset token for the active account registered under `email`,
    /// replacing any earlier one.
    async fn request_password_reset(&self, email: &str) -> Result<IssuedResetToken, AccountError>;

    /// Sets a new password if `token` is the account's current, unexpired
    /// token, then clears it so it cannot be used again.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::InvalidToken`] for unknown accounts, mismatched
    /// or expired tokens.
    async fn reset_password(
        &self,
        username: &str,
        token: &str,
        new_password: &str,
    ) -> Result<(), AccountError>;
}
