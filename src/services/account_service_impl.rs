//! `SeaORM` implementation of the `AccountService` trait.

use anyhow::Context;
use async_trait::async_trait;
use tokio::task;
use tracing::{info, warn};

use crate::accounts::{self, Account};
use crate::config::SecurityConfig;
use crate::db::{AdvertiserRepository, Store};
use crate::models::Advertiser;
use crate::services::account_service::{
    AccountError, AccountService, AdvertiserInfo, IssuedResetToken,
};

const MIN_PASSWORD_LEN: usize = 8;

pub struct SeaOrmAccountService {
    store: Store,
    security: SecurityConfig,
}

impl SeaOrmAccountService {
    #[must_use]
    pub const fn new(store: Store, security: SecurityConfig) -> Self {
        Self { store, security }
    }

    // Argon2 is CPU bound; keep it off the async workers.
    async fn hash_password(&self, password: &str) -> Result<String, AccountError> {
        let password = password.to_string();
        let security = self.security.clone();

        let hash = task::spawn_blocking(move || accounts::hash_password(&password, Some(&security)))
            .await
            .context("Password hashing task panicked")??;

        Ok(hash)
    }
}

fn validate_password(password: &str) -> Result<(), AccountError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AccountError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

fn validate_registration(username: &str, email: &str) -> Result<(), AccountError> {
    if username.trim().is_empty() || username.chars().count() > 64 {
        return Err(AccountError::Validation(
            "Username must be between 1 and 64 characters".to_string(),
        ));
    }

    let email = email.trim();
    let valid_email = email.len() <= 120
        && email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
    if !valid_email {
        return Err(AccountError::Validation(format!("Invalid email: {email}")));
    }

    Ok(())
}

impl From<Advertiser> for AdvertiserInfo {
    fn from(advertiser: Advertiser) -> Self {
        Self {
            id: advertiser.id,
            username: advertiser.username,
            email: advertiser.email,
            active: advertiser.active,
        }
    }
}

#[async_trait]
impl AccountService for SeaOrmAccountService {
    async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<AdvertiserInfo, AccountError> {
        let username = username.trim();
        let email = email.trim();
        validate_registration(username, email)?;
        validate_password(password)?;

        let password_hash = self.hash_password(password).await?;

        let txn = self.store.begin().await?;
        let advertisers = AdvertiserRepository::new(&txn);

        if advertisers.get_by_username(username).await?.is_some() {
            return Err(AccountError::Conflict(format!(
                "Username '{username}' is already registered"
            )));
        }
        if advertisers.get_by_email(email).await?.is_some() {
            return Err(AccountError::Conflict(format!(
                "Email '{email}' is already registered"
            )));
        }

        let advertiser = advertisers.insert(username, email, &password_hash).await?;
        txn.commit().await?;

        info!(id = advertiser.id, username, "Registered advertiser");
        Ok(advertiser.into())
    }

    async fn find_by_username(&self, username: &str) -> Result<AdvertiserInfo, AccountError> {
        self.store
            .advertisers()
            .get_by_username(username)
            .await?
            .map(AdvertiserInfo::from)
            .ok_or(AccountError::NotFound)
    }

    async fn check_credentials(&self, username: &str, password: &str) -> Result<bool, AccountError> {
        let Some(advertiser) = self.store.advertisers().get_by_username(username).await? else {
            return Ok(false);
        };

        if !advertiser.active {
            return Ok(false);
        }

        let password = password.to_string();
        let valid = task::spawn_blocking(move || advertiser.check_password(&password))
            .await
            .context("Password verification task panicked")?;

        Ok(valid)
    }

    async fn request_password_reset(&self, email: &str) -> Result<IssuedResetToken, AccountError> {
        let txn = self.store.begin().await?;
        let advertisers = AdvertiserRepository::new(&txn);

        let mut advertiser = advertisers
            .get_by_email(email.trim())
            .await?
            .filter(|a| a.active)
            .ok_or(AccountError::NotFound)?;

        let token = advertiser.generate_reset_token(self.security.reset_token_ttl());
        let expires_at = advertiser
            .reset_token()
            .expires_at()
            .ok_or_else(|| AccountError::Internal("Issued token has no expiry".to_string()))?;

        advertisers.save_credentials(&advertiser).await?;
        txn.commit().await?;

        info!(username = %advertiser.username, %expires_at, "Issued password reset token");
        Ok(IssuedResetToken {
            username: advertiser.username,
            token,
            expires_at,
        })
    }

    async fn reset_password(
        &self,
        username: &str,
        token: &str,
        new_password: &str,
    ) -> Result<(), AccountError> {
        validate_password(new_password)?;
        // Hash before opening the transaction so no connection waits on Argon2.
        let hash = self.hash_password(new_password).await?;

        let txn = self.store.begin().await?;
        let advertisers = AdvertiserRepository::new(&txn);

        let Some(mut advertiser) = advertisers.get_by_username(username).await? else {
            warn!(username, "Password reset attempted for unknown account");
            return Err(AccountError::InvalidToken);
        };

        if !advertiser.active || !advertiser.verify_reset_token(token) {
            warn!(username, "Password reset rejected: invalid or expired token");
            return Err(AccountError::InvalidToken);
        }

        advertiser.set_password_hash(hash);
        advertiser.clear_reset_token();
        advertisers.save_credentials(&advertiser).await?;
        txn.commit().await?;

        info!(username, "Password reset completed");
        Ok(())
    }
}
