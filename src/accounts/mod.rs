//! Password and reset-token behavior shared by every account table.
//!
//! `users` (editorial accounts) and `shared_advertisers` both carry a password
//! hash and a reset token. Each domain type implements [`Account`] by exposing
//! those two pieces; the trait supplies the rest.

pub mod reset_token;

pub use reset_token::{ResetToken, TokenState};

use anyhow::Result;
use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::Duration;

use crate::config::SecurityConfig;

pub trait Account {
    fn password_hash(&self) -> Option<&str>;

    fn set_password_hash(&mut self, hash: String);

    fn reset_token(&self) -> &ResetToken;

    fn reset_token_mut(&mut self) -> &mut ResetToken;

    /// Hashes `password` with Argon2id and stores the hash.
    ///
    /// CPU heavy; call from a blocking task when on the async runtime.
    fn set_password(&mut self, password: &str, config: Option<&SecurityConfig>) -> Result<()> {
        let hash = hash_password(password, config)?;
        self.set_password_hash(hash);
        Ok(())
    }

    /// Accounts without a hash never match.
    fn check_password(&self, password: &str) -> bool {
        self.password_hash()
            .is_some_and(|hash| verify_password(hash, password))
    }

    fn generate_reset_token(&mut self, ttl: Duration) -> String {
        self.reset_token_mut().generate(ttl)
    }

    fn verify_reset_token(&self, candidate: &str) -> bool {
        self.reset_token().verify(candidate)
    }

    fn clear_reset_token(&mut self) {
        self.reset_token_mut().clear();
    }
}

/// Hash a password using Argon2id with optional custom params.
/// If config is None, uses the library default params.
pub fn hash_password(password: &str, config: Option<&SecurityConfig>) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    let argon2 = if let Some(cfg) = config {
        let params = Params::new(
            cfg.argon2_memory_cost_kib,
            cfg.argon2_time_cost,
            cfg.argon2_parallelism,
            None,
        )
        .map_err(|e| anyhow::anyhow!("Invalid Argon2 params: {e}"))?;
        Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
    } else {
        Argon2::default()
    };

    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {e}"))?;

    Ok(hash.to_string())
}

/// Params are read back from the PHC string, so hashes made with any config verify.
#[must_use]
pub fn verify_password(hash: &str, password: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        tracing::warn!("Stored password hash is not a valid PHC string");
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct TestAccount {
        hash: Option<String>,
        token: ResetToken,
    }

    impl Account for TestAccount {
        fn password_hash(&self) -> Option<&str> {
            self.hash.as_deref()
        }

        fn set_password_hash(&mut self, hash: String) {
            self.hash = Some(hash);
        }

        fn reset_token(&self) -> &ResetToken {
            &self.token
        }

        fn reset_token_mut(&mut self) -> &mut ResetToken {
            &mut self.token
        }
    }

    fn cheap_params() -> SecurityConfig {
        SecurityConfig {
            argon2_memory_cost_kib: 1024,
            argon2_time_cost: 1,
            argon2_parallelism: 1,
            ..SecurityConfig::default()
        }
    }

    #[test]
    fn test_set_and_check_password() {
        let mut account = TestAccount::default();
        assert!(!account.check_password("anything"));

        account
            .set_password("correct horse", Some(&cheap_params()))
            .unwrap();

        assert!(account.check_password("correct horse"));
        assert!(!account.check_password("wrong horse"));
        assert!(account.password_hash().unwrap().starts_with("$argon2id$"));
    }

    #[test]
    fn test_invalid_params_are_rejected() {
        let params = SecurityConfig {
            argon2_memory_cost_kib: 1,
            ..cheap_params()
        };
        assert!(hash_password("password123", Some(&params)).is_err());
    }

    #[test]
    fn test_garbage_hash_does_not_verify() {
        assert!(!verify_password("not-a-hash", "password"));
    }

    #[test]
    fn test_token_lifecycle_through_trait() {
        let mut account = TestAccount::default();
        let token = account.generate_reset_token(Duration::hours(24));

        assert!(account.verify_reset_token(&token));
        account.clear_reset_token();
        assert!(!account.verify_reset_token(&token));
    }
}
