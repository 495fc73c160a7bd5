//! Time-limited password reset tokens.
//!
//! A [`ResetToken`] moves through `NoToken -> Issued -> (verified | Expired)`
//! and back to `NoToken` once the caller clears it. Verification never
//! mutates the token; consuming it is an explicit [`ResetToken::clear`].

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use rand::distr::Alphanumeric;

/// Default lifetime of a freshly issued token.
pub const DEFAULT_TTL_HOURS: i64 = 24;

/// Token length; 43 alphanumeric characters carry a little over 256 bits.
pub const TOKEN_LENGTH: usize = 43;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenState {
    NoToken,
    Issued,
    Expired,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResetToken {
    token: Option<String>,
    expires_at: Option<DateTime<Utc>>,
}

impl ResetToken {
    /// Rebuilds a token from its stored columns.
    ///
    /// An unparsable expiry is treated as missing, which makes the token
    /// unverifiable.
    #[must_use]
    pub fn from_columns(token: Option<String>, expires_at: Option<&str>) -> Self {
        let expires_at = expires_at
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc));

        Self { token, expires_at }
    }

    /// Issues a new token valid for `ttl`, replacing any previous one.
    pub fn generate(&mut self, ttl: Duration) -> String {
        self.generate_at(Utc::now(), ttl)
    }

    pub fn generate_at(&mut self, now: DateTime<Utc>, ttl: Duration) -> String {
        let token = random_token();
        self.token = Some(token.clone());
        self.expires_at = Some(now + ttl);
        token
    }

    #[must_use]
    pub fn verify(&self, candidate: &str) -> bool {
        self.verify_at(candidate, Utc::now())
    }

    /// Exact match against an unexpired token. An expiry equal to `now`
    /// still counts as valid.
    #[must_use]
    pub fn verify_at(&self, candidate: &str, now: DateTime<Utc>) -> bool {
        let (Some(token), Some(expires_at)) = (&self.token, self.expires_at) else {
            return false;
        };

        if !constant_time_eq(token.as_bytes(), candidate.as_bytes()) {
            return false;
        }

        now <= expires_at
    }

    pub fn clear(&mut self) {
        self.token = None;
        self.expires_at = None;
    }

    #[must_use]
    pub fn state_at(&self, now: DateTime<Utc>) -> TokenState {
        match (&self.token, self.expires_at) {
            (Some(_), Some(expires_at)) if now <= expires_at => TokenState::Issued,
            (Some(_), Some(_)) => TokenState::Expired,
            _ => TokenState::NoToken,
        }
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub const fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// Expiry in the RFC 3339 form stored in the database.
    #[must_use]
    pub fn expires_at_column(&self) -> Option<String> {
        self.expires_at.map(|dt| dt.to_rfc3339())
    }
}

fn random_token() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
