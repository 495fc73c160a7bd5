use crate::accounts::{Account, ResetToken};
use crate::entities::{shared_advertisers, users};

/// Advertiser account of the shared advertising site; owns profiles and ads.
#[derive(Debug, Clone)]
pub struct Advertiser {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub password_hash: Option<String>,
    pub active: bool,
    pub reset: ResetToken,
    pub created_at: String,
    pub updated_at: String,
}

impl From<shared_advertisers::Model> for Advertiser {
    fn from(model: shared_advertisers::Model) -> Self {
        Self {
            reset: ResetToken::from_columns(model.reset_token, model.reset_token_expires.as_deref()),
            id: model.id,
            username: model.username,
            email: model.email,
            password_hash: model.password_hash,
            active: model.active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl Account for Advertiser {
    fn password_hash(&self) -> Option<&str> {
        self.password_hash.as_deref()
    }

    fn set_password_hash(&mut self, hash: String) {
        self.password_hash = Some(hash);
    }

    fn reset_token(&self) -> &ResetToken {
        &self.reset
    }

    fn reset_token_mut(&mut self) -> &mut ResetToken {
        &mut self.reset
    }
}

/// Editorial account of the sibling news site.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub password_hash: Option<String>,
    pub is_admin: bool,
    pub reset: ResetToken,
    pub created_at: String,
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            reset: ResetToken::from_columns(model.reset_token, model.reset_token_expires.as_deref()),
            id: model.id,
            username: model.username,
            email: model.email,
            password_hash: model.password_hash,
            is_admin: model.is_admin,
            created_at: model.created_at,
        }
    }
}

impl Account for User {
    fn password_hash(&self) -> Option<&str> {
        self.password_hash.as_deref()
    }

    fn set_password_hash(&mut self, hash: String) {
        self.password_hash = Some(hash);
    }

    fn reset_token(&self) -> &ResetToken {
        &self.reset
    }

    fn reset_token_mut(&mut self) -> &mut ResetToken {
        &mut self.reset
    }
}
