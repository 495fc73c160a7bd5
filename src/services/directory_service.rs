//! Domain service for the public business directory.
//!
//! Reads go through a per-call transaction so a failed request never leaves
//! a half-used connection behind.

use serde::Serialize;
use thiserror::Error;

use crate::models::{CompanyProfile, NewAd, NewProfile, SharedAd};

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sea_orm::DbErr> for DirectoryError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for DirectoryError {
    fn from(err: anyhow::Error) -> Self {
        if err.downcast_ref::<sea_orm::DbErr>().is_some() {
            Self::Database(format!("{err:#}"))
        } else {
            Self::Internal(format!("{err:#}"))
        }
    }
}

/// A profile together with the ads shown on its page.
#[derive(Debug, Clone, Serialize)]
pub struct ProfilePage {
    pub profile: CompanyProfile,
    pub ads: Vec<SharedAd>,
}

#[async_trait::async_trait]
pub trait DirectoryService: Send + Sync {
    /// Active profiles ordered by company name.
    async fn list_active(&self) -> Result<Vec<CompanyProfile>, DirectoryError>;

    /// Loads an active profile and its active ads.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::NotFound`] for unknown and inactive slugs.
    async fn profile_page(&self, slug: &str) -> Result<ProfilePage, DirectoryError>;

    /// Substring search over name and description. A blank query returns nothing.
    async fn search(&self, query: &str) -> Result<Vec<CompanyProfile>, DirectoryError>;

    /// Every profile regardless of state, for management tooling.
    async fn list_all(&self) -> Result<Vec<CompanyProfile>, DirectoryError>;

    /// Looks up a profile by slug whether or not it is active.
    async fn find_profile(&self, slug: &str) -> Result<CompanyProfile, DirectoryError>;

    /// Inserts a profile with a freshly derived unique slug.
    async fn create_profile(&self, profile: NewProfile) -> Result<CompanyProfile, DirectoryError>;

    /// Changes the company name and re-derives the slug.
    async fn rename_profile(
        &self,
        slug: &str,
        company_name: &str,
    ) -> Result<CompanyProfile, DirectoryError>;

    async fn set_profile_active(&self, slug: &str, active: bool) -> Result<(), DirectoryError>;

    async fn add_ad(&self, ad: NewAd) -> Result<SharedAd, DirectoryError>;
}
