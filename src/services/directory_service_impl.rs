//! `SeaORM` implementation of the `DirectoryService` trait.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::db::{AdRepository, AdvertiserRepository, ProfileRepository, Store};
use crate::models::{CompanyProfile, NewAd, NewProfile, SharedAd};
use crate::services::directory_service::{DirectoryError, DirectoryService, ProfilePage};
use crate::slug::{slugify, unique_slug};

const MAX_COMPANY_NAME_LEN: usize = 100;

pub struct SeaOrmDirectoryService {
    store: Store,
}

impl SeaOrmDirectoryService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

fn validate_company_name(name: &str) -> Result<&str, DirectoryError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DirectoryError::Validation(
            "Company name cannot be empty".to_string(),
        ));
    }
    if name.chars().count() > MAX_COMPANY_NAME_LEN {
        return Err(DirectoryError::Validation(format!(
            "Company name must be {MAX_COMPANY_NAME_LEN} characters or less"
        )));
    }
    Ok(name)
}

#[async_trait]
impl DirectoryService for SeaOrmDirectoryService {
    async fn list_active(&self) -> Result<Vec<CompanyProfile>, DirectoryError> {
        let txn = self.store.begin().await?;
        let profiles = ProfileRepository::new(&txn).list_active().await?;
        txn.commit().await?;

        debug!(count = profiles.len(), "Listed active profiles");
        Ok(profiles)
    }

    async fn profile_page(&self, slug: &str) -> Result<ProfilePage, DirectoryError> {
        let txn = self.store.begin().await?;

        let profile = ProfileRepository::new(&txn)
            .find_active_by_slug(slug)
            .await?
            .ok_or_else(|| DirectoryError::NotFound(format!("Profile '{slug}'")))?;

        let ads = AdRepository::new(&txn).active_for_profile(profile.id).await?;
        txn.commit().await?;

        Ok(ProfilePage { profile, ads })
    }

    async fn search(&self, query: &str) -> Result<Vec<CompanyProfile>, DirectoryError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let txn = self.store.begin().await?;
        let profiles = ProfileRepository::new(&txn).search_active(query).await?;
        txn.commit().await?;

        debug!(query, count = profiles.len(), "Searched profiles");
        Ok(profiles)
    }

    async fn list_all(&self) -> Result<Vec<CompanyProfile>, DirectoryError> {
        Ok(self.store.profiles().list_all().await?)
    }

    async fn find_profile(&self, slug: &str) -> Result<CompanyProfile, DirectoryError> {
        self.store
            .profiles()
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| DirectoryError::NotFound(format!("Profile '{slug}'")))
    }

    async fn create_profile(&self, mut profile: NewProfile) -> Result<CompanyProfile, DirectoryError> {
        profile.company_name = validate_company_name(&profile.company_name)?.to_string();
        if profile.description.trim().is_empty() {
            return Err(DirectoryError::Validation(
                "Description cannot be empty".to_string(),
            ));
        }

        let txn = self.store.begin().await?;

        if AdvertiserRepository::new(&txn)
            .get_by_id(profile.advertiser_id)
            .await?
            .is_none()
        {
            return Err(DirectoryError::NotFound(format!(
                "Advertiser {}",
                profile.advertiser_id
            )));
        }

        let profiles = ProfileRepository::new(&txn);
        let base = slugify(&profile.company_name);
        let taken = profiles.taken_slugs(&base, None).await?;
        let slug = unique_slug(&base, &taken);

        let created = profiles.insert(&profile, &slug).await?;
        txn.commit().await?;

        info!(id = created.id, slug = %created.slug, "Created company profile");
        Ok(created)
    }

    async fn rename_profile(
        &self,
        slug: &str,
        company_name: &str,
    ) -> Result<CompanyProfile, DirectoryError> {
        let company_name = validate_company_name(company_name)?;

        let txn = self.store.begin().await?;
        let profiles = ProfileRepository::new(&txn);

        let existing = profiles
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| DirectoryError::NotFound(format!("Profile '{slug}'")))?;

        let base = slugify(company_name);
        let taken = profiles.taken_slugs(&base, Some(existing.id)).await?;
        let new_slug = unique_slug(&base, &taken);

        let renamed = profiles.rename(existing.id, company_name, &new_slug).await?;
        txn.commit().await?;

        info!(id = renamed.id, from = %slug, to = %renamed.slug, "Renamed company profile");
        Ok(renamed)
    }

    async fn set_profile_active(&self, slug: &str, active: bool) -> Result<(), DirectoryError> {
        let txn = self.store.begin().await?;
        let profiles = ProfileRepository::new(&txn);

        let existing = profiles
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| DirectoryError::NotFound(format!("Profile '{slug}'")))?;

        profiles.set_active(existing.id, active).await?;
        txn.commit().await?;

        info!(slug, active, "Updated profile visibility");
        Ok(())
    }

    async fn add_ad(&self, ad: NewAd) -> Result<SharedAd, DirectoryError> {
        if ad.ad_name.trim().is_empty() {
            return Err(DirectoryError::Validation("Ad name cannot be empty".to_string()));
        }
        if ad.image_filename.trim().is_empty() {
            return Err(DirectoryError::Validation(
                "Image filename cannot be empty".to_string(),
            ));
        }

        let txn = self.store.begin().await?;
        if AdvertiserRepository::new(&txn)
            .get_by_id(ad.advertiser_id)
            .await?
            .is_none()
        {
            return Err(DirectoryError::NotFound(format!(
                "Advertiser {}",
                ad.advertiser_id
            )));
        }

        let created = AdRepository::new(&txn).insert(&ad).await?;
        txn.commit().await?;

        info!(id = created.id, profile = ?created.company_profile_id, "Added shared ad");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_company_name() {
        assert_eq!(validate_company_name("  Acme Co ").unwrap(), "Acme Co");
        assert!(validate_company_name("   ").is_err());
        assert!(validate_company_name(&"x".repeat(101)).is_err());
        assert!(validate_company_name(&"x".repeat(100)).is_ok());
    }
}
