use crate::entities::{prelude::*, shared_ads};
use crate::models::{NewAd, SharedAd};
use anyhow::{Context, Result};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

pub struct AdRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> AdRepository<'a, C> {
    #[must_use]
    pub const fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Active ads attached to a profile, oldest first.
    pub async fn active_for_profile(&self, profile_id: i32) -> Result<Vec<SharedAd>> {
        let rows = SharedAds::find()
            .filter(shared_ads::Column::CompanyProfileId.eq(profile_id))
            .filter(shared_ads::Column::Active.eq(true))
            .order_by_asc(shared_ads::Column::CreatedAt)
            .order_by_asc(shared_ads::Column::Id)
            .all(self.conn)
            .await
            .context("Failed to query ads for profile")?;

        Ok(rows.into_iter().map(SharedAd::from).collect())
    }

    pub async fn insert(&self, ad: &NewAd) -> Result<SharedAd> {
        let now = chrono::Utc::now().to_rfc3339();

        let active = shared_ads::ActiveModel {
            ad_name: Set(ad.ad_name.clone()),
            notes: Set(ad.notes.clone()),
            image_filename: Set(ad.image_filename.clone()),
            image_path: Set(ad.image_path.clone()),
            active: Set(true),
            clicks: Set(0),
            impressions: Set(0),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            advertiser_id: Set(ad.advertiser_id),
            company_profile_id: Set(ad.company_profile_id),
            ..Default::default()
        };

        let model = active
            .insert(self.conn)
            .await
            .context("Failed to insert ad")?;

        Ok(SharedAd::from(model))
    }
}
