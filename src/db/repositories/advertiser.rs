use crate::accounts::Account;
use crate::entities::{prelude::*, shared_advertisers};
use crate::models::Advertiser;
use anyhow::{Context, Result};
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};

pub struct AdvertiserRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> AdvertiserRepository<'a, C> {
    #[must_use]
    pub const fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Advertiser>> {
        let row = SharedAdvertisers::find_by_id(id)
            .one(self.conn)
            .await
            .context("Failed to query advertiser by ID")?;

        Ok(row.map(Advertiser::from))
    }

    pub async fn get_by_username(&self, username: &str) -> Result<Option<Advertiser>> {
        let row = SharedAdvertisers::find()
            .filter(shared_advertisers::Column::Username.eq(username))
            .one(self.conn)
            .await
            .context("Failed to query advertiser by username")?;

        Ok(row.map(Advertiser::from))
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<Advertiser>> {
        let row = SharedAdvertisers::find()
            .filter(shared_advertisers::Column::Email.eq(email))
            .one(self.conn)
            .await
            .context("Failed to query advertiser by email")?;

        Ok(row.map(Advertiser::from))
    }

    pub async fn insert(&self, username: &str, email: &str, password_hash: &str) -> Result<Advertiser> {
        let now = chrono::Utc::now().to_rfc3339();

        let active = shared_advertisers::ActiveModel {
            username: Set(username.to_string()),
            email: Set(email.to_string()),
            password_hash: Set(Some(password_hash.to_string())),
            active: Set(true),
            reset_token: Set(None),
            reset_token_expires: Set(None),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        let model = active
            .insert(self.conn)
            .await
            .context("Failed to insert advertiser")?;

        Ok(Advertiser::from(model))
    }

    /// Persists the password hash and reset-token columns of `advertiser`.
    pub async fn save_credentials(&self, advertiser: &Advertiser) -> Result<()> {
        let model = SharedAdvertisers::find_by_id(advertiser.id)
            .one(self.conn)
            .await
            .context("Failed to query advertiser for credential update")?
            .ok_or_else(|| anyhow::anyhow!("Advertiser not found: {}", advertiser.id))?;

        let reset = advertiser.reset_token();

        let mut active: shared_advertisers::ActiveModel = model.into();
        active.password_hash = Set(advertiser.password_hash().map(str::to_string));
        active.reset_token = Set(reset.token().map(str::to_string));
        active.reset_token_expires = Set(reset.expires_at_column());
        active.updated_at = Set(chrono::Utc::now().to_rfc3339());
        active.update(self.conn).await?;

        Ok(())
    }
}
