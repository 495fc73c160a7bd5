use crate::entities::{company_profiles, prelude::*};
use crate::models::{CompanyProfile, NewProfile};
use anyhow::{Context, Result};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use std::collections::HashSet;

/// Queries over `company_profiles`, usable on a pooled connection or inside
/// a request transaction.
pub struct ProfileRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> ProfileRepository<'a, C> {
    #[must_use]
    pub const fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Active profiles ordered by company name.
    pub async fn list_active(&self) -> Result<Vec<CompanyProfile>> {
        let rows = CompanyProfiles::find()
            .filter(company_profiles::Column::Active.eq(true))
            .order_by_asc(company_profiles::Column::CompanyName)
            .all(self.conn)
            .await
            .context("Failed to list active profiles")?;

        Ok(rows.into_iter().map(CompanyProfile::from).collect())
    }

    pub async fn list_all(&self) -> Result<Vec<CompanyProfile>> {
        let rows = CompanyProfiles::find()
            .order_by_asc(company_profiles::Column::CompanyName)
            .all(self.conn)
            .await
            .context("Failed to list profiles")?;

        Ok(rows.into_iter().map(CompanyProfile::from).collect())
    }

    /// Exact slug match restricted to active profiles.
    pub async fn find_active_by_slug(&self, slug: &str) -> Result<Option<CompanyProfile>> {
        let row = CompanyProfiles::find()
            .filter(company_profiles::Column::Slug.eq(slug))
            .filter(company_profiles::Column::Active.eq(true))
            .one(self.conn)
            .await
            .context("Failed to query profile by slug")?;

        Ok(row.map(CompanyProfile::from))
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<CompanyProfile>> {
        let row = CompanyProfiles::find()
            .filter(company_profiles::Column::Slug.eq(slug))
            .one(self.conn)
            .await
            .context("Failed to query profile by slug")?;

        Ok(row.map(CompanyProfile::from))
    }

    /// Case-insensitive substring match on name or description, active only.
    ///
    /// `%`, `_` and `\` in `query` match literally. An empty query matches nothing.
    pub async fn search_active(&self, query: &str) -> Result<Vec<CompanyProfile>> {
        if query.is_empty() {
            return Ok(Vec::new());
        }

        // Both sides go through the backend's lower() so they fold the same way.
        let pattern = format!("%{}%", escape_like(query));
        let folded_like = |column: company_profiles::Column| {
            Expr::cust_with_exprs(
                "LOWER($1) LIKE LOWER($2) ESCAPE '\\'",
                [Expr::col(column).into(), Expr::val(pattern.clone()).into()],
            )
        };

        let matches = Condition::any()
            .add(folded_like(company_profiles::Column::CompanyName))
            .add(folded_like(company_profiles::Column::Description));

        let rows = CompanyProfiles::find()
            .filter(company_profiles::Column::Active.eq(true))
            .filter(matches)
            .order_by_asc(company_profiles::Column::CompanyName)
            .all(self.conn)
            .await
            .context("Failed to search profiles")?;

        Ok(rows.into_iter().map(CompanyProfile::from).collect())
    }

    /// Slugs equal to `base` or of the form `base-*`, ignoring profile `exclude_id`.
    pub async fn taken_slugs(&self, base: &str, exclude_id: Option<i32>) -> Result<HashSet<String>> {
        let mut query = CompanyProfiles::find()
            .select_only()
            .column(company_profiles::Column::Slug)
            .filter(
                Condition::any()
                    .add(company_profiles::Column::Slug.eq(base))
                    .add(company_profiles::Column::Slug.like(format!("{base}-%"))),
            );

        if let Some(id) = exclude_id {
            query = query.filter(company_profiles::Column::Id.ne(id));
        }

        let slugs: Vec<String> = query
            .into_tuple()
            .all(self.conn)
            .await
            .context("Failed to query taken slugs")?;

        Ok(slugs.into_iter().collect())
    }

    pub async fn insert(&self, profile: &NewProfile, slug: &str) -> Result<CompanyProfile> {
        let now = chrono::Utc::now().to_rfc3339();

        let active = company_profiles::ActiveModel {
            company_name: Set(profile.company_name.clone()),
            slug: Set(slug.to_string()),
            description: Set(profile.description.clone()),
            web_url: Set(profile.web_url.clone()),
            facebook_url: Set(profile.facebook_url.clone()),
            instagram_url: Set(profile.instagram_url.clone()),
            pinterest_url: Set(profile.pinterest_url.clone()),
            active: Set(profile.active),
            views: Set(0),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            advertiser_id: Set(profile.advertiser_id),
            ..Default::default()
        };

        let model = active
            .insert(self.conn)
            .await
            .context("Failed to insert profile")?;

        Ok(CompanyProfile::from(model))
    }

    pub async fn rename(&self, id: i32, company_name: &str, slug: &str) -> Result<CompanyProfile> {
        let model = CompanyProfiles::find_by_id(id)
            .one(self.conn)
            .await
            .context("Failed to query profile for rename")?
            .ok_or_else(|| anyhow::anyhow!("Profile not found: {id}"))?;

        let mut active: company_profiles::ActiveModel = model.into();
        active.company_name = Set(company_name.to_string());
        active.slug = Set(slug.to_string());
        active.updated_at = Set(chrono::Utc::now().to_rfc3339());
        let model = active.update(self.conn).await?;

        Ok(CompanyProfile::from(model))
    }

    pub async fn set_active(&self, id: i32, active: bool) -> Result<bool> {
        let result = CompanyProfiles::update_many()
            .col_expr(company_profiles::Column::Active, Expr::value(active))
            .col_expr(
                company_profiles::Column::UpdatedAt,
                Expr::value(chrono::Utc::now().to_rfc3339()),
            )
            .filter(company_profiles::Column::Id.eq(id))
            .exec(self.conn)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

/// Escapes LIKE wildcards with `\`.
pub(crate) fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
