use serde::Serialize;

use crate::entities::{company_profiles, shared_ads};

#[derive(Debug, Clone, Serialize)]
pub struct CompanyProfile {
    pub id: i32,
    pub company_name: String,
    pub slug: String,
    pub description: String,
    pub web_url: Option<String>,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub pinterest_url: Option<String>,
    pub active: bool,
    pub views: i32,
    pub created_at: String,
    pub updated_at: String,
    pub advertiser_id: i32,
}

impl From<company_profiles::Model> for CompanyProfile {
    fn from(model: company_profiles::Model) -> Self {
        Self {
            id: model.id,
            company_name: model.company_name,
            slug: model.slug,
            description: model.description,
            web_url: model.web_url,
            facebook_url: model.facebook_url,
            instagram_url: model.instagram_url,
            pinterest_url: model.pinterest_url,
            active: model.active,
            views: model.views,
            created_at: model.created_at,
            updated_at: model.updated_at,
            advertiser_id: model.advertiser_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: String,
}

impl CompanyProfile {
    /// Non-empty web and social URLs in display order.
    #[must_use]
    pub fn links(&self) -> Vec<SocialLink> {
        [
            ("Website", &self.web_url),
            ("Facebook", &self.facebook_url),
            ("Instagram", &self.instagram_url),
            ("Pinterest", &self.pinterest_url),
        ]
        .into_iter()
        .filter_map(|(label, url)| {
            url.as_deref()
                .map(str::trim)
                .filter(|u| !u.is_empty())
                .map(|u| SocialLink {
                    label,
                    url: u.to_string(),
                })
        })
        .collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SharedAd {
    pub id: i32,
    pub ad_name: String,
    pub image_filename: String,
    pub image_path: String,
    pub active: bool,
    pub clicks: i32,
    pub impressions: i32,
    pub advertiser_id: i32,
    pub company_profile_id: Option<i32>,
    pub created_at: String,
}

impl From<shared_ads::Model> for SharedAd {
    fn from(model: shared_ads::Model) -> Self {
        Self {
            id: model.id,
            ad_name: model.ad_name,
            image_filename: model.image_filename,
            image_path: model.image_path,
            active: model.active,
            clicks: model.clicks,
            impressions: model.impressions,
            advertiser_id: model.advertiser_id,
            company_profile_id: model.company_profile_id,
            created_at: model.created_at,
        }
    }
}

/// Input for creating a profile; the slug is derived from `company_name`.
#[derive(Debug, Clone, Default)]
pub struct NewProfile {
    pub advertiser_id: i32,
    pub company_name: String,
    pub description: String,
    pub web_url: Option<String>,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub pinterest_url: Option<String>,
    pub active: bool,
}

#[derive(Debug, Clone, Default)]
pub struct NewAd {
    pub advertiser_id: i32,
    pub ad_name: String,
    pub notes: Option<String>,
    pub image_filename: String,
    pub image_path: String,
    pub company_profile_id: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> CompanyProfile {
        CompanyProfile {
            id: 1,
            company_name: "Acme Co".to_string(),
            slug: "acme-co".to_string(),
            description: "Anvils".to_string(),
            web_url: Some("https://acme.example".to_string()),
            facebook_url: Some("   ".to_string()),
            instagram_url: None,
            pinterest_url: Some(" https://pinterest.example/acme ".to_string()),
            active: true,
            views: 0,
            created_at: String::new(),
            updated_at: String::new(),
            advertiser_id: 1,
        }
    }

    #[test]
    fn test_links_skip_blank_urls() {
        let links = profile().links();
        assert_eq!(
            links,
            vec![
                SocialLink {
                    label: "Website",
                    url: "https://acme.example".to_string()
                },
                SocialLink {
                    label: "Pinterest",
                    url: "https://pinterest.example/acme".to_string()
                },
            ]
        );
    }
}
