use crate::models::NewAd;
use crate::state::SharedState;

/// Ad images live here inside the uploads directory, served under `/uploads`.
const AD_IMAGE_DIR: &str = "shared_ads";

pub async fn cmd_ad_add(
    state: &SharedState,
    advertiser: &str,
    ad_name: &str,
    image_filename: &str,
    profile_slug: Option<&str>,
    notes: Option<String>,
) -> anyhow::Result<()> {
    let owner = state.accounts.find_by_username(advertiser).await?;

    let company_profile_id = match profile_slug {
        Some(slug) => Some(state.directory.find_profile(slug).await?.id),
        None => None,
    };

    let ad = state
        .directory
        .add_ad(NewAd {
            advertiser_id: owner.id,
            ad_name: ad_name.to_string(),
            notes,
            image_filename: image_filename.to_string(),
            image_path: format!("uploads/{AD_IMAGE_DIR}/{image_filename}"),
            company_profile_id,
        })
        .await?;

    println!("✓ Added ad '{}' (ID: {})", ad.ad_name, ad.id);
    if let Some(slug) = profile_slug {
        println!("  Shown on: /profile/{slug}");
    }
    Ok(())
}
