use crate::models::NewProfile;
use crate::state::SharedState;

pub struct ProfileLinks {
    pub web_url: Option<String>,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub pinterest_url: Option<String>,
}

pub async fn cmd_profile_add(
    state: &SharedState,
    advertiser: &str,
    company_name: &str,
    description: &str,
    links: ProfileLinks,
    active: bool,
) -> anyhow::Result<()> {
    let owner = state.accounts.find_by_username(advertiser).await?;

    let profile = state
        .directory
        .create_profile(NewProfile {
            advertiser_id: owner.id,
            company_name: company_name.to_string(),
            description: description.to_string(),
            web_url: links.web_url,
            facebook_url: links.facebook_url,
            instagram_url: links.instagram_url,
            pinterest_url: links.pinterest_url,
            active,
        })
        .await?;

    println!("✓ Created profile '{}'", profile.company_name);
    println!("  Slug:   {}", profile.slug);
    println!("  URL:    /profile/{}", profile.slug);
    if !profile.active {
        println!("  Hidden: run 'infobox profile activate {}' to publish", profile.slug);
    }
    Ok(())
}

pub async fn cmd_profile_rename(
    state: &SharedState,
    slug: &str,
    new_name: &str,
) -> anyhow::Result<()> {
    let profile = state.directory.rename_profile(slug, new_name).await?;

    println!("✓ Renamed to '{}'", profile.company_name);
    if profile.slug != slug {
        println!("  Slug changed: {} → {}", slug, profile.slug);
    }
    Ok(())
}

pub async fn cmd_profile_set_active(
    state: &SharedState,
    slug: &str,
    active: bool,
) -> anyhow::Result<()> {
    state.directory.set_profile_active(slug, active).await?;

    if active {
        println!("✓ Profile '{slug}' is now listed");
    } else {
        println!("✓ Profile '{slug}' is now hidden");
    }
    Ok(())
}

pub async fn cmd_profile_list(state: &SharedState) -> anyhow::Result<()> {
    let profiles = state.directory.list_all().await?;

    println!("Company Profiles:");
    println!("{:-<70}", "");

    if profiles.is_empty() {
        println!("No profiles yet. Use 'infobox profile add' to create one.");
        return Ok(());
    }

    for profile in &profiles {
        let status = if profile.active { "" } else { " [HIDDEN]" };
        println!("• {}{}", profile.company_name, status);
        println!(
            "  Slug: {} | Views: {} | Advertiser: {}",
            profile.slug, profile.views, profile.advertiser_id
        );
    }

    println!();
    println!("{} profile(s)", profiles.len());
    Ok(())
}
