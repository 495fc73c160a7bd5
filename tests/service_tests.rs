mod common;

use infobox::services::{AccountError, DirectoryError};

use common::{new_profile, seed_advertiser, spawn_state};

#[tokio::test]
async fn test_duplicate_names_get_numbered_slugs() {
    let state = spawn_state().await;
    let advertiser = seed_advertiser(&state, "acme").await;

    let first = state
        .directory
        .create_profile(new_profile(advertiser, "Acme Co", "Anvils", true))
        .await
        .unwrap();
    let second = state
        .directory
        .create_profile(new_profile(advertiser, "Acme Co", "More anvils", true))
        .await
        .unwrap();
    let third = state
        .directory
        .create_profile(new_profile(advertiser, "ACME co!", "Even more anvils", true))
        .await
        .unwrap();

    assert_eq!(first.slug, "acme-co");
    assert_eq!(second.slug, "acme-co-1");
    assert_eq!(third.slug, "acme-co-2");
}

#[tokio::test]
async fn test_rename_excludes_own_slug() {
    let state = spawn_state().await;
    let advertiser = seed_advertiser(&state, "acme").await;

    state
        .directory
        .create_profile(new_profile(advertiser, "Acme Co", "Anvils", true))
        .await
        .unwrap();
    state
        .directory
        .create_profile(new_profile(advertiser, "Road Runner", "Speed", true))
        .await
        .unwrap();

    // Same base slug: keeps its own slug instead of becoming acme-co-1.
    let renamed = state
        .directory
        .rename_profile("acme-co", "Acme Co.")
        .await
        .unwrap();
    assert_eq!(renamed.company_name, "Acme Co.");
    assert_eq!(renamed.slug, "acme-co");

    let renamed = state
        .directory
        .rename_profile("road-runner", "Acme Co")
        .await
        .unwrap();
    assert_eq!(renamed.slug, "acme-co-1");

    let result = state.directory.rename_profile("road-runner", "Beep").await;
    assert!(matches!(result, Err(DirectoryError::NotFound(_))));
}

#[tokio::test]
async fn test_deactivated_profile_disappears() {
    let state = spawn_state().await;
    let advertiser = seed_advertiser(&state, "acme").await;

    state
        .directory
        .create_profile(new_profile(advertiser, "Acme Co", "Anvils", true))
        .await
        .unwrap();
    assert!(state.directory.profile_page("acme-co").await.is_ok());

    state
        .directory
        .set_profile_active("acme-co", false)
        .await
        .unwrap();

    assert!(state.directory.list_active().await.unwrap().is_empty());
    assert!(state.directory.search("anvil").await.unwrap().is_empty());
    assert!(matches!(
        state.directory.profile_page("acme-co").await,
        Err(DirectoryError::NotFound(_))
    ));

    let all = state.directory.list_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert!(!all[0].active);
}

#[tokio::test]
async fn test_create_profile_validation() {
    let state = spawn_state().await;
    let advertiser = seed_advertiser(&state, "acme").await;

    let result = state
        .directory
        .create_profile(new_profile(advertiser, "   ", "Anvils", true))
        .await;
    assert!(matches!(result, Err(DirectoryError::Validation(_))));

    let result = state
        .directory
        .create_profile(new_profile(advertiser + 100, "Acme Co", "Anvils", true))
        .await;
    assert!(matches!(result, Err(DirectoryError::NotFound(_))));

    // Nothing was written by the failed attempts.
    assert!(state.directory.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_register_conflicts() {
    let state = spawn_state().await;
    seed_advertiser(&state, "acme").await;

    let result = state
        .accounts
        .register("acme", "other@example.com", "password123")
        .await;
    assert!(matches!(result, Err(AccountError::Conflict(_))));

    let result = state
        .accounts
        .register("other", "acme@example.com", "password123")
        .await;
    assert!(matches!(result, Err(AccountError::Conflict(_))));

    let result = state
        .accounts
        .register("short", "short@example.com", "pw")
        .await;
    assert!(matches!(result, Err(AccountError::Validation(_))));
}

#[tokio::test]
async fn test_check_credentials() {
    let state = spawn_state().await;
    seed_advertiser(&state, "acme").await;

    assert!(state
        .accounts
        .check_credentials("acme", "password123")
        .await
        .unwrap());
    assert!(!state
        .accounts
        .check_credentials("acme", "wrong-password")
        .await
        .unwrap());
    assert!(!state
        .accounts
        .check_credentials("nobody", "password123")
        .await
        .unwrap());
}

#[tokio::test]
async fn test_password_reset_flow() {
    let state = spawn_state().await;
    seed_advertiser(&state, "acme").await;

    let issued = state
        .accounts
        .request_password_reset("acme@example.com")
        .await
        .unwrap();
    assert_eq!(issued.username, "acme");
    assert_eq!(issued.token.len(), 43);
    assert!(issued.expires_at > chrono::Utc::now());

    let result = state
        .accounts
        .reset_password("acme", "not-the-token", "new-password-1")
        .await;
    assert!(matches!(result, Err(AccountError::InvalidToken)));

    state
        .accounts
        .reset_password("acme", &issued.token, "new-password-1")
        .await
        .unwrap();

    assert!(state
        .accounts
        .check_credentials("acme", "new-password-1")
        .await
        .unwrap());
    assert!(!state
        .accounts
        .check_credentials("acme", "password123")
        .await
        .unwrap());

    // Tokens are single use.
    let result = state
        .accounts
        .reset_password("acme", &issued.token, "new-password-2")
        .await;
    assert!(matches!(result, Err(AccountError::InvalidToken)));
}

#[tokio::test]
async fn test_new_reset_token_replaces_old_one() {
    let state = spawn_state().await;
    seed_advertiser(&state, "acme").await;

    let first = state
        .accounts
        .request_password_reset("acme@example.com")
        .await
        .unwrap();
    let second = state
        .accounts
        .request_password_reset("acme@example.com")
        .await
        .unwrap();
    assert_ne!(first.token, second.token);

    let result = state
        .accounts
        .reset_password("acme", &first.token, "new-password-1")
        .await;
    assert!(matches!(result, Err(AccountError::InvalidToken)));

    let result = state
        .accounts
        .request_password_reset("nobody@example.com")
        .await;
    assert!(matches!(result, Err(AccountError::NotFound)));
}

#[tokio::test]
async fn test_search_matches_non_ascii_capitals() {
    let state = spawn_state().await;
    let advertiser = seed_advertiser(&state, "ecole").await;

    state
        .directory
        .create_profile(new_profile(advertiser, "ÉCOLE DU NORD", "Cours du soir", true))
        .await
        .unwrap();

    for query in ["ÉCOLE", "École", "nord", "DU NORD", "SOIR"] {
        let hits = state.directory.search(query).await.unwrap();
        assert_eq!(hits.len(), 1, "query {query:?}");
        assert_eq!(hits[0].slug, "ecole-du-nord");
    }
}

#[tokio::test]
async fn test_rejected_new_password_keeps_token() {
    let state = spawn_state().await;
    seed_advertiser(&state, "acme").await;

    let issued = state
        .accounts
        .request_password_reset("acme@example.com")
        .await
        .unwrap();

    let result = state
        .accounts
        .reset_password("acme", &issued.token, "short")
        .await;
    assert!(matches!(result, Err(AccountError::Validation(_))));

    // Nothing was written, so the token still works.
    state
        .accounts
        .reset_password("acme", &issued.token, "long-enough-1")
        .await
        .unwrap();
    assert!(state
        .accounts
        .check_credentials("acme", "long-enough-1")
        .await
        .unwrap());
}

#[tokio::test]
async fn test_reset_password_with_single_connection_pool() {
    let mut config = common::test_config();
    config.general.max_db_connections = 1;
    config.general.min_db_connections = 1;
    let state = infobox::state::SharedState::new(config).await.unwrap();
    seed_advertiser(&state, "acme").await;

    let issued = state
        .accounts
        .request_password_reset("acme@example.com")
        .await
        .unwrap();

    // The directory read needs the only connection while the new password hashes.
    let (reset, listed) = tokio::join!(
        state
            .accounts
            .reset_password("acme", &issued.token, "new-password-1"),
        state.directory.list_active(),
    );
    reset.unwrap();
    assert!(listed.unwrap().is_empty());
}
