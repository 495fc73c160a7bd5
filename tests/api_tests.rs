mod common;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use infobox::models::NewAd;
use infobox::state::SharedState;
use sea_orm::ConnectionTrait;
use std::sync::Arc;
use tower::ServiceExt;

use common::{new_profile, seed_advertiser, spawn_state};

async fn spawn_app() -> (Router, Arc<SharedState>) {
    let shared = spawn_state().await;
    let state = infobox::api::create_app_state(shared.clone(), None);
    (infobox::api::router(state), shared)
}

/// "Zeta Bakery" and "Acme Co" are listed, "Hidden Co" is not.
async fn seed_directory(state: &SharedState) -> i32 {
    let advertiser = seed_advertiser(state, "acme").await;

    for (name, description, active) in [
        ("Zeta Bakery", "Fresh bread every morning", true),
        ("Acme Co", "Anvils, rockets and giant magnets", true),
        ("Hidden Co", "Anvils for members only", false),
    ] {
        state
            .directory
            .create_profile(new_profile(advertiser, name, description, active))
            .await
            .unwrap();
    }

    advertiser
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_index_lists_active_profiles_by_name() {
    let (app, state) = spawn_app().await;
    seed_directory(&state).await;

    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);

    let acme = body.find("Acme Co").expect("Acme Co listed");
    let zeta = body.find("Zeta Bakery").expect("Zeta Bakery listed");
    assert!(acme < zeta);
    assert!(!body.contains("Hidden Co"));
    assert!(body.contains("href=\"/profile/acme-co\""));
}

#[tokio::test]
async fn test_index_with_no_profiles() {
    let (app, _state) = spawn_app().await;

    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No businesses are listed yet."));
}

#[tokio::test]
async fn test_profile_page() {
    let (app, state) = spawn_app().await;
    let advertiser = seed_directory(&state).await;

    let acme = state.directory.find_profile("acme-co").await.unwrap();
    state
        .directory
        .add_ad(NewAd {
            advertiser_id: advertiser,
            ad_name: "Spring sale".to_string(),
            image_filename: "spring.png".to_string(),
            image_path: "uploads/shared_ads/spring.png".to_string(),
            company_profile_id: Some(acme.id),
            ..NewAd::default()
        })
        .await
        .unwrap();

    let (status, body) = get(&app, "/profile/acme-co").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Acme Co"));
    assert!(body.contains("giant magnets"));
    assert!(body.contains("spring.png"));
    assert!(body.contains("alt=\"Spring sale\""));
}

#[tokio::test]
async fn test_profile_not_found() {
    let (app, state) = spawn_app().await;
    seed_directory(&state).await;

    let (status, body) = get(&app, "/profile/hidden-co").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page not found"));

    let (status, _) = get(&app, "/profile/no-such-company").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // No prefix matching.
    let (status, _) = get(&app, "/profile/acme").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Slugs are matched exactly, not case-folded.
    let (status, _) = get(&app, "/profile/Acme-Co").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_profile_slug_is_matched_verbatim() {
    let (app, state) = spawn_app().await;
    let advertiser = seed_advertiser(&state, "legacy").await;

    // Rows written by other tools may carry slugs slugify would never produce.
    state
        .store
        .profiles()
        .insert(
            &new_profile(advertiser, "Legacy Listing", "Imported row", true),
            "Legacy_Listing",
        )
        .await
        .unwrap();

    let (status, body) = get(&app, "/profile/Legacy_Listing").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Legacy Listing"));

    let (status, _) = get(&app, "/profile/legacy_listing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_store_failure_renders_500_page() {
    let (app, state) = spawn_app().await;
    seed_directory(&state).await;

    for statement in ["DROP TABLE shared_ads", "DROP TABLE company_profiles"] {
        state.store.conn.execute_unprepared(statement).await.unwrap();
    }

    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("Something went wrong"));
    assert!(!body.contains("no such table"));

    // The failed request released its transaction; the pool still serves queries.
    state.store.ping().await.unwrap();
}

#[tokio::test]
async fn test_search() {
    let (app, state) = spawn_app().await;
    seed_directory(&state).await;

    let (status, body) = get(&app, "/search?q=ANVIL").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Acme Co"));
    assert!(!body.contains("Zeta Bakery"));
    assert!(!body.contains("Hidden Co"));

    let (_, body) = get(&app, "/search?q=zeta").await;
    assert!(body.contains("Zeta Bakery"));
    assert!(!body.contains("Acme Co"));
}

#[tokio::test]
async fn test_blank_search_returns_nothing() {
    let (app, state) = spawn_app().await;
    seed_directory(&state).await;

    for uri in ["/search", "/search?q=", "/search?q=%20%20"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(!body.contains("Acme Co"), "{uri}");
        assert!(!body.contains("Zeta Bakery"), "{uri}");
    }
}

#[tokio::test]
async fn test_search_wildcards_match_literally() {
    let (app, state) = spawn_app().await;
    seed_directory(&state).await;

    let (status, body) = get(&app, "/search?q=%25").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No businesses match your search."));

    let (_, body) = get(&app, "/search?q=_").await;
    assert!(body.contains("No businesses match your search."));
}

#[tokio::test]
async fn test_unknown_route_renders_404_page() {
    let (app, _state) = spawn_app().await;

    let (status, body) = get(&app, "/wp-admin").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page not found"));
}

#[tokio::test]
async fn test_static_assets() {
    let (app, _state) = spawn_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/static/style.css")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/css");

    let (status, _) = get(&app, "/static/missing.css").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_metrics_disabled() {
    let (app, _state) = spawn_app().await;

    let (status, _) = get(&app, "/metrics").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_security_headers() {
    let (app, _state) = spawn_app().await;

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.headers()["x-content-type-options"], "nosniff");
    assert_eq!(response.headers()["x-frame-options"], "DENY");
}
