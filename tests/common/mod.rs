use std::sync::Arc;

use infobox::config::Config;
use infobox::models::NewProfile;
use infobox::state::SharedState;

/// Config pointing at a fresh SQLite file with cheap password hashing.
pub fn test_config() -> Config {
    let db_path = std::env::temp_dir().join(format!("infobox-test-{}.db", uuid::Uuid::new_v4()));

    let mut config = Config::default();
    config.general.database_url = format!("sqlite:{}", db_path.display());
    config.observability.metrics_enabled = false;
    config.security.argon2_memory_cost_kib = 1024;
    config.security.argon2_time_cost = 1;
    config
}

pub async fn spawn_state() -> Arc<SharedState> {
    Arc::new(
        SharedState::new(test_config())
            .await
            .expect("Failed to create shared state"),
    )
}

/// Registers an advertiser and returns its id.
pub async fn seed_advertiser(state: &SharedState, username: &str) -> i32 {
    state
        .accounts
        .register(username, &format!("{username}@example.com"), "password123")
        .await
        .expect("Failed to register advertiser")
        .id
}

pub fn new_profile(advertiser_id: i32, name: &str, description: &str, active: bool) -> NewProfile {
    NewProfile {
        advertiser_id,
        company_name: name.to_string(),
        description: description.to_string(),
        active,
        ..NewProfile::default()
    }
}
