use std::sync::Arc;

use crate::config::Config;
use crate::db::Store;
use crate::services::{AccountService, DirectoryService, SeaOrmAccountService, SeaOrmDirectoryService};

#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<Config>,

    pub store: Store,

    pub directory: Arc<dyn DirectoryService>,

    pub accounts: Arc<dyn AccountService>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_url,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        let directory: Arc<dyn DirectoryService> =
            Arc::new(SeaOrmDirectoryService::new(store.clone()));

        let accounts: Arc<dyn AccountService> = Arc::new(SeaOrmAccountService::new(
            store.clone(),
            config.security.clone(),
        ));

        Ok(Self {
            config: Arc::new(config),
            store,
            directory,
            accounts,
        })
    }
}
