use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    data::persistence::ConfigPersistence, error::storage::StorageError,
    model::bot_config::BotConfig,
};

/// Process-wide owner of the bot config.
///
/// Loaded once at startup. Every mutation updates the in-memory copy and then writes
/// the whole config through the persistence collaborator while still holding the
/// write lock, so concurrent message events cannot lose increments.
///
/// If a save fails the in-memory change is kept and the error is returned; the next
/// successful save persists it.
pub struct BotConfigStore {
    persistence: Arc<dyn ConfigPersistence>,
    config: RwLock<BotConfig>,
}

impl BotConfigStore {
    /// Loads the config through `persistence`.
    ///
    /// # Returns
    /// - `Ok(BotConfigStore)` - Store holding the loaded config
    /// - `Err(StorageError)` - The config could not be read
    pub async fn load(persistence: Arc<dyn ConfigPersistence>) -> Result<Self, StorageError> {
        let config = persistence.load().await?;

        Ok(Self {
            persistence,
            config: RwLock::new(config),
        })
    }

    /// Increments a user's message count and persists the config.
    ///
    /// # Returns
    /// - `Ok(u64)` - The user's new message count
    /// - `Err(StorageError)` - Count updated in memory but not saved
    pub async fn record_message(&self, user_id: u64) -> Result<u64, StorageError> {
        let mut config = self.config.write().await;

        let count = config.activity.entry(user_id.to_string()).or_insert(0);
        *count += 1;
        let count = *count;

        self.persistence.save(&config).await?;

        Ok(count)
    }

    pub async fn activity(&self) -> BTreeMap<String, u64> {
        self.config.read().await.activity.clone()
    }

    pub async fn log_channel(&self) -> Option<u64> {
        self.config.read().await.log_channel_id
    }

    /// Sets the channel new forum posts are announced in and persists the config.
    pub async fn set_log_channel(&self, channel_id: u64) -> Result<(), StorageError> {
        let mut config = self.config.write().await;
        config.log_channel_id = Some(channel_id);

        self.persistence.save(&config).await
    }
}
