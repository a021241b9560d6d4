use crate::{data::bot_config::BotConfigStore, error::AppError};

/// Manages the channel that new forum posts are announced in.
pub struct ForumLogService<'a> {
    store: &'a BotConfigStore,
}

impl<'a> ForumLogService<'a> {
    pub fn new(store: &'a BotConfigStore) -> Self {
        Self { store }
    }

    /// Stores the log channel.
    ///
    /// # Returns
    /// - `Ok(())` - Channel saved
    /// - `Err(AppError::StorageErr)` - Channel set in memory but not persisted
    pub async fn set_channel(&self, channel_id: u64) -> Result<(), AppError> {
        self.store.set_log_channel(channel_id).await?;
        tracing::info!("Forum log channel set to {}", channel_id);
        Ok(())
    }

    pub async fn channel(&self) -> Option<u64> {
        self.store.log_channel().await
    }

    /// Link to a thread in the Discord client.
    pub fn thread_url(guild_id: u64, thread_id: u64) -> String {
        format!("https://discord.com/channels/{guild_id}/{thread_id}")
    }
}
