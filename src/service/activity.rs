use crate::{
    data::bot_config::BotConfigStore,
    error::AppError,
    model::bot_config::{Leaderboard, LEADERBOARD_SIZE},
};

/// Message counting and the activity leaderboard.
pub struct ActivityService<'a> {
    store: &'a BotConfigStore,
}

impl<'a> ActivityService<'a> {
    pub fn new(store: &'a BotConfigStore) -> Self {
        Self { store }
    }

    /// Counts a message towards its author's activity.
    ///
    /// # Arguments
    /// - `author_id` - Discord user id of the message author
    /// - `author_is_bot` - Whether the author is a bot account
    ///
    /// # Returns
    /// - `Ok(Some(u64))` - The author's new message count
    /// - `Ok(None)` - Author is a bot; nothing was recorded
    /// - `Err(AppError::StorageErr)` - Count could not be persisted
    pub async fn record_message(
        &self,
        author_id: u64,
        author_is_bot: bool,
    ) -> Result<Option<u64>, AppError> {
        if author_is_bot {
            return Ok(None);
        }

        let count = self.store.record_message(author_id).await?;
        Ok(Some(count))
    }

    /// Builds the top and bottom five users by message count.
    pub async fn leaderboard(&self) -> Option<Leaderboard> {
        Leaderboard::from_activity(&self.store.activity().await, LEADERBOARD_SIZE)
    }
}
