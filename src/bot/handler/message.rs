use serenity::all::Message;

use crate::{service::activity::ActivityService, state::BotState};

/// Handle message creation in a channel
///
/// Counts the message towards its author's activity. Messages from bots, including
/// this one, are not counted.
pub async fn handle_message(state: &BotState, message: &Message) {
    let service = ActivityService::new(&state.store);

    match service
        .record_message(message.author.id.get(), message.author.bot)
        .await
    {
        Ok(Some(count)) => {
            tracing::debug!("User {} has sent {} messages", message.author.id, count)
        }
        Ok(None) => {}
        Err(e) => tracing::error!(
            "Failed to record message from {}: {}",
            message.author.id,
            e
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        data::{bot_config::BotConfigStore, persistence::JsonFileStore},
        service::{blackjack::BlackjackService, slots::SlotMachine},
    };
    use std::sync::Arc;
    use std::time::Duration;
    use test_utils::{builder::TestBuilder, serenity::message::create_test_message};

    /// Tests counting messages from users and bots.
    ///
    /// Expected: the user's messages are counted and saved, the bot's are not
    #[tokio::test]
    async fn counts_user_messages_only() {
        let test = TestBuilder::new().build().unwrap();
        let store = BotConfigStore::load(Arc::new(JsonFileStore::new(&test.config_path)))
            .await
            .unwrap();
        let state = BotState::new(
            Arc::new(store),
            BlackjackService::new(Duration::from_secs(60)),
            SlotMachine::new(),
            reqwest::Client::new(),
            None,
        );

        handle_message(&state, &create_test_message(1, 100, 7, false)).await;
        handle_message(&state, &create_test_message(2, 100, 7, false)).await;
        handle_message(&state, &create_test_message(3, 100, 8, true)).await;

        let activity = state.store.activity().await;
        assert_eq!(activity.get("7"), Some(&2));
        assert_eq!(activity.get("8"), None);

        let written = test.read_config().unwrap().unwrap();
        assert!(written.contains("\"7\""));
    }
}
