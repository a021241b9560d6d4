use serenity::all::{Context, EventHandler, GuildChannel, Interaction, Message, Ready};
use serenity::async_trait;

use crate::state::BotState;

pub mod interaction;
pub mod message;
pub mod ready;
pub mod thread;

/// Discord bot event handler
pub struct Handler {
    pub state: BotState,
}

impl Handler {
    pub fn new(state: BotState) -> Self {
        Self { state }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.state, ctx, ready).await;
    }

    /// Called when a message is sent in any channel the bot can see
    async fn message(&self, _ctx: Context, message: Message) {
        message::handle_message(&self.state, &message).await;
    }

    /// Called when a thread (including a forum post) is created
    async fn thread_create(&self, ctx: Context, thread: GuildChannel) {
        thread::handle_thread_create(&self.state, ctx, thread).await;
    }

    /// Called for slash commands and button presses
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(&self.state, ctx, interaction).await;
    }
}
