use serenity::all::{ChannelId, Context, CreateEmbed, CreateMessage, GuildChannel};

use crate::{service::forum_log::ForumLogService, state::BotState};

/// Announces a newly created thread in the forum log channel, if one is set.
pub async fn handle_thread_create(state: &BotState, ctx: Context, thread: GuildChannel) {
    let service = ForumLogService::new(&state.store);

    let Some(log_channel_id) = service.channel().await.filter(|&id| id != 0) else {
        return;
    };

    let embed = forum_post_embed(&thread);

    if let Err(e) = ChannelId::new(log_channel_id)
        .send_message(&ctx.http, CreateMessage::new().embed(embed))
        .await
    {
        tracing::warn!(
            "Failed to announce thread {} in log channel {}: {}",
            thread.id,
            log_channel_id,
            e
        );
    } else {
        tracing::debug!("Announced thread {} ({})", thread.name, thread.id);
    }
}

fn forum_post_embed(thread: &GuildChannel) -> CreateEmbed {
    let url = ForumLogService::thread_url(thread.guild_id.get(), thread.id.get());

    CreateEmbed::new()
        .title("📝 New Forum Post")
        .description(format!("[{}]({})", thread.name, url))
}
