use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateInteractionResponse, CreateInteractionResponseMessage, MessageId,
};

use crate::{
    bot::commands::{require, string_option},
    error::AppError,
    state::BotState,
    util::parse::parse_trailing_id,
};

pub const NAME: &str = "say";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Make the bot say something")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "message", "What to say")
                .required(true),
        )
        .add_option(CreateCommandOption::new(
            CommandOptionType::String,
            "reply_to",
            "Message ID or link to reply to",
        ))
}

/// Posts `message` in the invoking channel as the bot.
///
/// When `reply_to` names a message in this channel the post is a reply to it;
/// otherwise, including when that message cannot be fetched, it is sent plainly.
/// The invoker gets a hidden confirmation first.
pub async fn run(
    _state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let options = command.data.options();
    let message = require(string_option(&options, "message"), "message")?;
    let reply_to = string_option(&options, "reply_to").and_then(parse_trailing_id);

    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .content("✅")
                    .ephemeral(true),
            ),
        )
        .await?;

    if let Some(message_id) = reply_to {
        match command
            .channel_id
            .message(&ctx.http, MessageId::new(message_id))
            .await
        {
            Ok(target) => {
                target.reply(&ctx.http, message).await?;
                return Ok(());
            }
            Err(e) => tracing::debug!(
                "Could not fetch message {} to reply to, sending plainly: {}",
                message_id,
                e
            ),
        }
    }

    command.channel_id.say(&ctx.http, message).await?;

    Ok(())
}
