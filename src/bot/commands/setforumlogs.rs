use serenity::all::{
    ChannelType, CommandInteraction, CommandOptionType, Context, CreateCommand,
    CreateCommandOption, CreateInteractionResponse, CreateInteractionResponseMessage, Mentionable,
    Permissions,
};

use crate::{
    bot::commands::{channel_option, require, require_permission},
    error::AppError,
    service::forum_log::ForumLogService,
    state::BotState,
};

pub const NAME: &str = "setforumlogs";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Set the channel new forum posts are announced in")
        .default_member_permissions(Permissions::ADMINISTRATOR)
        .add_option(
            CreateCommandOption::new(CommandOptionType::Channel, "channel", "Log channel")
                .required(true)
                .channel_types(vec![ChannelType::Text]),
        )
}

pub async fn run(
    state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    require_permission(command, Permissions::ADMINISTRATOR, "Administrator")?;

    let options = command.data.options();
    let channel_id = require(channel_option(&options, "channel"), "channel")?;

    ForumLogService::new(&state.store)
        .set_channel(channel_id.get())
        .await?;

    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .content(format!("✅ Set to {}", channel_id.mention()))
                    .ephemeral(true),
            ),
        )
        .await?;

    Ok(())
}
