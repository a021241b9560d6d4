use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateInteractionResponseFollowup,
};

use crate::{
    bot::commands::{require, string_option},
    error::AppError,
    state::BotState,
};

pub const NAME: &str = "bypass";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Find where a shortened link leads")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "link", "Shortened link")
                .required(true),
        )
}

/// Resolves a shortened link. Only the invoking user sees the answer.
pub async fn run(
    state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let options = command.data.options();
    let link = require(string_option(&options, "link"), "link")?;

    command.defer_ephemeral(&ctx.http).await?;

    let content = match state.bypass.resolve(link).await {
        Ok(destination) => destination_message(destination.as_deref()),
        Err(e) => {
            tracing::warn!("Failed to bypass {:?}: {}", link, e);
            e.user_message()
        }
    };

    command
        .create_followup(
            &ctx.http,
            CreateInteractionResponseFollowup::new()
                .content(content)
                .ephemeral(true),
        )
        .await?;

    Ok(())
}

fn destination_message(destination: Option<&str>) -> String {
    match destination {
        Some(destination) => format!("🔓 Destination: {destination}"),
        None => "❌ No destination found.".to_string(),
    }
}
