use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateEmbed, CreateInteractionResponse, CreateInteractionResponseMessage, Mentionable,
};

use crate::{
    bot::commands::{require, user_option},
    error::AppError,
    state::BotState,
};

pub const NAME: &str = "explosion";

const NUKE_COLOUR: u32 = 0xFF4500;
const NUKE_GIF: &str = "https://media.tenor.com/71K0Y966C-EAAAAC/operation-teapot-nuke.gif";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Drop a nuke on someone")
        .add_option(
            CreateCommandOption::new(CommandOptionType::User, "member", "Target")
                .required(true),
        )
}

pub async fn run(
    _state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let options = command.data.options();
    let target = require(user_option(&options, "member"), "member")?;

    let embed = CreateEmbed::new()
        .title("⚠️ NUKE")
        .description(format!("{} targeted!", target.mention()))
        .colour(NUKE_COLOUR)
        .image(NUKE_GIF);

    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(CreateInteractionResponseMessage::new().embed(embed)),
        )
        .await?;

    Ok(())
}
