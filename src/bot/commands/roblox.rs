use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateEmbed, CreateInteractionResponseFollowup,
};

use crate::{
    bot::commands::{require, string_option},
    error::AppError,
    model::lookup::RobloxProfile,
    state::BotState,
};

pub const NAME: &str = "roblox";

const ACTIVE_COLOUR: u32 = 0x00FF00;
const BANNED_COLOUR: u32 = 0xFF0000;

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Look up a Roblox user")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "username", "Roblox username")
                .required(true),
        )
}

/// Looks up a Roblox account and shows its status and avatar.
///
/// Lookups can be slow, so the response is deferred first. Lookup failures are
/// logged and shown to the user as a generic error.
pub async fn run(
    state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let options = command.data.options();
    let username = require(string_option(&options, "username"), "username")?;

    command.defer(&ctx.http).await?;

    let followup = match state.roblox.lookup(username).await {
        Ok(Some(profile)) => {
            CreateInteractionResponseFollowup::new().embed(profile_embed(&profile))
        }
        Ok(None) => CreateInteractionResponseFollowup::new().content("❌ Not found."),
        Err(e) => {
            tracing::warn!("Roblox lookup for {:?} failed: {}", username, e);
            CreateInteractionResponseFollowup::new().content(e.user_message())
        }
    };

    command.create_followup(&ctx.http, followup).await?;

    Ok(())
}

fn profile_embed(profile: &RobloxProfile) -> CreateEmbed {
    let (status, colour) = if profile.is_banned {
        ("BANNED", BANNED_COLOUR)
    } else {
        ("Active", ACTIVE_COLOUR)
    };

    let embed = CreateEmbed::new()
        .title(format!("Roblox: {}", profile.name))
        .url(format!("https://www.roblox.com/users/{}/profile", profile.id))
        .colour(colour)
        .field("Status", status, true);

    match &profile.avatar_url {
        Some(url) => embed.image(url),
        None => embed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn profile(is_banned: bool, avatar_url: Option<&str>) -> RobloxProfile {
        RobloxProfile {
            id: 156,
            name: "builderman".to_string(),
            is_banned,
            avatar_url: avatar_url.map(str::to_string),
        }
    }

    #[test]
    fn active_profile_is_green_with_avatar() {
        let embed = serde_json::to_value(profile_embed(&profile(
            false,
            Some("https://tr.rbxcdn.com/avatar.png"),
        )))
        .unwrap();

        assert_eq!(embed["title"], "Roblox: builderman");
        assert_eq!(embed["url"], "https://www.roblox.com/users/156/profile");
        assert_eq!(embed["color"], Value::from(ACTIVE_COLOUR));
        assert_eq!(embed["fields"][0]["value"], "Active");
        assert_eq!(embed["image"]["url"], "https://tr.rbxcdn.com/avatar.png");
    }

    #[test]
    fn banned_profile_is_red() {
        let embed = serde_json::to_value(profile_embed(&profile(true, None))).unwrap();

        assert_eq!(embed["color"], Value::from(BANNED_COLOUR));
        assert_eq!(embed["fields"][0]["value"], "BANNED");
        assert!(embed.get("image").map_or(true, Value::is_null));
    }
}
