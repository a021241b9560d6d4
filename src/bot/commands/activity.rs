use serenity::all::{
    Colour, CommandInteraction, Context, CreateCommand, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseMessage,
};

use crate::{
    error::AppError,
    model::bot_config::{Leaderboard, LeaderboardEntry},
    service::activity::ActivityService,
    state::BotState,
};

pub const NAME: &str = "activity";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("Show the most and least active members")
}

pub async fn run(
    state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let service = ActivityService::new(&state.store);

    let message = match service.leaderboard().await {
        Some(leaderboard) => {
            CreateInteractionResponseMessage::new().embed(leaderboard_embed(&leaderboard))
        }
        None => CreateInteractionResponseMessage::new().content("No activity yet!"),
    };

    command
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await?;

    Ok(())
}

fn leaderboard_embed(leaderboard: &Leaderboard) -> CreateEmbed {
    CreateEmbed::new()
        .title("📊 Activity")
        .colour(Colour::PURPLE)
        .field("🔥 Top", format_entries(&leaderboard.top), false)
        .field("💤 Bottom", format_entries(&leaderboard.bottom), false)
}

fn format_entries(entries: &[LeaderboardEntry]) -> String {
    entries
        .iter()
        .map(|entry| format!("<@{}>: {} msgs", entry.user_id, entry.messages))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_one_line_per_user() {
        let entries = vec![
            LeaderboardEntry {
                user_id: "10".to_string(),
                messages: 7,
            },
            LeaderboardEntry {
                user_id: "20".to_string(),
                messages: 1,
            },
        ];

        assert_eq!(format_entries(&entries), "<@10>: 7 msgs\n<@20>: 1 msgs");
    }
}
