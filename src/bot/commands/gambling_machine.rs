use std::time::Duration;

use serenity::all::{
    Colour, CommandInteraction, Context, CreateCommand, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseMessage, EditInteractionResponse,
};

use crate::{
    error::AppError,
    model::slots::{Reels, SlotSpin},
    state::BotState,
};

pub const NAME: &str = "gambling_machine";

const FRAME_DELAY: Duration = Duration::from_millis(600);
const JACKPOT_COLOUR: u32 = 0xFFD700;
const LOSS_COLOUR: u32 = 0xFF0000;

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("Spin the slot machine")
}

/// Spins the slot machine and animates the reels by editing the response.
///
/// The animation stops at the first edit that fails (the message was deleted or the
/// interaction token expired); nothing further is sent in that case.
pub async fn run(
    state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let spin = state.slots.spin();

    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new().embed(reel_embed(&Reels::spinning())),
            ),
        )
        .await?;

    for frame in &spin.frames {
        let edit = EditInteractionResponse::new().embed(reel_embed(frame));
        if let Err(e) = command.edit_response(&ctx.http, edit).await {
            tracing::warn!("Stopped slot animation for {}: {}", command.user.id, e);
            return Ok(());
        }
        tokio::time::sleep(FRAME_DELAY).await;
    }

    let edit = EditInteractionResponse::new().embed(result_embed(&spin));
    if let Err(e) = command.edit_response(&ctx.http, edit).await {
        tracing::warn!("Failed to show slot result for {}: {}", command.user.id, e);
    }

    Ok(())
}

fn reel_embed(reels: &Reels) -> CreateEmbed {
    CreateEmbed::new()
        .title("🎰 Spinning...")
        .description(reels.display())
        .colour(Colour::LIGHT_GREY)
}

fn result_embed(spin: &SlotSpin) -> CreateEmbed {
    let embed = CreateEmbed::new()
        .title("🎰 Result")
        .description(spin.result.display());

    if spin.is_win() {
        embed
            .colour(JACKPOT_COLOUR)
            .field("WINNER", "✨ JACKPOT! ✨", false)
    } else {
        embed.colour(LOSS_COLOUR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn spin_with(result: [&'static str; 3]) -> SlotSpin {
        SlotSpin {
            frames: vec![Reels(["🍎", "🍇", "💎"]); 3],
            result: Reels(result),
        }
    }

    #[test]
    fn jackpot_embed_is_gold_with_winner_field() {
        let embed = serde_json::to_value(result_embed(&spin_with(["💎", "💎", "💎"]))).unwrap();

        assert_eq!(embed["title"], "🎰 Result");
        assert_eq!(embed["color"], Value::from(JACKPOT_COLOUR));
        assert_eq!(embed["fields"][0]["name"], "WINNER");
        assert_eq!(embed["fields"][0]["value"], "✨ JACKPOT! ✨");
        assert_eq!(embed["description"], "**[ 💎 | 💎 | 💎 ]**");
    }

    #[test]
    fn losing_embed_is_red_without_fields() {
        let embed = serde_json::to_value(result_embed(&spin_with(["💎", "💎", "🍋"]))).unwrap();

        assert_eq!(embed["color"], Value::from(LOSS_COLOUR));
        assert!(embed.get("fields").map_or(true, |f| f.as_array().unwrap().is_empty()));
    }
}
