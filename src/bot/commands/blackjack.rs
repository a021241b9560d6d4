//! `/blackjack` and its Hit/Stand buttons.
//!
//! The game message carries two buttons whose custom ids encode the action and the
//! session id: `blackjack:<action>:<session id>`. Only the player who started the
//! game can press them; presses from anyone else are acknowledged without change.

use serenity::all::{
    ButtonStyle, Colour, CommandInteraction, ComponentInteraction, Context, CreateActionRow,
    CreateButton, CreateCommand, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseMessage,
};

use crate::{
    error::AppError,
    model::{
        blackjack::{Action, GameSnapshot},
        card::Card,
    },
    service::blackjack::{ActionResult, SessionId},
    state::BotState,
    util::parse::parse_u64_from_string,
};

pub const NAME: &str = "blackjack";

/// Prefix shared by every blackjack button custom id.
pub const CUSTOM_ID_PREFIX: &str = "blackjack";

const HIDDEN_CARD: &str = "❓";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("Play a hand of blackjack against the dealer")
}

/// Deals a new game for the invoking user.
pub async fn run(
    state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let session_id = command.id.get();
    let snapshot = state
        .blackjack
        .start(session_id, command.user.id.get())
        .await?;

    let message = CreateInteractionResponseMessage::new()
        .embed(game_embed(&snapshot))
        .components(buttons(session_id));

    command
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await?;

    Ok(())
}

/// Handles a press of the Hit or Stand button.
///
/// # Arguments
/// - `action` - Button pressed
/// - `session_id` - Session encoded in the button's custom id
pub async fn handle_button(
    state: &BotState,
    ctx: &Context,
    component: &ComponentInteraction,
    action: Action,
    session_id: SessionId,
) -> Result<(), AppError> {
    let result = state
        .blackjack
        .act(session_id, component.user.id.get(), action)
        .await?;

    let response = match result {
        ActionResult::Ignored => CreateInteractionResponse::Acknowledge,
        ActionResult::Expired => CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .content("⌛ This game has expired. Start a new one with /blackjack.")
                .ephemeral(true),
        ),
        ActionResult::InProgress(snapshot) => CreateInteractionResponse::UpdateMessage(
            CreateInteractionResponseMessage::new().embed(game_embed(&snapshot)),
        ),
        ActionResult::Finished(snapshot) => CreateInteractionResponse::UpdateMessage(
            CreateInteractionResponseMessage::new()
                .embed(game_embed(&snapshot))
                .components(vec![]),
        ),
    };

    component.create_response(&ctx.http, response).await?;

    Ok(())
}

pub fn custom_id(action: Action, session_id: SessionId) -> String {
    format!("{CUSTOM_ID_PREFIX}:{}:{session_id}", action.as_str())
}

/// Parses a blackjack button custom id.
///
/// # Returns
/// - `None` - The id does not belong to a blackjack button
/// - `Some(Ok((Action, SessionId)))` - Decoded action and session
/// - `Some(Err(AppError))` - A blackjack id with an unknown action or bad session id
pub fn parse_custom_id(custom_id: &str) -> Option<Result<(Action, SessionId), AppError>> {
    let rest = custom_id.strip_prefix(CUSTOM_ID_PREFIX)?.strip_prefix(':')?;

    Some(parse_action_and_session(rest))
}

fn parse_action_and_session(rest: &str) -> Result<(Action, SessionId), AppError> {
    let (action, session_id) = rest
        .split_once(':')
        .ok_or_else(|| AppError::BadRequest("Unknown button.".to_string()))?;
    let action =
        Action::parse(action).ok_or_else(|| AppError::BadRequest("Unknown button.".to_string()))?;
    let session_id = parse_u64_from_string(session_id.to_string())?;

    Ok((action, session_id))
}

fn buttons(session_id: SessionId) -> Vec<CreateActionRow> {
    vec![CreateActionRow::Buttons(vec![
        CreateButton::new(custom_id(Action::Hit, session_id))
            .label("Hit")
            .style(ButtonStyle::Success),
        CreateButton::new(custom_id(Action::Stand, session_id))
            .label("Stand")
            .style(ButtonStyle::Danger),
    ])]
}

fn game_embed(snapshot: &GameSnapshot) -> CreateEmbed {
    let dealer = match snapshot.outcome {
        Some(_) => hand_field(&snapshot.dealer, snapshot.dealer_score),
        None => hidden_dealer_field(&snapshot.dealer),
    };

    let mut embed = CreateEmbed::new()
        .title("🃏 Blackjack")
        .colour(Colour::BLUE)
        .field("Your Hand", hand_field(&snapshot.player, snapshot.player_score), true)
        .field("Dealer's Hand", dealer, true);

    if let Some(outcome) = snapshot.outcome {
        embed = embed.description(outcome.message());
    }

    embed
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn hand_field(cards: &[Card], score: u32) -> String {
    format!("{}\nScore: **{}**", format_cards(cards), score)
}

/// Shows only the dealer's first card while the player is still deciding.
fn hidden_dealer_field(cards: &[Card]) -> String {
    match cards.first() {
        Some(card) => format!("{card}, {HIDDEN_CARD}"),
        None => HIDDEN_CARD.to_string(),
    }
}
