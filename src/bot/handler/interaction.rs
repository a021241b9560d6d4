//! Routes slash commands and button presses to their handlers.
//!
//! Handler errors are logged here and answered with an ephemeral message. If the
//! interaction was already answered (a deferred command, for instance) the notice is
//! sent as a follow-up instead.

use serenity::all::{
    CommandInteraction, ComponentInteraction, Context, CreateInteractionResponse,
    CreateInteractionResponseFollowup, CreateInteractionResponseMessage, Interaction,
};

use crate::{
    bot::commands::{
        activity, blackjack, bypass, explosion, gambling_machine, moderation, roblox, say,
        setforumlogs,
    },
    error::AppError,
    state::BotState,
};

pub async fn handle_interaction_create(state: &BotState, ctx: Context, interaction: Interaction) {
    match interaction {
        Interaction::Command(command) => handle_command(state, &ctx, &command).await,
        Interaction::Component(component) => handle_component(state, &ctx, &component).await,
        _ => {}
    }
}

async fn handle_command(state: &BotState, ctx: &Context, command: &CommandInteraction) {
    tracing::debug!("/{} invoked by {}", command.data.name, command.user.id);

    let result = match command.data.name.as_str() {
        gambling_machine::NAME => gambling_machine::run(state, ctx, command).await,
        blackjack::NAME => blackjack::run(state, ctx, command).await,
        activity::NAME => activity::run(state, ctx, command).await,
        moderation::MUTE => moderation::run_mute(state, ctx, command).await,
        moderation::UNMUTE => moderation::run_unmute(state, ctx, command).await,
        roblox::NAME => roblox::run(state, ctx, command).await,
        bypass::NAME => bypass::run(state, ctx, command).await,
        setforumlogs::NAME => setforumlogs::run(state, ctx, command).await,
        explosion::NAME => explosion::run(state, ctx, command).await,
        say::NAME => say::run(state, ctx, command).await,
        other => {
            tracing::warn!("Received unknown command /{}", other);
            Ok(())
        }
    };

    if let Err(e) = result {
        log_error(&e, &format!("/{}", command.data.name));

        let message = e.user_message();
        let response = CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .content(&message)
                .ephemeral(true),
        );

        if command.create_response(&ctx.http, response).await.is_err() {
            let followup = CreateInteractionResponseFollowup::new()
                .content(message)
                .ephemeral(true);
            if let Err(e) = command.create_followup(&ctx.http, followup).await {
                tracing::warn!("Failed to report error for /{}: {}", command.data.name, e);
            }
        }
    }
}

async fn handle_component(state: &BotState, ctx: &Context, component: &ComponentInteraction) {
    let custom_id = component.data.custom_id.as_str();

    let result = match blackjack::parse_custom_id(custom_id) {
        Some(Ok((action, session_id))) => {
            blackjack::handle_button(state, ctx, component, action, session_id).await
        }
        Some(Err(e)) => Err(e),
        None => {
            tracing::warn!("Received unknown component {}", custom_id);
            Ok(())
        }
    };

    if let Err(e) = result {
        log_error(&e, custom_id);

        let response = CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .content(e.user_message())
                .ephemeral(true),
        );
        if let Err(e) = component.create_response(&ctx.http, response).await {
            tracing::warn!("Failed to report error for component {}: {}", custom_id, e);
        }
    }
}

/// User mistakes are logged at debug, everything else as an error.
fn log_error(error: &AppError, source: &str) {
    match error {
        AppError::BadRequest(_) | AppError::Forbidden(_) => {
            tracing::debug!("{} rejected: {}", source, error)
        }
        _ => tracing::error!("{} failed: {}", source, error),
    }
}
