//! `/mute` and `/unmute`, implemented with Discord's member timeout.

use chrono::{DateTime, Utc};
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateInteractionResponse, CreateInteractionResponseMessage, EditMember, GuildId, Mentionable,
    Permissions, Timestamp,
};

use crate::{
    bot::commands::{integer_option, require, require_permission, user_option},
    error::{internal::InternalError, AppError},
    state::BotState,
};

pub const MUTE: &str = "mute";
pub const UNMUTE: &str = "unmute";

/// Longest timeout Discord accepts, 28 days.
pub const MAX_MUTE_MINUTES: i64 = 28 * 24 * 60;

pub fn register_mute() -> CreateCommand {
    CreateCommand::new(MUTE)
        .description("Time out a member")
        .default_member_permissions(Permissions::MODERATE_MEMBERS)
        .add_option(
            CreateCommandOption::new(CommandOptionType::User, "member", "Member to mute")
                .required(true),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::Integer, "minutes", "Duration in minutes")
                .required(true)
                .min_int_value(1)
                .max_int_value(MAX_MUTE_MINUTES as u64),
        )
}

pub fn register_unmute() -> CreateCommand {
    CreateCommand::new(UNMUTE)
        .description("Remove a member's timeout")
        .default_member_permissions(Permissions::MODERATE_MEMBERS)
        .add_option(
            CreateCommandOption::new(CommandOptionType::User, "member", "Member to unmute")
                .required(true),
        )
}

pub async fn run_mute(
    _state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = require_guild(command)?;
    require_permission(command, Permissions::MODERATE_MEMBERS, "Moderate Members")?;

    let options = command.data.options();
    let member = require(user_option(&options, "member"), "member")?;
    let minutes = require(integer_option(&options, "minutes"), "minutes")?;

    let until = timeout_until(Utc::now(), minutes)?;

    guild_id
        .edit_member(
            &ctx.http,
            member.id,
            EditMember::new().disable_communication_until_datetime(until),
        )
        .await?;

    tracing::info!(
        "{} muted {} in guild {} for {} minutes",
        command.user.id,
        member.id,
        guild_id,
        minutes
    );

    respond_ephemeral(ctx, command, format!("🔇 Muted {}", member.mention())).await
}

pub async fn run_unmute(
    _state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = require_guild(command)?;
    require_permission(command, Permissions::MODERATE_MEMBERS, "Moderate Members")?;

    let options = command.data.options();
    let member = require(user_option(&options, "member"), "member")?;

    guild_id
        .edit_member(&ctx.http, member.id, EditMember::new().enable_communication())
        .await?;

    tracing::info!(
        "{} unmuted {} in guild {}",
        command.user.id,
        member.id,
        guild_id
    );

    respond_ephemeral(ctx, command, format!("🔊 Unmuted {}", member.mention())).await
}

/// Computes when a timeout of `minutes` starting at `now` ends.
///
/// # Returns
/// - `Ok(Timestamp)` - End of the timeout
/// - `Err(AppError::BadRequest)` - `minutes` is outside `1..=MAX_MUTE_MINUTES`
/// - `Err(AppError::InternalErr(InvalidDiscordTimestamp))` - End time not representable
fn timeout_until(now: DateTime<Utc>, minutes: i64) -> Result<Timestamp, AppError> {
    if !(1..=MAX_MUTE_MINUTES).contains(&minutes) {
        return Err(AppError::BadRequest(format!(
            "Minutes must be between 1 and {MAX_MUTE_MINUTES}."
        )));
    }

    let until = (now + chrono::Duration::minutes(minutes)).timestamp();

    Timestamp::from_unix_timestamp(until).map_err(|e| {
        InternalError::InvalidDiscordTimestamp {
            timestamp: until,
            reason: e.to_string(),
        }
        .into()
    })
}

fn require_guild(command: &CommandInteraction) -> Result<GuildId, AppError> {
    command
        .guild_id
        .ok_or_else(|| AppError::BadRequest("This command only works in a server.".to_string()))
}

async fn respond_ephemeral(
    ctx: &Context,
    command: &CommandInteraction,
    content: String,
) -> Result<(), AppError> {
    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .content(content)
                    .ephemeral(true),
            ),
        )
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_ends_minutes_after_now() {
        let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();

        let until = timeout_until(now, 10).unwrap();

        assert_eq!(until.unix_timestamp(), 1_700_000_600);
    }

    #[test]
    fn accepts_the_longest_timeout() {
        let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();

        let until = timeout_until(now, MAX_MUTE_MINUTES).unwrap();

        assert_eq!(until.unix_timestamp(), 1_700_000_000 + 40320 * 60);
    }

    #[test]
    fn rejects_out_of_range_minutes() {
        let now = Utc::now();

        for minutes in [0, -5, MAX_MUTE_MINUTES + 1] {
            assert!(
                matches!(timeout_until(now, minutes), Err(AppError::BadRequest(_))),
                "{minutes}"
            );
        }
    }
}
