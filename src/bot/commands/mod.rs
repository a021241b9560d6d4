//! Slash command definitions and handlers.
//!
//! Every command module exposes a `NAME`, a `register()` returning its definition,
//! and a `run()` that answers an invocation. Moderation commands carry default
//! member permissions so Discord hides them from regular members, and re-check the
//! invoking member's permissions at runtime.

use serenity::all::{
    ChannelId, CommandInteraction, CreateCommand, Permissions, ResolvedOption, ResolvedValue, User,
};

use crate::error::AppError;

pub mod activity;
pub mod blackjack;
pub mod bypass;
pub mod explosion;
pub mod gambling_machine;
pub mod moderation;
pub mod roblox;
pub mod say;
pub mod setforumlogs;

/// Definitions of every slash command the bot registers.
pub fn all() -> Vec<CreateCommand> {
    vec![
        gambling_machine::register(),
        blackjack::register(),
        activity::register(),
        moderation::register_mute(),
        moderation::register_unmute(),
        roblox::register(),
        bypass::register(),
        setforumlogs::register(),
        explosion::register(),
        say::register(),
    ]
}

fn find<'a, 'b>(options: &'b [ResolvedOption<'a>], name: &str) -> Option<&'b ResolvedValue<'a>> {
    options
        .iter()
        .find(|option| option.name == name)
        .map(|option| &option.value)
}

pub fn string_option<'a>(options: &[ResolvedOption<'a>], name: &str) -> Option<&'a str> {
    match find(options, name)? {
        ResolvedValue::String(value) => Some(*value),
        _ => None,
    }
}

pub fn integer_option(options: &[ResolvedOption<'_>], name: &str) -> Option<i64> {
    match find(options, name)? {
        ResolvedValue::Integer(value) => Some(*value),
        _ => None,
    }
}

pub fn user_option<'a>(options: &[ResolvedOption<'a>], name: &str) -> Option<&'a User> {
    match find(options, name)? {
        ResolvedValue::User(user, _) => Some(*user),
        _ => None,
    }
}

pub fn channel_option(options: &[ResolvedOption<'_>], name: &str) -> Option<ChannelId> {
    match find(options, name)? {
        ResolvedValue::Channel(channel) => Some(channel.id),
        _ => None,
    }
}

/// Turns a missing required option into a user-facing error.
///
/// Discord enforces required options, so this only fires on a stale command
/// definition.
pub fn require<T>(value: Option<T>, name: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::BadRequest(format!("Missing option `{name}`.")))
}

/// Checks that the invoking member holds `permission`.
///
/// # Returns
/// - `Ok(())` - Member has the permission (administrators always do)
/// - `Err(AppError::Forbidden)` - Not invoked by a guild member with the permission
pub fn require_permission(
    command: &CommandInteraction,
    permission: Permissions,
    permission_name: &str,
) -> Result<(), AppError> {
    let permissions = command
        .member
        .as_ref()
        .and_then(|member| member.permissions)
        .unwrap_or_else(Permissions::empty);

    if permissions.administrator() || permissions.contains(permission) {
        Ok(())
    } else {
        Err(AppError::Forbidden(format!(
            "You need the {permission_name} permission."
        )))
    }
}
