//! Test factory for creating Serenity GuildChannel objects representing threads.

use serenity::all::GuildChannel;

/// Creates a test public thread, as created by posting in a forum channel.
///
/// # Arguments
/// - `thread_id` - Discord channel ID of the thread (snowflake)
/// - `guild_id` - Guild the thread belongs to
/// - `name` - Thread title
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
pub fn create_test_thread(thread_id: u64, guild_id: u64, name: &str) -> GuildChannel {
    serde_json::from_value(serde_json::json!({
        "id": thread_id.to_string(),
        "guild_id": guild_id.to_string(),
        "type": 11,
        "name": name,
        "parent_id": "1",
        "owner_id": "2",
        "position": 0,
        "nsfw": false,
        "permission_overwrites": [],
        "rate_limit_per_user": 0,
        "message_count": 0,
        "member_count": 1,
        "flags": 0,
        "applied_tags": [],
        "thread_metadata": {
            "archived": false,
            "auto_archive_duration": 1440,
            "archive_timestamp": "2024-01-01T00:00:00.000000+00:00",
            "locked": false,
        },
    }))
    .expect("Failed to create test thread - invalid JSON structure")
}
