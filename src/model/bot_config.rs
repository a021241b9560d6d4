//! Persisted bot configuration and per-user activity counts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Entries shown in each half of the activity leaderboard.
pub const LEADERBOARD_SIZE: usize = 5;

/// Everything the bot keeps on disk.
///
/// Serialized as `{"log_channel_id": ..., "activity": {"<user id>": <count>}}`.
/// User ids are string keys so the file stays plain JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotConfig {
    /// Channel that new forum posts are announced in.
    #[serde(default)]
    pub log_channel_id: Option<u64>,

    /// Messages sent per user.
    #[serde(default)]
    pub activity: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub user_id: String,
    pub messages: u64,
}

/// Most and least active users.
///
/// `top` and `bottom` are slices of the same ordering, so with fewer than ten
/// users they overlap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaderboard {
    pub top: Vec<LeaderboardEntry>,
    pub bottom: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Ranks users by message count, highest first, breaking ties by user id.
    ///
    /// # Returns
    /// - `None` - No activity has been recorded
    /// - `Some(Leaderboard)` - First and last `size` entries of the ranking
    pub fn from_activity(activity: &BTreeMap<String, u64>, size: usize) -> Option<Self> {
        if activity.is_empty() {
            return None;
        }

        let mut ranked: Vec<LeaderboardEntry> = activity
            .iter()
            .map(|(user_id, &messages)| LeaderboardEntry {
                user_id: user_id.clone(),
                messages,
            })
            .collect();
        ranked.sort_by(|a, b| {
            b.messages
                .cmp(&a.messages)
                .then_with(|| a.user_id.cmp(&b.user_id))
        });

        let top = ranked.iter().take(size).cloned().collect();
        let bottom = ranked[ranked.len().saturating_sub(size)..].to_vec();

        Some(Self { top, bottom })
    }
}
