//! Serenity `Guild` fixtures.

use serenity::all::{Guild, Role};

/// Creates a Serenity Guild owned by `owner_id` carrying the given roles.
///
/// Member, channel and presence lists are empty; `member_count` is fixed at 42 so
/// overview conversions have a non-zero count to report.
///
/// # Panics
/// - If a role cannot be serialized or the guild JSON cannot be deserialized
pub fn create_test_guild(guild_id: u64, name: &str, owner_id: u64, roles: &[Role]) -> Guild {
    let roles: Vec<serde_json::Value> = roles
        .iter()
        .map(|role| serde_json::to_value(role).expect("Failed to serialize test role"))
        .collect();

    serde_json::from_value(serde_json::json!({
        "id": guild_id.to_string(),
        "name": name,
        "icon": null,
        "owner_id": owner_id.to_string(),
        "afk_timeout": 300,
        "verification_level": 0,
        "default_message_notifications": 0,
        "explicit_content_filter": 0,
        "roles": roles,
        "emojis": [],
        "stickers": [],
        "features": [],
        "mfa_level": 0,
        "system_channel_flags": 0,
        "premium_tier": 0,
        "premium_subscription_count": 0,
        "premium_progress_bar_enabled": false,
        "preferred_locale": "en-US",
        "nsfw_level": 0,
        "joined_at": "2024-01-01T00:00:00.000000+00:00",
        "large": false,
        "member_count": 42,
        "voice_states": [],
        "channels": [],
        "threads": [],
        "presences": [],
        "max_presences": 25000,
        "max_members": 100000,
        "unavailable": false,
        "members": [],
        "stage_instances": [],
        "guild_scheduled_events": [],
    }))
    .expect("Failed to create test guild - invalid JSON structure")
}
