use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModerationLogDto {
    pub id: String,
    pub guild_id: String,
    pub moderator_id: String,
    pub target_id: String,
    /// `kick`, `ban`, `mute`, `unmute`, `deafen` or `undeafen`.
    pub action: String,
    pub reason: Option<String>,
    /// Mute duration in minutes.
    pub duration: Option<i32>,
    pub created_at: DateTime<Utc>,
}
