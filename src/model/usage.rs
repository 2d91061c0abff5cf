use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommandUsageDto {
    pub id: String,
    /// Absent for commands used in direct messages.
    pub guild_id: Option<String>,
    pub user_id: String,
    pub command: String,
    pub used_at: DateTime<Utc>,
}
