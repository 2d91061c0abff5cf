use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Catalog entry for one chat command.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommandDto {
    pub name: String,
    pub description: String,
    /// `basic`, `moderation` or `utility`.
    pub category: String,
    /// Usage hint without the prefix, e.g. `kick @user [reason]`.
    pub usage: Option<String>,
    pub aliases: Vec<String>,
    /// Required Discord permissions, e.g. `KICK_MEMBERS`.
    pub permissions: Vec<String>,
}
