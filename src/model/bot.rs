use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Live connection status of the bot.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BotStatusDto {
    pub online: bool,
    /// `name#discriminator` of the bot account, once connected.
    pub tag: Option<String>,
    pub user_id: Option<String>,
    pub uptime_secs: u64,
    /// Average heartbeat latency across shards, once one has been measured.
    pub latency_ms: Option<u64>,
    pub guild_count: usize,
    pub user_count: usize,
}

/// Aggregate statistics shown on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BotStatsDto {
    pub guild_count: usize,
    pub user_count: usize,
    pub commands_used: u64,
    /// Human readable uptime, e.g. `"1d 2h 3m 4s"`.
    pub uptime: String,
    pub uptime_secs: u64,
}

/// One periodic statistics snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshotDto {
    pub server_count: i64,
    pub user_count: i64,
    pub uptime_secs: i64,
    pub commands_executed: i64,
    pub recorded_at: DateTime<Utc>,
}
